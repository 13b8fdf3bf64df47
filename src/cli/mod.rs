//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand.

mod analyze;
mod history;

pub use analyze::{analyze_with_config, run_analyze, AnalyzeConfig};
pub use history::run_history;
