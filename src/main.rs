//! seo-insight: SEO health scoring and recommendations
//!
//! Scores a website on four pillars and prints prioritized advice.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use seo_insight::{
    cli,
    config::{self, AppConfig, ConfigPreset, Validatable},
    pipeline::exit_codes,
    recommend::{Priority, RuleGroup, RuleSet},
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "seo-insight")]
#[command(version)]
#[command(about = "SEO health scoring and recommendations", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  A recommendation reached the --fail-on priority
    3  Error occurred

EXAMPLES:
    # Analyze a site
    seo-insight analyze example.com

    # Reproducible run, JSON output
    seo-insight analyze https://example.com --seed 42 -o json

    # Fail a CI job on critical findings
    seo-insight analyze https://example.com --fail-on critical --no-history")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `analyze` subcommand
#[derive(Parser)]
struct AnalyzeArgs {
    /// URL to analyze (`https://` is assumed when no scheme is given)
    url: String,

    /// Rule set: auto picks extended when business data exists
    #[arg(long, value_enum)]
    rules: Option<RuleSet>,

    /// Rule group to skip (repeatable)
    #[arg(long = "skip-group", value_enum)]
    skip_groups: Vec<RuleGroup>,

    /// Seed for reproducible simulated metrics
    #[arg(long)]
    seed: Option<u64>,

    /// Replay a snapshot JSON file instead of simulating metrics
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Exit with code 1 if a recommendation at or above this priority fires
    #[arg(long, value_enum)]
    fail_on: Option<Priority>,

    /// Do not record this analysis in the history
    #[arg(long)]
    no_history: bool,

    /// History file to use
    #[arg(long)]
    history_file: Option<PathBuf>,
}

/// Arguments for the `history` subcommand
#[derive(Parser)]
struct HistoryArgs {
    /// Remove all stored entries
    #[arg(long)]
    clear: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    output: Option<ReportFormat>,

    /// History file to use
    #[arg(long)]
    history_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a URL and print recommendations
    Analyze(AnalyzeArgs),

    /// Show or clear past analyses
    History(HistoryArgs),

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .seo-insight.yaml in the current directory
    Init {
        /// Preset to start from: default, ci-cd, baseline
        #[arg(long, default_value = "default")]
        preset: String,
    },
}

impl Cli {
    /// Config overrides from global flags.
    fn global_overrides(&self) -> AppConfig {
        let mut overrides = AppConfig::default();
        overrides.output.no_color = self.no_color;
        overrides.behavior.quiet = self.quiet;
        overrides
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    match run(cli) {
        Ok(exit_code) => {
            if exit_code != exit_codes::SUCCESS {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let mut overrides = cli.global_overrides();

    match cli.command {
        Commands::Analyze(args) => {
            if let Some(rules) = args.rules {
                overrides.engine.rule_set = rules;
            }
            overrides.engine.disabled_groups.extend(args.skip_groups);
            overrides.simulation.seed = args.seed;
            if let Some(format) = args.output {
                overrides.output.format = format;
            }
            overrides.output.file = args.output_file;
            overrides.behavior.fail_on = args.fail_on;
            overrides.history.enabled = !args.no_history;
            overrides.history.path = args.history_file;

            let (app, loaded_from) =
                AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides);
            if let Some(path) = loaded_from {
                tracing::debug!("Using config {}", path.display());
            }
            ensure_valid(&app)?;

            cli::run_analyze(cli::AnalyzeConfig {
                url: args.url,
                snapshot: args.snapshot,
                app,
            })
        }

        Commands::History(args) => {
            if let Some(format) = args.output {
                overrides.output.format = format;
            }
            overrides.history.path = args.history_file;

            let (app, _) = AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides);
            cli::run_history(&app, args.clear)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "seo-insight", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) = config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Path => {
                eprintln!("Config file search paths (in order):");
                for dir in config::config_search_dirs() {
                    eprintln!("  {}", dir.display());
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in config::CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Init { preset } => {
                let Some(preset) = ConfigPreset::from_name(&preset) else {
                    let valid: Vec<&str> = ConfigPreset::all().iter().map(ConfigPreset::name).collect();
                    anyhow::bail!("Unknown preset '{preset}'. Valid options: {}", valid.join(", "));
                };
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".seo-insight.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                std::fs::write(&target, config::generate_example_config(preset))
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(exit_codes::SUCCESS)
            }
        },
    }
}

/// Reject configurations that cannot produce a meaningful run.
fn ensure_valid(app: &AppConfig) -> Result<()> {
    let errors = app.validate();
    if errors.is_empty() {
        return Ok(());
    }
    let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
    anyhow::bail!("invalid configuration: {}", details.join("; "))
}
