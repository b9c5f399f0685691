//! qgen-review: terminal review client for qgen datasets
//!
//! Approve, reject, and edit generated tuples and queries against a running
//! qgen backend.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use qgen_review::{
    cli::{self, OutputFormat, ReviewArgs},
    config::{self, AppConfig, StartScreen, Validatable},
    model::Stage,
    HttpBackend,
};
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "qgen-review")]
#[command(version)]
#[command(about = "Terminal review client for qgen datasets", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Review generated tuples for a project
    qgen-review review support-bot --screen tuples

    # Point at a remote backend
    QGEN_API_URL=http://qgen.internal:8000 qgen-review projects

    # Dump approved tuples as JSON
    qgen-review tuples support-bot --stage approved -o json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Backend URL (overrides the config file)
    #[arg(long, global = true, env = "QGEN_API_URL")]
    api_url: Option<String>,

    /// Write logs to this file (the review UI discards them otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive review UI for a project
    Review {
        /// Project name
        project: String,

        /// Screen to open on
        #[arg(long, value_enum)]
        screen: Option<StartScreen>,

        /// Stage the review grids open on
        #[arg(long, value_enum)]
        stage: Option<Stage>,
    },

    /// List projects, most recently modified first
    Projects {
        /// Maximum number of projects to list
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List configured LLM providers
    Providers,

    /// Show a project's status card
    Status {
        /// Project name
        project: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Print the tuples stored in one stage
    Tuples {
        /// Project name
        project: String,

        /// Stage to read
        #[arg(long, value_enum, default_value_t = Stage::Generated)]
        stage: Stage,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

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
    /// Generate an example .qgen-review.yaml in the current directory
    Init,
    /// Print the JSON Schema for the config file format
    Schema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let interactive = matches!(cli.command, Commands::Review { .. });
    init_logging(cli.verbose, cli.quiet, cli.log_file.as_deref(), interactive)?;

    match cli.command {
        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "qgen-review", &mut io::stdout());
            Ok(())
        }

        Commands::Config { action } => run_config(action, cli.config.as_deref()),

        command => {
            let config = load_config(cli.config.as_deref(), cli.api_url.as_deref())?;
            let backend =
                HttpBackend::new(config.http_config()).context("failed to build HTTP client")?;
            let mut stdout = io::stdout();

            match command {
                Commands::Review {
                    project,
                    screen,
                    stage,
                } => {
                    let args = ReviewArgs {
                        project,
                        screen,
                        stage,
                    };
                    cli::run_review(&config, Box::new(backend), &args)
                }
                Commands::Projects { limit } => cli::run_projects(&backend, limit, &mut stdout),
                Commands::Providers => cli::run_providers(&backend, &mut stdout),
                Commands::Status { project, output } => {
                    cli::run_status(&backend, &project, output, &mut stdout)
                }
                Commands::Tuples {
                    project,
                    stage,
                    output,
                } => cli::run_tuples(&backend, &project, stage, output, &mut stdout),
                Commands::Config { .. } | Commands::Completions { .. } => Ok(()),
            }
        }
    }
}

/// Install the tracing subscriber.
///
/// The review UI owns the terminal, so its logs go to `--log-file` or nowhere.
fn init_logging(
    verbose: bool,
    quiet: bool,
    log_file: Option<&Path>,
    interactive: bool,
) -> Result<()> {
    let log_level = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };

    let writer = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None if interactive => BoxMakeWriter::new(io::sink),
        None => BoxMakeWriter::new(io::stderr),
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(log_file.is_none())
                .with_writer(writer),
        )
        .init();
    Ok(())
}

/// Load, merge, and validate configuration.
fn load_config(explicit: Option<&Path>, api_url: Option<&str>) -> Result<AppConfig> {
    let (mut config, loaded_from) = config::load_or_default(explicit);
    if let Some(path) = &loaded_from {
        tracing::debug!("loaded config from {}", path.display());
    }
    config.merge_cli(api_url);

    let errors = config.validate();
    if !errors.is_empty() {
        for error in &errors {
            tracing::error!("invalid config: {}", error);
        }
        let summary: Vec<String> = errors.iter().map(ToString::to_string).collect();
        anyhow::bail!("invalid configuration: {}", summary.join("; "));
    }
    Ok(config)
}

fn run_config(action: ConfigAction, explicit: Option<&Path>) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let (config, loaded_from) = config::load_or_default(explicit);
            if let Some(path) = &loaded_from {
                eprintln!("# Loaded from: {}", path.display());
            } else {
                eprintln!("# No config file found; showing defaults");
            }
            let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
            print!("{yaml}");
            Ok(())
        }
        ConfigAction::Path => {
            let search_paths: [Option<String>; 3] = [
                std::env::current_dir()
                    .ok()
                    .map(|p| p.display().to_string()),
                dirs::config_dir().map(|p| p.join("qgen-review").display().to_string()),
                dirs::home_dir().map(|p| p.display().to_string()),
            ];
            eprintln!("Config file search paths (in order, git root after the first):");
            for path in search_paths.into_iter().flatten() {
                eprintln!("  {path}");
            }
            eprintln!();
            eprintln!("Recognized file names:");
            for name in config::CONFIG_FILE_NAMES {
                eprintln!("  {name}");
            }
            eprintln!();
            match config::discover_config_file(explicit) {
                Some(path) => eprintln!("Active config file: {}", path.display()),
                None => eprintln!("No config file found."),
            }
            Ok(())
        }
        ConfigAction::Init => {
            let target = std::env::current_dir()
                .context("cannot determine current directory")?
                .join(".qgen-review.yaml");
            if target.exists() {
                anyhow::bail!(
                    "{} already exists. Remove it first to re-initialize.",
                    target.display()
                );
            }
            std::fs::write(&target, config::generate_example_config())
                .with_context(|| format!("failed to write {}", target.display()))?;
            eprintln!("Created {}", target.display());
            Ok(())
        }
        ConfigAction::Schema { output } => {
            let schema = config::generate_json_schema();
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => println!("{schema}"),
            }
            Ok(())
        }
    }
}
