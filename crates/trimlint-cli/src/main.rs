//! trimlint CLI tool.
//!
//! Usage:
//! ```bash
//! trimlint check [OPTIONS] [PATH]
//! trimlint format [OPTIONS] [PATH]
//! trimlint list-rules
//! trimlint init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Finds and removes trailing whitespace in source files
#[derive(Parser)]
#[command(name = "trimlint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "TRIMLINT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by `check` and `format`.
#[derive(clap::Args)]
pub struct TargetArgs {
    /// File or directory to process (default: config root, then current directory)
    pub path: Option<PathBuf>,

    /// Only run specific rules (comma-separated names or codes)
    #[arg(long)]
    pub rules: Option<String>,

    /// Exclude patterns (can be specified multiple times)
    #[arg(short, long)]
    pub exclude: Vec<String>,

    /// Read source text from stdin instead of files
    #[arg(long, conflicts_with = "path")]
    pub stdin: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Report violations without modifying files
    Check {
        #[command(flatten)]
        target: TargetArgs,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Fix violations in place
    Format {
        #[command(flatten)]
        target: TargetArgs,

        /// Only list files that would change; exit non-zero if any would
        #[arg(long)]
        dry_run: bool,

        /// Output format for the summary
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// List available rules
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-violation compact format.
    Compact,
    /// Rich diagnostics with source snippets.
    Pretty,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose { "debug" } else { "warn" })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check { target, format } => {
            commands::check::run(&target, format, cli.config.as_deref())
        }
        Commands::Format {
            target,
            dry_run,
            format,
        } => commands::format::run(&target, dry_run, format, cli.config.as_deref()),
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(ExitCode::SUCCESS)
        }
        Commands::Init { force } => commands::init::run(force).map(|()| ExitCode::SUCCESS),
    }
}
