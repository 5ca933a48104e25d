//! # vu CLI entry point
//!
//! Parses command-line arguments, loads configuration, installs the tracing
//! subscriber, and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use vu_cli::config::{run_config, LogFormat, VuConfig};
use vu_cli::replay::{run_replay, ReplayArgs};

/// Virtual Universe stack CLI.
///
/// Replays licensor and stability-monitor operations against in-memory
/// stores. Nothing is persisted between runs.
#[derive(Parser, Debug)]
#[command(name = "vu", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a YAML script of operations and print one JSON line per step.
    Replay(ReplayArgs),

    /// Print the effective configuration.
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = VuConfig::load_or_default(cli.config.as_deref());
    let format = config
        .as_ref()
        .map(|c| c.log.format)
        .unwrap_or_default();
    init_tracing(cli.verbose, format);

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(1);
        }
    };

    tracing::debug!(?config, "configuration loaded");

    let result = match cli.command {
        Commands::Replay(args) => run_replay(&args, &config),
        Commands::Config => run_config(&config),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

/// `RUST_LOG` wins over `-v` when set. Logs go to stderr; stdout carries
/// command output only.
fn init_tracing(verbose: u8, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    match format {
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
    }
}
