//! apib-visit CLI
//!
//! Walks API Blueprint ASTs produced by an external parser.

mod cli;
mod commands;
mod config;
mod error;
mod load;

use std::process::ExitCode;

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use tracing::error;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::count::run_count;
use commands::outline::run_outline;
use config::VisitConfig;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().into_diagnostic()?;
    let mut config = VisitConfig::load(cli.config.as_deref(), &cwd)?;

    match cli.command {
        Commands::Count { ast, format, kinds } => {
            if let Some(format) = format {
                config.format = format;
            }
            if !kinds.is_empty() {
                config.kinds = kinds;
            }
            run_count(&ast, &config)
        }
        Commands::Outline { ast } => run_outline(&ast),
    }
}
