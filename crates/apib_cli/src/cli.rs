//! CLI argument definitions

use std::path::PathBuf;

use apib_ast::NodeKind;
use clap::{Parser, Subcommand};

use crate::config::OutputFormat;

/// apib-visit - Walk API Blueprint ASTs
#[derive(Parser)]
#[command(name = "apib-visit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Count the nodes of a JSON AST
    Count {
        /// JSON AST (or parse result) produced by an API Blueprint parser
        ast: PathBuf,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Node kind to count (repeatable)
        #[arg(short, long = "kind")]
        kinds: Vec<NodeKind>,
    },

    /// Print an indented outline of a JSON AST
    Outline {
        /// JSON AST (or parse result) produced by an API Blueprint parser
        ast: PathBuf,
    },
}
