//! CLI error types.

use std::path::PathBuf;

use apib_ast::SchemaError;

/// Errors that can occur while loading or walking an AST.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum CliError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid blueprint AST in {}: {source}", path.display())]
    #[diagnostic(help("the AST must follow the API Blueprint legacy AST layout"))]
    Schema {
        path: PathBuf,
        #[source]
        source: SchemaError,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
