//! Loading raw ASTs from disk.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::CliError;

/// Reads a JSON API Blueprint AST.
///
/// Accepts either the bare AST or a parse result holding it under `"ast"`.
pub fn read_ast(path: &Path) -> Result<Value, CliError> {
    let content = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let value: Value = serde_json::from_str(&content).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Loaded AST from {}", path.display());
    Ok(unwrap_parse_result(value))
}

fn unwrap_parse_result(mut value: Value) -> Value {
    if value.get("resourceGroups").is_none() {
        if let Some(ast) = value.get_mut("ast").filter(|ast| ast.is_object()) {
            debug!("Unwrapping AST from parse result");
            return ast.take();
        }
    }
    value
}
