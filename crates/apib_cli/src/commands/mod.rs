//! Subcommand implementations

pub mod count;
pub mod outline;

use std::path::Path;

use apib_ast::{ApiNode, AstArena, decorate};
use serde_json::Value;

use crate::error::CliError;

/// Decorates a loaded AST, attributing schema errors to `path`.
fn decorate_file<'a>(
    arena: &'a AstArena,
    raw: &'a Value,
    path: &Path,
) -> Result<&'a ApiNode<'a>, CliError> {
    decorate(arena, raw).map_err(|source| CliError::Schema {
        path: path.to_path_buf(),
        source,
    })
}
