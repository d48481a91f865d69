//! Schema errors raised while decorating a raw AST.

use thiserror::Error;

use crate::NodeKind;

/// A raw node did not match the fixed API Blueprint schema.
///
/// Every variant carries the JSON pointer of the offending node
/// (`""` for the document itself).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// An expected child collection is absent.
    #[error("{kind} at '{path}' is missing its '{collection}' collection")]
    MissingCollection {
        kind: NodeKind,
        collection: &'static str,
        path: String,
    },

    /// A child collection exists but is not an array.
    #[error("'{collection}' of {kind} at '{path}' is not an array")]
    NotACollection {
        kind: NodeKind,
        collection: &'static str,
        path: String,
    },

    /// A node is not a JSON object.
    #[error("{kind} at '{path}' is not an object")]
    NotAnObject { kind: NodeKind, path: String },
}

impl SchemaError {
    /// JSON pointer of the node the error refers to.
    pub fn path(&self) -> &str {
        match self {
            SchemaError::MissingCollection { path, .. }
            | SchemaError::NotACollection { path, .. }
            | SchemaError::NotAnObject { path, .. } => path,
        }
    }

    /// Kind of the node the error refers to.
    pub fn kind(&self) -> NodeKind {
        match self {
            SchemaError::MissingCollection { kind, .. }
            | SchemaError::NotACollection { kind, .. }
            | SchemaError::NotAnObject { kind, .. } => *kind,
        }
    }
}
