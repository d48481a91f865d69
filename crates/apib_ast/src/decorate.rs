//! Tree decoration.
//!
//! Turns a raw API Blueprint AST (as JSON) into a tree of walkable
//! [`ApiNode`] adapters. The raw document is only read.

use std::fmt::Write;

use serde_json::Value;
use tracing::debug;

use crate::{ApiNode, AstArena, NodeKind, SchemaError};

/// Decorates a raw API Blueprint AST and returns its walkable root.
///
/// The whole tree is checked against the schema up front: every node must
/// be an object holding each collection its kind declares (`resourceGroups`,
/// `resources`, `actions`, `examples`, `requests`, `responses`). Empty
/// collections are fine.
///
/// Decorating the same document again yields an identical tree.
///
/// # Errors
///
/// Returns a [`SchemaError`] naming the first offending node. No partial
/// tree is returned.
///
/// # Example
///
/// ```rust
/// use apib_ast::{AstArena, NodeKind, decorate};
///
/// let raw = serde_json::json!({ "resourceGroups": [] });
/// let arena = AstArena::new();
/// let root = decorate(&arena, &raw).unwrap();
/// assert_eq!(root.kind, NodeKind::Root);
/// ```
pub fn decorate<'a>(arena: &'a AstArena, raw: &'a Value) -> Result<&'a ApiNode<'a>, SchemaError> {
    let mut decorator = Decorator {
        arena,
        path: String::new(),
        count: 0,
    };
    let root = decorator.node(NodeKind::Root, raw)?;
    debug!(
        "Decorated {} nodes ({} bytes)",
        decorator.count,
        arena.allocated_bytes()
    );
    Ok(arena.alloc(root))
}

struct Decorator<'a> {
    arena: &'a AstArena,
    /// JSON pointer of the node being decorated.
    path: String,
    count: usize,
}

impl<'a> Decorator<'a> {
    fn node(&mut self, kind: NodeKind, raw: &'a Value) -> Result<ApiNode<'a>, SchemaError> {
        let Some(object) = raw.as_object() else {
            return Err(SchemaError::NotAnObject {
                kind,
                path: self.path.clone(),
            });
        };
        self.count += 1;

        let mut children = Vec::new();
        for collection in kind.collections() {
            let items = match object.get(collection.key) {
                Some(Value::Array(items)) => items,
                Some(_) => {
                    return Err(SchemaError::NotACollection {
                        kind,
                        collection: collection.key,
                        path: self.path.clone(),
                    });
                }
                None => {
                    return Err(SchemaError::MissingCollection {
                        kind,
                        collection: collection.key,
                        path: self.path.clone(),
                    });
                }
            };

            for (index, item) in items.iter().enumerate() {
                let parent_len = self.path.len();
                // Writing to a String cannot fail.
                let _ = write!(self.path, "/{}/{}", collection.key, index);
                let child = self.node(collection.kind, item);
                self.path.truncate(parent_len);
                children.push(child?);
            }
        }

        Ok(ApiNode::new(kind, raw, self.arena.alloc_slice_copy(&children)))
    }
}
