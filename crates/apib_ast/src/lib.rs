//! # apib_ast
//!
//! Walkable API Blueprint AST for apib-visitor.
//!
//! This crate takes an API Blueprint AST that an external parser already
//! produced (as JSON) and makes it walkable with a [`Visitor`].
//!
//! ## Architecture
//!
//! - The raw document is never modified; [`decorate`] builds a parallel tree
//!   of [`ApiNode`] adapters, each pairing a raw node with its [`NodeKind`]
//! - Adapters are allocated in an [`AstArena`] (`bumpalo`) and freed together
//! - A walk threads an immutable [`Context`] of ancestors down the tree
//! - Dispatch is a closed `match` over [`NodeKind`]; unimplemented handlers
//!   are no-ops, failing handlers stop the walk
//!
//! ## Example
//!
//! ```rust
//! use std::convert::Infallible;
//!
//! use apib_ast::{ApiNode, AstArena, Context, Visitor, VisitResult, decorate};
//!
//! struct Uris(Vec<String>);
//!
//! impl<'a> Visitor<'a> for Uris {
//!     type Error = Infallible;
//!
//!     fn visit_resource(
//!         &mut self,
//!         node: &'a ApiNode<'a>,
//!         _ctx: &Context<'a>,
//!     ) -> VisitResult<Infallible> {
//!         self.0.extend(node.uri_template().map(str::to_string));
//!         Ok(())
//!     }
//! }
//!
//! let raw = serde_json::json!({
//!     "resourceGroups": [{
//!         "name": "Notes",
//!         "resources": [{ "uriTemplate": "/notes", "actions": [] }]
//!     }]
//! });
//!
//! let arena = AstArena::new();
//! let root = decorate(&arena, &raw).unwrap();
//! let mut uris = Uris(Vec::new());
//! root.accept(&mut uris).unwrap();
//! assert_eq!(uris.0, vec!["/notes"]);
//! ```

mod arena;
mod context;
mod decorate;
mod error;
mod node;
mod node_kind;
pub mod visitor;

pub use arena::AstArena;
pub use context::{Context, ContextValue};
pub use decorate::decorate;
pub use error::SchemaError;
pub use node::ApiNode;
pub use node_kind::{Collection, NodeKind, UnknownKind};

// Re-export commonly used visitor items for convenience
pub use visitor::{VisitResult, Visitor};

#[cfg(test)]
pub mod test_utils;
