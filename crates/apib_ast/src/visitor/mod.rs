//! Visitor protocol for walking a decorated API Blueprint AST.
//!
//! # Overview
//!
//! - [`Visitor`] - one handler per node kind, each a no-op by default, plus
//!   the [`Visitor::post_visit`] completion hook
//! - [`dispatch`] - routes a node to the handler for its kind
//! - [`walk_root`], [`walk_group`], [`walk_node`] - the traversal
//!   operations behind [`ApiNode::accept`](crate::ApiNode::accept)
//!
//! Nodes are visited depth-first, pre-order, in document order. Within an
//! example all requests come before all responses.
//!
//! # Example
//!
//! Counting resources, requests and responses:
//!
//! ```rust
//! use std::convert::Infallible;
//!
//! use apib_ast::{ApiNode, AstArena, Context, decorate};
//! use apib_ast::visitor::{VisitResult, Visitor};
//!
//! #[derive(Default)]
//! struct Counter {
//!     resources: usize,
//!     requests: usize,
//!     responses: usize,
//!     totals: Option<(usize, usize, usize)>,
//! }
//!
//! impl<'a> Visitor<'a> for Counter {
//!     type Error = Infallible;
//!
//!     fn visit_resource(
//!         &mut self,
//!         _: &'a ApiNode<'a>,
//!         _: &Context<'a>,
//!     ) -> VisitResult<Infallible> {
//!         self.resources += 1;
//!         Ok(())
//!     }
//!
//!     fn visit_request(
//!         &mut self,
//!         _: &'a ApiNode<'a>,
//!         _: &Context<'a>,
//!     ) -> VisitResult<Infallible> {
//!         self.requests += 1;
//!         Ok(())
//!     }
//!
//!     fn visit_response(
//!         &mut self,
//!         _: &'a ApiNode<'a>,
//!         _: &Context<'a>,
//!     ) -> VisitResult<Infallible> {
//!         self.responses += 1;
//!         Ok(())
//!     }
//!
//!     fn post_visit(&mut self) -> VisitResult<Infallible> {
//!         self.totals = Some((self.resources, self.requests, self.responses));
//!         Ok(())
//!     }
//! }
//!
//! let raw = serde_json::json!({
//!     "resourceGroups": [{
//!         "name": "Notes",
//!         "resources": [{
//!             "uriTemplate": "/notes",
//!             "actions": [{
//!                 "method": "GET",
//!                 "examples": [{ "requests": [{}], "responses": [{ "name": "200" }] }]
//!             }]
//!         }]
//!     }]
//! });
//!
//! let arena = AstArena::new();
//! let root = decorate(&arena, &raw).unwrap();
//! let mut counter = Counter::default();
//! root.accept(&mut counter).unwrap();
//! assert_eq!(counter.totals, Some((1, 1, 1)));
//! ```

mod visit;
mod walk;

pub use visit::{VisitResult, Visitor};
pub use walk::{dispatch, walk_group, walk_node, walk_root};
