//! Visitor trait for walking decorated AST nodes.
//!
//! Every handler has a no-op default, so a visitor implements only the
//! kinds it cares about. A handler that is not implemented is never an
//! error; a handler that returns `Err` stops the walk.

use crate::ApiNode;
use crate::context::Context;

use super::walk::dispatch;

/// Result type for visitor handlers.
///
/// - `Ok(())` - keep walking
/// - `Err(e)` - abort the walk; `e` is returned from `accept`
pub type VisitResult<E> = Result<(), E>;

/// Visitor over a decorated API Blueprint AST.
///
/// # Lifetime
///
/// The `'a` lifetime ties visited nodes and contexts to the arena and raw
/// document, so a visitor may keep them past the walk.
///
/// # Context
///
/// Handlers below the root receive the ancestor [`Context`]. A group sees
/// only its own name; a resource and everything under it also see each
/// ancestor node, and the visited node itself, under the lower-cased kind
/// name.
pub trait Visitor<'a>: Sized {
    /// Error a handler may fail with. Use [`std::convert::Infallible`] for
    /// visitors that cannot fail.
    type Error;

    /// Visits any node by dispatching to the kind-specific handler.
    ///
    /// Called once per node. The root is visited without a context.
    /// Override this if you need custom dispatch logic.
    #[inline]
    fn visit(
        &mut self,
        node: &'a ApiNode<'a>,
        ctx: Option<&Context<'a>>,
    ) -> VisitResult<Self::Error> {
        dispatch(self, node, ctx)
    }

    /// Visit the document root.
    fn visit_root(&mut self, _node: &'a ApiNode<'a>) -> VisitResult<Self::Error> {
        Ok(())
    }

    /// Visit a resource group.
    fn visit_group(
        &mut self,
        _node: &'a ApiNode<'a>,
        _ctx: &Context<'a>,
    ) -> VisitResult<Self::Error> {
        Ok(())
    }

    /// Visit a resource.
    fn visit_resource(
        &mut self,
        _node: &'a ApiNode<'a>,
        _ctx: &Context<'a>,
    ) -> VisitResult<Self::Error> {
        Ok(())
    }

    /// Visit an action.
    fn visit_action(
        &mut self,
        _node: &'a ApiNode<'a>,
        _ctx: &Context<'a>,
    ) -> VisitResult<Self::Error> {
        Ok(())
    }

    /// Visit a transaction example.
    fn visit_example(
        &mut self,
        _node: &'a ApiNode<'a>,
        _ctx: &Context<'a>,
    ) -> VisitResult<Self::Error> {
        Ok(())
    }

    /// Visit a request.
    fn visit_request(
        &mut self,
        _node: &'a ApiNode<'a>,
        _ctx: &Context<'a>,
    ) -> VisitResult<Self::Error> {
        Ok(())
    }

    /// Visit a response.
    fn visit_response(
        &mut self,
        _node: &'a ApiNode<'a>,
        _ctx: &Context<'a>,
    ) -> VisitResult<Self::Error> {
        Ok(())
    }

    /// Called once after a root walk has visited every node.
    ///
    /// Walks started from a group never reach this hook.
    fn post_visit(&mut self) -> VisitResult<Self::Error> {
        Ok(())
    }
}
