//! Walk functions for AST traversal.
//!
//! These are the traversal operations attached to decorated nodes. They are
//! used by [`ApiNode::accept`] and may be called directly.

use tracing::{debug, trace};

use crate::context::Context;
use crate::{ApiNode, NodeKind};

use super::visit::{VisitResult, Visitor};

/// Routes a node to the visitor's handler for its kind.
///
/// A missing context is treated as empty. The root handler takes none.
pub fn dispatch<'a, V>(
    visitor: &mut V,
    node: &'a ApiNode<'a>,
    ctx: Option<&Context<'a>>,
) -> VisitResult<V::Error>
where
    V: Visitor<'a>,
{
    trace!("Visiting {}", node.kind);

    let empty;
    let ctx = match ctx {
        Some(ctx) => ctx,
        None => {
            empty = Context::new();
            &empty
        }
    };

    match node.kind {
        NodeKind::Root => visitor.visit_root(node),
        NodeKind::Group => visitor.visit_group(node, ctx),
        NodeKind::Resource => visitor.visit_resource(node, ctx),
        NodeKind::Action => visitor.visit_action(node, ctx),
        NodeKind::Example => visitor.visit_example(node, ctx),
        NodeKind::Request => visitor.visit_request(node, ctx),
        NodeKind::Response => visitor.visit_response(node, ctx),
    }
}

/// Walks a whole document.
///
/// This function:
/// 1. Visits the root with no context
/// 2. Walks each group in order
/// 3. Calls `post_visit` exactly once
pub fn walk_root<'a, V>(visitor: &mut V, root: &'a ApiNode<'a>) -> VisitResult<V::Error>
where
    V: Visitor<'a>,
{
    debug!("Walking blueprint with {} groups", root.children.len());

    visitor.visit(root, None)?;
    for group in root.children {
        walk_group(visitor, group)?;
    }
    visitor.post_visit()?;

    debug!("Walk completed");
    Ok(())
}

/// Walks one group.
///
/// The group is visited with a fresh context holding only its name (empty if
/// it has none); each resource is then walked from that context.
///
/// Unlike [`walk_root`], this does not call `post_visit`.
pub fn walk_group<'a, V>(visitor: &mut V, group: &'a ApiNode<'a>) -> VisitResult<V::Error>
where
    V: Visitor<'a>,
{
    let ctx = Context::for_group(group.name().unwrap_or_default());

    visitor.visit(group, Some(&ctx))?;
    for resource in group.children {
        walk_node(visitor, resource, &ctx)?;
    }
    Ok(())
}

/// Walks a resource, action, example, request or response.
///
/// The node is recorded in a new context extending `ctx` under its
/// lower-cased kind, visited, and then each child is walked from that new
/// context. `ctx` itself is left as it was.
pub fn walk_node<'a, V>(
    visitor: &mut V,
    node: &'a ApiNode<'a>,
    ctx: &Context<'a>,
) -> VisitResult<V::Error>
where
    V: Visitor<'a>,
{
    let ctx = ctx.with_node(node);

    visitor.visit(node, Some(&ctx))?;
    for child in node.children {
        walk_node(visitor, child, &ctx)?;
    }
    Ok(())
}
