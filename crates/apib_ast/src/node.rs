//! ApiNode definition.
//!
//! The walkable adapter wrapped around every node of a raw API Blueprint AST.

use serde_json::Value;

use crate::NodeKind;
use crate::context::Context;
use crate::visitor::{VisitResult, Visitor, walk_group, walk_node, walk_root};

/// A decorated node of the API Blueprint AST.
///
/// `ApiNode` pairs a read-only reference to the raw JSON node with its kind
/// tag and its decorated children. It is created by [`decorate`](crate::decorate)
/// and allocated in an [`AstArena`](crate::AstArena).
///
/// # Lifetime
///
/// The `'a` lifetime ties the adapter to both the arena and the raw
/// document it was decorated from.
#[derive(Debug, Clone, Copy)]
pub struct ApiNode<'a> {
    /// The kind of this node.
    pub kind: NodeKind,

    /// The raw JSON node, exactly as the parser produced it.
    pub raw: &'a Value,

    /// Decorated children, in schema order. For an example this is all
    /// requests followed by all responses.
    pub children: &'a [ApiNode<'a>],
}

impl<'a> ApiNode<'a> {
    #[inline]
    pub(crate) const fn new(kind: NodeKind, raw: &'a Value, children: &'a [ApiNode<'a>]) -> Self {
        Self {
            kind,
            raw,
            children,
        }
    }

    /// Walks this node and its descendants with `visitor`.
    ///
    /// - On a root, every node is dispatched and then
    ///   [`Visitor::post_visit`] fires once.
    /// - On a group, the walk starts from a fresh `{group: name}` context.
    ///   `post_visit` is **not** called; only a root walk completes.
    /// - On any other node, the walk starts from an empty context.
    ///
    /// A handler error stops the walk and is returned as is.
    pub fn accept<V>(&'a self, visitor: &mut V) -> VisitResult<V::Error>
    where
        V: Visitor<'a>,
    {
        match self.kind {
            NodeKind::Root => walk_root(visitor, self),
            NodeKind::Group => walk_group(visitor, self),
            _ => walk_node(visitor, self, &Context::new()),
        }
    }

    /// Walks this node with `ctx` as the ancestor context.
    ///
    /// Roots and groups build their own context and ignore `ctx`.
    pub fn accept_with<V>(&'a self, visitor: &mut V, ctx: &Context<'a>) -> VisitResult<V::Error>
    where
        V: Visitor<'a>,
    {
        match self.kind {
            NodeKind::Root | NodeKind::Group => self.accept(visitor),
            _ => walk_node(visitor, self, ctx),
        }
    }

    /// Returns true if this node has children.
    #[inline]
    pub const fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Returns the children of the given kind, in order.
    pub fn children_of(&self, kind: NodeKind) -> impl Iterator<Item = &'a ApiNode<'a>> + 'a {
        self.children.iter().filter(move |child| child.kind == kind)
    }

    /// Returns a raw field of this node.
    #[inline]
    pub fn field(&self, key: &str) -> Option<&'a Value> {
        self.raw.get(key)
    }

    /// Returns a raw field of this node if it is a string.
    #[inline]
    pub fn str_field(&self, key: &str) -> Option<&'a str> {
        self.field(key).and_then(Value::as_str)
    }

    /// The `name` of this node. Groups, resources, actions, requests and
    /// responses carry one; for responses it is the status code.
    #[inline]
    pub fn name(&self) -> Option<&'a str> {
        self.str_field("name")
    }

    /// Free-form `description` of this node, if present.
    #[inline]
    pub fn description(&self) -> Option<&'a str> {
        self.str_field("description")
    }

    /// HTTP method of an action.
    #[inline]
    pub fn method(&self) -> Option<&'a str> {
        self.str_field("method")
    }

    /// URI template of a resource.
    #[inline]
    pub fn uri_template(&self) -> Option<&'a str> {
        self.str_field("uriTemplate")
    }

    /// Message body of a request or response.
    #[inline]
    pub fn body(&self) -> Option<&'a str> {
        self.str_field("body")
    }

    /// Numeric status code of a response.
    pub fn status_code(&self) -> Option<u16> {
        if self.kind != NodeKind::Response {
            return None;
        }
        self.name().and_then(|name| name.trim().parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_blueprint;
    use crate::{AstArena, decorate};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_accessors() {
        let raw = sample_blueprint();
        let arena = AstArena::new();
        let root = decorate(&arena, &raw).unwrap();

        let group = &root.children[0];
        assert_eq!(group.name(), Some("Notes"));
        assert_eq!(
            group.description(),
            Some("Group of all note-related resources.")
        );

        let resource = &group.children[0];
        assert_eq!(resource.uri_template(), Some("/notes"));

        let action = &resource.children[0];
        assert_eq!(action.method(), Some("GET"));

        let example = &action.children[0];
        let responses: Vec<_> = example.children_of(NodeKind::Response).collect();
        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0].status_code(), Some(200));
        assert_eq!(responses[0].body(), Some("[]"));
    }

    #[test]
    fn test_status_code_only_for_responses() {
        let raw = sample_blueprint();
        let arena = AstArena::new();
        let root = decorate(&arena, &raw).unwrap();
        let example = &root.children[0].children[0].children[0].children[0];

        let request = example.children_of(NodeKind::Request).next().unwrap();
        assert_eq!(request.status_code(), None);
    }

    #[test]
    fn test_raw_node_is_shared_not_copied() {
        let raw = sample_blueprint();
        let arena = AstArena::new();
        let root = decorate(&arena, &raw).unwrap();

        assert!(std::ptr::eq(root.raw, &raw));
        assert!(std::ptr::eq(
            root.children[0].raw,
            &raw["resourceGroups"][0]
        ));
    }

    #[test]
    fn test_leaves_have_no_children() {
        let raw = sample_blueprint();
        let arena = AstArena::new();
        let root = decorate(&arena, &raw).unwrap();
        let example = &root.children[0].children[0].children[0].children[0];

        assert!(example.has_children());
        for leaf in example.children {
            assert!(leaf.kind.is_leaf());
            assert!(!leaf.has_children());
        }
    }
}
