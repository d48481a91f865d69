//! Ancestor context threaded down a walk.
//!
//! A [`Context`] is an immutable, persistent list of entries. Extending it
//! returns a new context that shares the parent's entries, so a child never
//! aliases a sibling's extension and the parent never sees its children's.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::{ApiNode, NodeKind};

/// A value recorded in the context.
#[derive(Clone, Copy)]
pub enum ContextValue<'a> {
    /// The enclosing group's name, under the `group` key.
    GroupName(&'a str),
    /// An ancestor node (or the visited node itself), under its kind key.
    Node(&'a ApiNode<'a>),
}

impl<'a> ContextValue<'a> {
    /// Returns the node, if this entry holds one.
    pub fn as_node(&self) -> Option<&'a ApiNode<'a>> {
        match *self {
            ContextValue::Node(node) => Some(node),
            ContextValue::GroupName(_) => None,
        }
    }

    /// Returns the group name, if this entry holds one.
    pub fn as_group_name(&self) -> Option<&'a str> {
        match *self {
            ContextValue::GroupName(name) => Some(name),
            ContextValue::Node(_) => None,
        }
    }
}

impl fmt::Debug for ContextValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextValue::GroupName(name) => f.debug_tuple("GroupName").field(name).finish(),
            // Only the kind: the raw node can be large.
            ContextValue::Node(node) => f.debug_tuple("Node").field(&node.kind).finish(),
        }
    }
}

struct Frame<'a> {
    key: &'static str,
    value: ContextValue<'a>,
    parent: Option<Rc<Frame<'a>>>,
}

/// The accumulated record of ancestors passed down during a walk.
///
/// Cloning is cheap (one reference count). Entries are looked up by the
/// lower-cased kind name, newest first.
#[derive(Clone, Default)]
pub struct Context<'a> {
    head: Option<Rc<Frame<'a>>>,
}

impl<'a> Context<'a> {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self { head: None }
    }

    /// Creates the context a group hands to its resources.
    pub fn for_group(name: &'a str) -> Self {
        Self::new().extend(NodeKind::Group.key(), ContextValue::GroupName(name))
    }

    /// Returns a new context with `node` recorded under its kind key.
    pub fn with_node(&self, node: &'a ApiNode<'a>) -> Self {
        self.extend(node.kind.key(), ContextValue::Node(node))
    }

    fn extend(&self, key: &'static str, value: ContextValue<'a>) -> Self {
        Self {
            head: Some(Rc::new(Frame {
                key,
                value,
                parent: self.head.clone(),
            })),
        }
    }

    /// Looks up an entry by key.
    pub fn get(&self, key: &str) -> Option<ContextValue<'a>> {
        self.frames()
            .find(|frame| frame.key == key)
            .map(|f| f.value)
    }

    /// Returns the recorded node of the given kind.
    pub fn node(&self, kind: NodeKind) -> Option<&'a ApiNode<'a>> {
        self.get(kind.key()).and_then(|value| value.as_node())
    }

    /// Returns the enclosing group's name.
    pub fn group_name(&self) -> Option<&'a str> {
        self.get(NodeKind::Group.key())
            .and_then(|value| value.as_group_name())
    }

    /// Returns the enclosing resource, or the visited node itself if it is one.
    pub fn resource(&self) -> Option<&'a ApiNode<'a>> {
        self.node(NodeKind::Resource)
    }

    /// Returns the enclosing action, or the visited node itself if it is one.
    pub fn action(&self) -> Option<&'a ApiNode<'a>> {
        self.node(NodeKind::Action)
    }

    /// Returns the enclosing transaction example, or the visited node itself if it is one.
    pub fn example(&self) -> Option<&'a ApiNode<'a>> {
        self.node(NodeKind::Example)
    }

    /// Returns true if the context holds an entry for `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.frames().count()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Iterates entries from the outermost ancestor inwards.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, ContextValue<'a>)> {
        let mut entries: Vec<_> = self.frames().map(|f| (f.key, f.value)).collect();
        entries.reverse();
        entries.into_iter()
    }

    /// Copies the entries into an owned map the caller may modify freely.
    pub fn to_map(&self) -> BTreeMap<&'static str, ContextValue<'a>> {
        self.iter().collect()
    }

    fn frames(&self) -> impl Iterator<Item = &Frame<'a>> {
        std::iter::successors(self.head.as_deref(), |frame| frame.parent.as_deref())
    }
}

impl fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
