//! Node kinds of the API Blueprint AST.
//!
//! The legacy API Blueprint AST has a fixed shape: a document holds resource
//! groups, groups hold resources, resources hold actions, actions hold
//! examples and examples hold requests followed by responses.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The kind of a node in the API Blueprint AST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum NodeKind {
    /// The whole document.
    Root,
    /// A named collection of resources.
    Group,
    /// An addressable entity (URI template).
    Resource,
    /// An operation (HTTP method) on a resource.
    Action,
    /// A request/response pairing.
    Example,
    /// One request description.
    Request,
    /// One response description.
    Response,
}

/// A child collection declared by the schema: the JSON key holding it and
/// the kind of its elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collection {
    pub key: &'static str,
    pub kind: NodeKind,
}

impl Collection {
    const fn new(key: &'static str, kind: NodeKind) -> Self {
        Self { key, kind }
    }
}

const ROOT_COLLECTIONS: &[Collection] = &[Collection::new("resourceGroups", NodeKind::Group)];
const GROUP_COLLECTIONS: &[Collection] = &[Collection::new("resources", NodeKind::Resource)];
const RESOURCE_COLLECTIONS: &[Collection] = &[Collection::new("actions", NodeKind::Action)];
const ACTION_COLLECTIONS: &[Collection] = &[Collection::new("examples", NodeKind::Example)];
const EXAMPLE_COLLECTIONS: &[Collection] = &[
    Collection::new("requests", NodeKind::Request),
    Collection::new("responses", NodeKind::Response),
];

impl NodeKind {
    /// All kinds, in schema depth order.
    pub const ALL: [NodeKind; 7] = [
        NodeKind::Root,
        NodeKind::Group,
        NodeKind::Resource,
        NodeKind::Action,
        NodeKind::Example,
        NodeKind::Request,
        NodeKind::Response,
    ];

    /// Returns the kind name (`"Resource"`, `"Request"`, ...).
    pub const fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Root => "Root",
            NodeKind::Group => "Group",
            NodeKind::Resource => "Resource",
            NodeKind::Action => "Action",
            NodeKind::Example => "Example",
            NodeKind::Request => "Request",
            NodeKind::Response => "Response",
        }
    }

    /// Returns the lower-cased kind name, used as the context key.
    pub const fn key(&self) -> &'static str {
        match self {
            NodeKind::Root => "root",
            NodeKind::Group => "group",
            NodeKind::Resource => "resource",
            NodeKind::Action => "action",
            NodeKind::Example => "example",
            NodeKind::Request => "request",
            NodeKind::Response => "response",
        }
    }

    /// Returns the ordered child collections this kind declares.
    ///
    /// Requests and responses are leaves and declare none.
    pub const fn collections(&self) -> &'static [Collection] {
        match self {
            NodeKind::Root => ROOT_COLLECTIONS,
            NodeKind::Group => GROUP_COLLECTIONS,
            NodeKind::Resource => RESOURCE_COLLECTIONS,
            NodeKind::Action => ACTION_COLLECTIONS,
            NodeKind::Example => EXAMPLE_COLLECTIONS,
            NodeKind::Request | NodeKind::Response => &[],
        }
    }

    /// Returns true if this kind has no child collections.
    #[inline]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, NodeKind::Request | NodeKind::Response)
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown kind name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown node kind: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for NodeKind {
    type Err = UnknownKind;

    /// Parses a kind name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(NodeKind::Root, "Root", "root")]
    #[case(NodeKind::Group, "Group", "group")]
    #[case(NodeKind::Resource, "Resource", "resource")]
    #[case(NodeKind::Action, "Action", "action")]
    #[case(NodeKind::Example, "Example", "example")]
    #[case(NodeKind::Request, "Request", "request")]
    #[case(NodeKind::Response, "Response", "response")]
    fn test_names_and_keys(#[case] kind: NodeKind, #[case] name: &str, #[case] key: &str) {
        assert_eq!(kind.to_string(), name);
        assert_eq!(kind.key(), key);
        assert_eq!(kind.key(), name.to_lowercase());
    }

    #[test]
    fn test_schema_is_a_chain() {
        // Every non-leaf kind's children are exactly one level deeper.
        for kind in NodeKind::ALL {
            for collection in kind.collections() {
                assert!(collection.kind > kind);
            }
        }
        assert!(NodeKind::Request.is_leaf());
        assert!(NodeKind::Response.is_leaf());
        assert!(!NodeKind::Example.is_leaf());
    }

    #[test]
    fn test_example_requests_before_responses() {
        let keys: Vec<_> = NodeKind::Example
            .collections()
            .iter()
            .map(|c| c.key)
            .collect();
        assert_eq!(keys, vec!["requests", "responses"]);
    }

    #[rstest]
    #[case("Resource", NodeKind::Resource)]
    #[case("request", NodeKind::Request)]
    #[case("RESPONSE", NodeKind::Response)]
    fn test_from_str(#[case] input: &str, #[case] expected: NodeKind) {
        assert_eq!(input.parse::<NodeKind>().unwrap(), expected);
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "Header".parse::<NodeKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown node kind: Header");
    }

    #[test]
    fn test_serde_uses_pascal_case() {
        let json = serde_json::to_string(&NodeKind::Resource).unwrap();
        assert_eq!(json, "\"Resource\"");
        let kind: NodeKind = serde_json::from_str("\"Response\"").unwrap();
        assert_eq!(kind, NodeKind::Response);
    }
}
