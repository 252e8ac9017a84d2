use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// The fixed identifier of the root topic. The root always exists and
/// can never be removed.
pub const ROOT_ID: &str = "root";

/// Default label for a topic created without an explicit text.
pub const DEFAULT_NEW_TEXT: &str = "New Topic";

/// Label of the root topic in a freshly initialized map.
pub const DEFAULT_ROOT_TEXT: &str = "Main Topic";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    Project,
    Global,
}

/// Opaque node identifier, stable for the node's lifetime.
///
/// Serializes as a bare string so the persisted layout stays
/// `{ "id": string, "text": string, "children": [...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// The fixed root id.
    pub fn root() -> Self {
        Self(ROOT_ID.to_string())
    }

    /// Mints an id guaranteed not to collide with any existing id.
    /// Uuid v4 rather than a timestamp: two adds within the same timer
    /// tick must still produce distinct ids.
    pub fn fresh() -> Self {
        Self(format!("node-{}", Uuid::new_v4()))
    }

    pub fn is_root(&self) -> bool {
        self.0 == ROOT_ID
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A topic in the mind map: a label plus an ordered list of sub-topics.
///
/// Each node exclusively owns its children, so the tree is acyclic and
/// connected by construction. A whole map is just the root `Node`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub text: String,
    pub children: Vec<Node>,
}

impl Node {
    /// A new leaf topic with a fresh id.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: NodeId::fresh(),
            text: text.into(),
            children: Vec::new(),
        }
    }

    /// A root topic with the fixed root id.
    pub fn root(text: impl Into<String>) -> Self {
        Self {
            id: NodeId::root(),
            text: text.into(),
            children: Vec::new(),
        }
    }

    /// The fallback map: a lone root labeled "Main Topic". Used at
    /// first start and whenever stored data is missing or unreadable.
    pub fn default_tree() -> Self {
        Self::root(DEFAULT_ROOT_TEXT)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ids_are_distinct() {
        let a = NodeId::fresh();
        let b = NodeId::fresh();
        assert_ne!(a, b);
        assert!(!a.is_root());
    }

    #[test]
    fn root_id_is_fixed() {
        assert_eq!(NodeId::root().as_str(), "root");
        assert!(NodeId::root().is_root());
    }

    #[test]
    fn default_tree_is_a_lone_root() {
        let tree = Node::default_tree();
        assert!(tree.id.is_root());
        assert_eq!(tree.text, "Main Topic");
        assert!(tree.is_leaf());
    }

    #[test]
    fn serializes_to_the_structural_layout() {
        let mut tree = Node::root("Main Topic");
        tree.children.push(Node {
            id: NodeId::from("node-1"),
            text: "Plan".to_string(),
            children: Vec::new(),
        });

        let json = serde_json::to_value(&tree).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "root",
                "text": "Main Topic",
                "children": [
                    { "id": "node-1", "text": "Plan", "children": [] }
                ]
            })
        );
    }

    #[test]
    fn round_trips_through_json() {
        let mut tree = Node::root("Main Topic");
        let mut child = Node::new("Plan");
        child.children.push(Node::new("Draft"));
        tree.children.push(child);
        tree.children.push(Node::new("Research"));

        let json = serde_json::to_string(&tree).unwrap();
        let parsed: Node = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, tree);
    }
}
