use super::{DataStore, DoctorReport};
use crate::error::{MindzError, Result};
use crate::model::{Node, Scope};
use crate::tree;
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    trees: HashMap<Scope, Node>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn load_tree(&self, scope: Scope) -> Result<Node> {
        Ok(self
            .trees
            .get(&scope)
            .cloned()
            .unwrap_or_else(Node::default_tree))
    }

    fn save_tree(&mut self, tree: &Node, scope: Scope) -> Result<()> {
        self.trees.insert(scope, tree.clone());
        Ok(())
    }

    fn tree_path(&self, _scope: Scope) -> Result<PathBuf> {
        Err(MindzError::Store(
            "In-memory store has no backing file".to_string(),
        ))
    }

    fn doctor(&mut self, scope: Scope) -> Result<DoctorReport> {
        let mut report = DoctorReport::default();
        let Some(stored) = self.trees.get(&scope).cloned() else {
            return Ok(report);
        };

        let (tree, fixed_root) = tree::ensure_root_id(&stored);
        if fixed_root {
            report.fixed_root_ids += 1;
        }
        let (tree, reassigned) = tree::reassign_duplicate_ids(&tree);
        report.reassigned_ids = reassigned;

        if !report.is_clean() {
            self.trees.insert(scope, tree);
        }
        Ok(report)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::NodeId;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// A map with `count` topics under the root.
        pub fn with_topics(mut self, count: usize, scope: Scope) -> Self {
            let mut tree = Node::default_tree();
            for i in 0..count {
                tree = tree::add_child(
                    &tree,
                    &NodeId::root(),
                    Node::new(format!("Topic {}", i + 1)),
                );
            }
            self.store.save_tree(&tree, scope).unwrap();
            self
        }

        /// A three-level map: root -> "Plan" -> ("Draft", "Review"),
        /// plus a sibling "Research".
        pub fn with_nested_map(mut self, scope: Scope) -> Self {
            let mut tree = Node::default_tree();
            tree = tree::add_child(&tree, &NodeId::root(), Node::new("Plan"));
            let plan = tree.children[0].id.clone();
            tree = tree::add_child(&tree, &plan, Node::new("Draft"));
            tree = tree::add_child(&tree, &plan, Node::new("Review"));
            tree = tree::add_child(&tree, &NodeId::root(), Node::new("Research"));
            self.store.save_tree(&tree, scope).unwrap();
            self
        }
    }
}
