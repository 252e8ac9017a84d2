use crate::error::{MindzError, Result};
use crate::model::{Node, NodeId, Scope};
use crate::outline::{self, DisplayNode, NodeSelector};
use crate::store::DataStore;

/// The current map with its flattened outline.
pub fn load_indexed<S: DataStore>(store: &S, scope: Scope) -> Result<(Node, Vec<DisplayNode>)> {
    let tree = store.load_tree(scope)?;
    let indexed = outline::index_tree(&tree);
    Ok((tree, indexed))
}

/// Resolves a selector to a node id within `tree`.
pub fn resolve_selector(tree: &Node, selector: &NodeSelector) -> Result<NodeId> {
    outline::resolve(tree, selector)
        .map(|node| node.id.clone())
        .map_err(MindzError::Selector)
}

/// The display entry for `id` in `tree`, if present.
pub fn display_entry(tree: &Node, id: &NodeId) -> Option<DisplayNode> {
    outline::index_tree(tree).into_iter().find(|dn| dn.id == *id)
}
