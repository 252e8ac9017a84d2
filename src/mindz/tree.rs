//! Pure tree transformations.
//!
//! Every operation takes the current map by reference and returns a new
//! map; the input snapshot is never mutated. Callers (the command
//! layer) own saving the result. None of these functions perform I/O.
//!
//! Lookups are pre-order, children left-to-right. Ids are unique within
//! a valid map, so "first match" and "the match" coincide; on a map
//! with duplicated ids (repairable via [`reassign_duplicate_ids`]) the
//! first pre-order match wins.

use crate::model::{Node, NodeId};
use std::collections::HashSet;

/// Returns a new map with `child` appended to the children of
/// `parent_id`, preserving existing child order.
///
/// Unknown `parent_id` is a no-op: the returned map is structurally
/// equal to the input. Mint children with [`Node::new`] so their ids
/// are fresh.
pub fn add_child(root: &Node, parent_id: &NodeId, child: Node) -> Node {
    let mut next = root.clone();
    if let Some(parent) = find_mut(&mut next, parent_id) {
        parent.children.push(child);
    }
    next
}

/// Returns a new map with the node `id` and its entire subtree removed.
///
/// Removing the root is a guaranteed no-op, as is an unknown `id`.
/// Sibling order among remaining children is preserved.
pub fn delete_subtree(root: &Node, id: &NodeId) -> Node {
    let mut next = root.clone();
    if !id.is_root() {
        remove_from(&mut next, id);
    }
    next
}

/// Returns a new map with exactly one node's `text` replaced, verbatim.
///
/// A `new_text` that trims to empty is rejected: the original text is
/// retained and the returned map equals the input. Unknown `id` is a
/// no-op.
pub fn rename(root: &Node, id: &NodeId, new_text: &str) -> Node {
    let mut next = root.clone();
    if new_text.trim().is_empty() {
        return next;
    }
    if let Some(node) = find_mut(&mut next, id) {
        node.text = new_text.to_string();
    }
    next
}

/// Finds the node with `id`, pre-order.
pub fn find<'a>(root: &'a Node, id: &NodeId) -> Option<&'a Node> {
    if root.id == *id {
        return Some(root);
    }
    root.children.iter().find_map(|child| find(child, id))
}

pub fn contains(root: &Node, id: &NodeId) -> bool {
    find(root, id).is_some()
}

/// Number of nodes in the map, root included.
pub fn size(root: &Node) -> usize {
    1 + root.children.iter().map(size).sum::<usize>()
}

/// All ids in the map, pre-order.
pub fn collect_ids(root: &Node) -> Vec<NodeId> {
    let mut ids = Vec::with_capacity(size(root));
    push_ids(root, &mut ids);
    ids
}

fn push_ids(node: &Node, ids: &mut Vec<NodeId>) {
    ids.push(node.id.clone());
    for child in &node.children {
        push_ids(child, ids);
    }
}

fn find_mut<'a>(root: &'a mut Node, id: &NodeId) -> Option<&'a mut Node> {
    if root.id == *id {
        return Some(root);
    }
    root.children
        .iter_mut()
        .find_map(|child| find_mut(child, id))
}

fn remove_from(node: &mut Node, id: &NodeId) -> bool {
    if let Some(pos) = node.children.iter().position(|child| child.id == *id) {
        node.children.remove(pos);
        return true;
    }
    node.children
        .iter_mut()
        .any(|child| remove_from(child, id))
}

/// Repair: forces the root id back to `"root"`. Returns the repaired
/// map and whether anything changed. Used by doctor on maps whose
/// stored root id drifted.
pub fn ensure_root_id(root: &Node) -> (Node, bool) {
    let mut next = root.clone();
    let fixed = !next.id.is_root();
    if fixed {
        next.id = NodeId::root();
    }
    (next, fixed)
}

/// Repair: reassigns fresh ids to every node whose id duplicates an
/// earlier (pre-order) one. Returns the repaired map and the number of
/// ids reassigned.
pub fn reassign_duplicate_ids(root: &Node) -> (Node, usize) {
    let mut next = root.clone();
    let mut seen = HashSet::new();
    let reassigned = dedupe(&mut next, &mut seen);
    (next, reassigned)
}

fn dedupe(node: &mut Node, seen: &mut HashSet<NodeId>) -> usize {
    let mut reassigned = 0;
    if !seen.insert(node.id.clone()) {
        node.id = NodeId::fresh();
        seen.insert(node.id.clone());
        reassigned += 1;
    }
    for child in &mut node.children {
        reassigned += dedupe(child, seen);
    }
    reassigned
}
