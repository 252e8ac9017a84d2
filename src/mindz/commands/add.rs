use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Node, Scope};
use crate::outline::NodeSelector;
use crate::store::DataStore;
use crate::tree;

use super::helpers::{display_entry, resolve_selector};

pub fn run<S: DataStore>(
    store: &mut S,
    scope: Scope,
    parent: &NodeSelector,
    text: String,
) -> Result<CmdResult> {
    let current = store.load_tree(scope)?;
    let parent_id = resolve_selector(&current, parent)?;

    let child = Node::new(text);
    let child_id = child.id.clone();
    let next = tree::add_child(&current, &parent_id, child);
    store.save_tree(&next, scope)?;

    let mut result = CmdResult::default();
    if let Some(entry) = display_entry(&next, &child_id) {
        result.add_message(CmdMessage::success(format!(
            "Added topic ({}): {}",
            entry.path, entry.text
        )));
        result.affected_nodes.push(entry);
    }
    Ok(result.with_tree(next))
}
