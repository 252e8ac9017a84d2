use crate::commands::{CmdMessage, CmdResult, MindzPaths};
use crate::error::Result;
use crate::model::{Node, Scope};
use crate::store::DataStore;
use std::fs;

pub fn run<S: DataStore>(store: &mut S, paths: &MindzPaths, scope: Scope) -> Result<CmdResult> {
    let dir = paths.scope_dir(scope)?;
    fs::create_dir_all(&dir)?;

    let mut result = CmdResult::default();

    // Materialize the default map unless one already exists.
    let already_there = store
        .tree_path(scope)
        .map(|path| path.exists())
        .unwrap_or(false);
    if already_there {
        result.add_message(CmdMessage::info(format!(
            "Mind map already initialized at {}",
            dir.display()
        )));
    } else {
        store.save_tree(&Node::default_tree(), scope)?;
        result.add_message(CmdMessage::success(format!(
            "Initialized mind map at {}",
            dir.display()
        )));
    }
    Ok(result)
}
