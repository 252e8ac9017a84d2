use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Scope;
use crate::store::DataStore;

use super::helpers::load_indexed;

pub fn run<S: DataStore>(store: &S, scope: Scope) -> Result<CmdResult> {
    let (tree, indexed) = load_indexed(store, scope)?;
    Ok(CmdResult::default()
        .with_listed_nodes(indexed)
        .with_tree(tree))
}
