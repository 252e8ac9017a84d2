use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Scope;
use crate::outline::NodeSelector;
use crate::store::DataStore;
use crate::tree;

use super::helpers::{display_entry, resolve_selector};

pub fn run<S: DataStore>(
    store: &mut S,
    scope: Scope,
    selector: &NodeSelector,
    new_text: &str,
) -> Result<CmdResult> {
    let current = store.load_tree(scope)?;
    let id = resolve_selector(&current, selector)?;

    let mut result = CmdResult::default();
    if new_text.trim().is_empty() {
        // Empty commits revert rather than erase; the engine enforces
        // this too, but catching it here keeps the message honest.
        result.add_message(CmdMessage::warning(
            "Empty text; topic left unchanged.",
        ));
        return Ok(result.with_tree(current));
    }

    let old_text = tree::find(&current, &id)
        .map(|node| node.text.clone())
        .unwrap_or_default();
    let next = tree::rename(&current, &id, new_text);
    store.save_tree(&next, scope)?;

    if let Some(entry) = display_entry(&next, &id) {
        result.add_message(CmdMessage::success(format!(
            "Renamed topic ({}): {} -> {}",
            entry.path, old_text, entry.text
        )));
        result.affected_nodes.push(entry);
    }
    Ok(result.with_tree(next))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn renames_by_outline_position() {
        let mut fixture = StoreFixture::new().with_nested_map(Scope::Project);
        let result = run(
            &mut fixture.store,
            Scope::Project,
            &"1.1".parse().unwrap(),
            "First draft",
        )
        .unwrap();

        assert!(result.messages[0].content.contains("Draft -> First draft"));
        let tree = fixture.store.load_tree(Scope::Project).unwrap();
        assert_eq!(tree.children[0].children[0].text, "First draft");
    }

    #[test]
    fn renames_the_root() {
        let mut fixture = StoreFixture::new().with_topics(1, Scope::Project);
        run(
            &mut fixture.store,
            Scope::Project,
            &NodeSelector::Root,
            "Everything",
        )
        .unwrap();

        let tree = fixture.store.load_tree(Scope::Project).unwrap();
        assert_eq!(tree.text, "Everything");
        assert!(tree.id.is_root());
    }

    #[test]
    fn empty_text_is_suppressed_and_nothing_saved() {
        let mut fixture = StoreFixture::new().with_nested_map(Scope::Project);
        let before = fixture.store.load_tree(Scope::Project).unwrap();

        let result = run(
            &mut fixture.store,
            Scope::Project,
            &"1".parse().unwrap(),
            "  \t ",
        )
        .unwrap();
        assert!(matches!(result.messages[0].level, MessageLevel::Warning));

        let after = fixture.store.load_tree(Scope::Project).unwrap();
        assert_eq!(after, before);
    }

    #[test]
    fn text_is_stored_verbatim_not_trimmed() {
        let mut fixture = StoreFixture::new().with_topics(1, Scope::Project);
        run(
            &mut fixture.store,
            Scope::Project,
            &"1".parse().unwrap(),
            "  padded  ",
        )
        .unwrap();

        let tree = fixture.store.load_tree(Scope::Project).unwrap();
        assert_eq!(tree.children[0].text, "  padded  ");
    }
}
