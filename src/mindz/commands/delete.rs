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
    selectors: &[NodeSelector],
) -> Result<CmdResult> {
    let mut current = store.load_tree(scope)?;
    let mut result = CmdResult::default();

    // Resolve everything against the starting snapshot; ids stay valid
    // while outline positions shift as subtrees go away.
    let mut targets = Vec::with_capacity(selectors.len());
    for selector in selectors {
        targets.push(resolve_selector(&current, selector)?);
    }

    let mut changed = false;
    for id in targets {
        if id.is_root() {
            result.add_message(CmdMessage::warning("The root topic cannot be deleted."));
            continue;
        }
        // Already gone when nested under an earlier deletion.
        if !tree::contains(&current, &id) {
            continue;
        }

        let entry = display_entry(&current, &id);
        let removed = tree::find(&current, &id).map(tree::size).unwrap_or(0);
        current = tree::delete_subtree(&current, &id);
        changed = true;

        if let Some(entry) = entry {
            let message = if removed > 1 {
                format!(
                    "Deleted topic ({}): {} and {} sub-topics",
                    entry.path,
                    entry.text,
                    removed - 1
                )
            } else {
                format!("Deleted topic ({}): {}", entry.path, entry.text)
            };
            result.add_message(CmdMessage::success(message));
            result.affected_nodes.push(entry);
        }
    }

    if changed {
        store.save_tree(&current, scope)?;
    }
    Ok(result.with_tree(current))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::Node;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn deletes_a_whole_subtree() {
        let mut fixture = StoreFixture::new().with_nested_map(Scope::Project);
        let result = run(
            &mut fixture.store,
            Scope::Project,
            &["1".parse().unwrap()],
        )
        .unwrap();

        assert!(matches!(
            result.messages[0].level,
            MessageLevel::Success
        ));
        assert!(result.messages[0].content.contains("2 sub-topics"));

        let tree = fixture.store.load_tree(Scope::Project).unwrap();
        assert_eq!(tree.children.len(), 1);
        assert_eq!(tree.children[0].text, "Research");
    }

    #[test]
    fn deleting_the_root_is_suppressed() {
        let mut fixture = StoreFixture::new().with_topics(2, Scope::Project);
        let before = fixture.store.load_tree(Scope::Project).unwrap();

        let result = run(&mut fixture.store, Scope::Project, &[NodeSelector::Root]).unwrap();
        assert!(matches!(result.messages[0].level, MessageLevel::Warning));

        let after = fixture.store.load_tree(Scope::Project).unwrap();
        assert_eq!(after, before);
    }

    #[test]
    fn nested_targets_of_one_deletion_are_skipped_quietly() {
        let mut fixture = StoreFixture::new().with_nested_map(Scope::Project);
        // "1" removes Plan; "1.2" (Review) is inside that subtree.
        let result = run(
            &mut fixture.store,
            Scope::Project,
            &["1".parse().unwrap(), "1.2".parse().unwrap()],
        )
        .unwrap();
        assert_eq!(result.affected_nodes.len(), 1);
    }

    #[test]
    fn unknown_selector_deletes_nothing() {
        let mut store = InMemoryStore::new();
        store
            .save_tree(&Node::default_tree(), Scope::Project)
            .unwrap();
        let err = run(&mut store, Scope::Project, &["3".parse().unwrap()]);
        assert!(err.is_err());
    }

    #[test]
    fn sibling_order_survives_a_middle_deletion() {
        let mut fixture = StoreFixture::new().with_topics(3, Scope::Project);
        run(
            &mut fixture.store,
            Scope::Project,
            &["2".parse().unwrap()],
        )
        .unwrap();

        let tree = fixture.store.load_tree(Scope::Project).unwrap();
        let texts: Vec<&str> = tree.children.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, ["Topic 1", "Topic 3"]);
    }
}
