use crate::commands::{CmdMessage, CmdResult};
use crate::error::{MindzError, Result};
use crate::model::{Node, NodeId, Scope, DEFAULT_NEW_TEXT, DEFAULT_ROOT_TEXT};
use crate::outline::NodeSelector;
use crate::store::DataStore;
use crate::tree;
use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use std::fs;
use std::path::Path;

use super::helpers::{display_entry, resolve_selector};

pub fn run<S: DataStore>(
    store: &mut S,
    scope: Scope,
    path: &Path,
    into: Option<&NodeSelector>,
    force: bool,
) -> Result<CmdResult> {
    let content = fs::read_to_string(path).map_err(MindzError::Io)?;
    let imported = parse_outline(&content)
        .ok_or_else(|| MindzError::Api(format!("No outline found in {}", path.display())))?;

    let mut result = CmdResult::default();

    match into {
        Some(selector) => {
            // Graft: the imported map becomes one new subtree.
            let current = store.load_tree(scope)?;
            let target = resolve_selector(&current, selector)?;

            let mut subtree = imported;
            subtree.id = NodeId::fresh();
            let subtree_size = tree::size(&subtree);
            let subtree_id = subtree.id.clone();

            let next = tree::add_child(&current, &target, subtree);
            store.save_tree(&next, scope)?;

            if let Some(entry) = display_entry(&next, &subtree_id) {
                result.add_message(CmdMessage::success(format!(
                    "Imported {} topic(s) under ({}) {}",
                    subtree_size, entry.path, entry.text
                )));
                result.affected_nodes.push(entry);
            }
            Ok(result.with_tree(next))
        }
        None => {
            // Replace: the imported outline becomes the whole map.
            let current = store.load_tree(scope)?;
            if current != Node::default_tree() && !force {
                result.add_message(CmdMessage::warning(
                    "Current map is not empty; pass --force to replace it.",
                ));
                return Ok(result.with_tree(current));
            }

            let next = imported;
            store.save_tree(&next, scope)?;
            result.add_message(CmdMessage::success(format!(
                "Imported {} topic(s) from {}",
                tree::size(&next),
                path.display()
            )));
            Ok(result.with_tree(next))
        }
    }
}

/// Parses a Markdown outline into a map: the first H1 names the root,
/// bullet lists nest into sub-topics. Returns `None` when the document
/// contains neither. Every parsed node gets a fresh id; the returned
/// root carries the fixed root id.
pub fn parse_outline(content: &str) -> Option<Node> {
    let parser = Parser::new_ext(content, Options::all());

    let mut saw_heading = false;
    let mut saw_item = false;
    let mut in_heading = false;
    // Item nesting: stack[0] is the root, deeper entries are unfinished items.
    let mut stack: Vec<Node> = vec![Node::root(String::new())];

    for event in parser {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) if !saw_heading => {
                in_heading = true;
            }
            Event::End(TagEnd::Heading(HeadingLevel::H1)) if in_heading => {
                in_heading = false;
                saw_heading = true;
            }
            Event::Start(Tag::Item) => {
                saw_item = true;
                stack.push(Node::new(String::new()));
            }
            Event::End(TagEnd::Item) if stack.len() > 1 => {
                let mut item = stack.pop().unwrap_or_else(|| Node::new(String::new()));
                if item.text.trim().is_empty() {
                    item.text = DEFAULT_NEW_TEXT.to_string();
                } else {
                    item.text = item.text.trim().to_string();
                }
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(item);
                }
            }
            Event::Text(text) | Event::Code(text) => {
                if in_heading {
                    let root = &mut stack[0];
                    if !root.text.is_empty() {
                        root.text.push(' ');
                    }
                    root.text.push_str(&text);
                } else if stack.len() > 1 {
                    if let Some(item) = stack.last_mut() {
                        if !item.text.is_empty() {
                            item.text.push(' ');
                        }
                        item.text.push_str(&text);
                    }
                }
            }
            Event::SoftBreak | Event::HardBreak => {}
            _ => {}
        }
    }

    if !saw_heading && !saw_item {
        return None;
    }

    let mut root = stack.swap_remove(0);
    if root.text.trim().is_empty() {
        root.text = DEFAULT_ROOT_TEXT.to_string();
    }
    Some(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use std::collections::HashSet;

    const OUTLINE: &str = "\
# Roadmap

- Plan
  - Draft
  - Review
- Research
";

    #[test]
    fn parses_heading_and_nested_lists() {
        let parsed = parse_outline(OUTLINE).unwrap();
        assert!(parsed.id.is_root());
        assert_eq!(parsed.text, "Roadmap");
        assert_eq!(parsed.children.len(), 2);
        assert_eq!(parsed.children[0].text, "Plan");
        assert_eq!(parsed.children[0].children.len(), 2);
        assert_eq!(parsed.children[0].children[1].text, "Review");
        assert_eq!(parsed.children[1].text, "Research");
    }

    #[test]
    fn parsed_ids_are_unique_and_fresh() {
        let parsed = parse_outline(OUTLINE).unwrap();
        let ids = tree::collect_ids(&parsed);
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(ids.len(), unique.len());
    }

    #[test]
    fn list_without_heading_gets_the_default_root() {
        let parsed = parse_outline("- only item\n").unwrap();
        assert_eq!(parsed.text, DEFAULT_ROOT_TEXT);
        assert_eq!(parsed.children[0].text, "only item");
    }

    #[test]
    fn prose_without_an_outline_is_rejected() {
        assert!(parse_outline("just a paragraph of text\n").is_none());
        assert!(parse_outline("").is_none());
    }

    #[test]
    fn replace_refuses_a_non_default_map_without_force() {
        let mut fixture = StoreFixture::new().with_topics(1, Scope::Project);
        let before = fixture.store.load_tree(Scope::Project).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("in.md");
        fs::write(&file, OUTLINE).unwrap();

        let result = run(&mut fixture.store, Scope::Project, &file, None, false).unwrap();
        assert!(result.messages[0].content.contains("--force"));
        assert_eq!(fixture.store.load_tree(Scope::Project).unwrap(), before);

        run(&mut fixture.store, Scope::Project, &file, None, true).unwrap();
        let after = fixture.store.load_tree(Scope::Project).unwrap();
        assert_eq!(after.text, "Roadmap");
    }

    #[test]
    fn grafts_under_a_selected_topic() {
        let mut store = InMemoryStore::new();
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("in.md");
        fs::write(&file, OUTLINE).unwrap();

        let result = run(
            &mut store,
            Scope::Project,
            &file,
            Some(&NodeSelector::Root),
            false,
        )
        .unwrap();
        assert_eq!(result.affected_nodes[0].path.to_string(), "1");

        let tree = store.load_tree(Scope::Project).unwrap();
        assert_eq!(tree.children.len(), 1);
        assert_eq!(tree.children[0].text, "Roadmap");
        assert_eq!(tree.children[0].children.len(), 2);
    }
}
