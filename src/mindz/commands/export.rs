use crate::commands::{CmdMessage, CmdResult};
use crate::error::{MindzError, Result};
use crate::model::{Node, Scope};
use crate::store::DataStore;
use chrono::Utc;
use pulldown_cmark::{Event, HeadingLevel, Tag, TagEnd};
use pulldown_cmark_to_cmark::cmark;
use std::fs;
use std::path::PathBuf;

/// Exchange format for single-file export, determined by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Markdown,
    Json,
}

impl ExportFormat {
    /// Detect format from filename extension.
    pub fn from_filename(filename: &str) -> Self {
        let lower = filename.to_lowercase();
        if lower.ends_with(".json") {
            ExportFormat::Json
        } else {
            ExportFormat::Markdown
        }
    }

    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Json => "json",
        }
    }
}

pub fn run<S: DataStore>(
    store: &S,
    scope: Scope,
    format: Option<ExportFormat>,
    output: Option<PathBuf>,
) -> Result<CmdResult> {
    let tree = store.load_tree(scope)?;

    let format = format.unwrap_or_else(|| match &output {
        Some(path) => ExportFormat::from_filename(&path.to_string_lossy()),
        None => ExportFormat::Markdown,
    });

    let filename = output.unwrap_or_else(|| {
        let now = Utc::now();
        PathBuf::from(format!(
            "mindz-{}.{}",
            now.format("%Y-%m-%d_%H:%M:%S"),
            format.extension()
        ))
    });

    let content = match format {
        ExportFormat::Markdown => render_markdown(&tree),
        ExportFormat::Json => {
            serde_json::to_string_pretty(&tree).map_err(MindzError::Serialization)?
        }
    };
    fs::write(&filename, content).map_err(MindzError::Io)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported to {}",
        filename.display()
    )));
    Ok(result.with_map_paths(vec![filename]))
}

/// Renders the map as a Markdown outline: the root as an H1 heading,
/// everything below it as a nested bullet list.
pub fn render_markdown(tree: &Node) -> String {
    let mut events = Vec::new();
    events.push(Event::Start(Tag::Heading {
        level: HeadingLevel::H1,
        id: None,
        classes: Vec::new(),
        attrs: Vec::new(),
    }));
    events.push(Event::Text(tree.text.clone().into()));
    events.push(Event::End(TagEnd::Heading(HeadingLevel::H1)));

    push_list_events(&tree.children, &mut events);

    let mut output = String::new();
    cmark(events.iter(), &mut output).expect("cmark serialization failed");
    output.push('\n');
    output
}

fn push_list_events<'a>(children: &'a [Node], events: &mut Vec<Event<'a>>) {
    if children.is_empty() {
        return;
    }
    events.push(Event::Start(Tag::List(None)));
    for child in children {
        events.push(Event::Start(Tag::Item));
        events.push(Event::Text(child.text.as_str().into()));
        push_list_events(&child.children, events);
        events.push(Event::End(TagEnd::Item));
    }
    events.push(Event::End(TagEnd::List(false)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NodeId;
    use crate::tree;

    fn sample() -> Node {
        let mut tree = Node::default_tree();
        tree = tree::add_child(&tree, &NodeId::root(), Node::new("Plan"));
        let plan = tree.children[0].id.clone();
        tree = tree::add_child(&tree, &plan, Node::new("Draft"));
        tree = tree::add_child(&tree, &NodeId::root(), Node::new("Research"));
        tree
    }

    #[test]
    fn markdown_has_a_heading_and_every_topic() {
        let md = render_markdown(&sample());
        assert!(md.starts_with("# Main Topic"));
        for text in ["Plan", "Draft", "Research"] {
            assert!(md.contains(text), "missing {} in:\n{}", text, md);
        }
    }

    #[test]
    fn leaf_root_renders_heading_only() {
        let md = render_markdown(&Node::default_tree());
        assert!(md.starts_with("# Main Topic"));
        assert!(!md.contains('*') && !md.contains('-'));
    }

    #[test]
    fn markdown_round_trips_through_import() {
        let original = sample();
        let md = render_markdown(&original);
        let parsed = super::super::import::parse_outline(&md).unwrap();

        fn texts(node: &Node) -> Vec<String> {
            let mut out = vec![node.text.clone()];
            for child in &node.children {
                out.extend(texts(child));
            }
            out
        }
        assert_eq!(texts(&parsed), texts(&original));
        // Imported nodes get fresh ids; the root id is fixed.
        assert!(parsed.id.is_root());
        assert_ne!(parsed.children[0].id, original.children[0].id);
    }

    #[test]
    fn format_detection_by_extension() {
        assert_eq!(ExportFormat::from_filename("map.json"), ExportFormat::Json);
        assert_eq!(ExportFormat::from_filename("map.md"), ExportFormat::Markdown);
        assert_eq!(ExportFormat::from_filename("map"), ExportFormat::Markdown);
    }
}
