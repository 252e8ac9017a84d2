//! Outline addressing: how users point at nodes.
//!
//! Node ids are opaque and stable but unfriendly to type, so the CLI
//! addresses topics by their *outline position* — `1.2.3` is the third
//! child of the second child of the first child of the root — or by
//! their text. Positions are recomputed from the current map on every
//! command; only ids are stable across mutations.

use crate::model::{Node, NodeId};
use crate::tree;
use std::fmt;
use std::str::FromStr;

/// 1-based dotted position of a node. The empty path is the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct OutlinePath(Vec<usize>);

impl OutlinePath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> &[usize] {
        &self.0
    }

    /// Zero for the root, one per dotted segment below it.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// The position of this node's `index`-th child (1-based).
    pub fn child(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(index);
        Self(segments)
    }
}

impl fmt::Display for OutlinePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("root");
        }
        let mut first = true;
        for segment in &self.0 {
            if !first {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for OutlinePath {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err("Empty outline position".to_string());
        }
        let mut segments = Vec::new();
        for part in s.split('.') {
            let n: usize = part
                .parse()
                .map_err(|_| format!("Invalid outline position: {}", s))?;
            if n == 0 {
                return Err(format!(
                    "Invalid outline position: {} (positions are 1-based)",
                    s
                ));
            }
            segments.push(n);
        }
        Ok(Self(segments))
    }
}

/// A user input selecting one node: the root, an outline position, a
/// raw node id, or the topic's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeSelector {
    Root,
    Path(OutlinePath),
    Id(NodeId),
    Text(String),
}

impl fmt::Display for NodeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeSelector::Root => f.write_str("root"),
            NodeSelector::Path(path) => write!(f, "{}", path),
            NodeSelector::Id(id) => write!(f, "{}", id),
            NodeSelector::Text(text) => write!(f, "\"{}\"", text),
        }
    }
}

impl FromStr for NodeSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err("Empty selector".to_string());
        }
        if s == "root" || s == "r" {
            return Ok(NodeSelector::Root);
        }
        // Raw ids are accepted for scripting; fresh ids are node-<uuid>.
        if s.starts_with("node-") {
            return Ok(NodeSelector::Id(NodeId::from(s)));
        }
        if let Ok(path) = OutlinePath::from_str(s) {
            return Ok(NodeSelector::Path(path));
        }
        // Anything else selects by topic text.
        Ok(NodeSelector::Text(s.to_string()))
    }
}

/// A node flattened for listing: its identity plus where it sits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayNode {
    pub id: NodeId,
    pub text: String,
    pub path: OutlinePath,
    pub depth: usize,
    pub child_count: usize,
}

/// Flattens the map pre-order, assigning each node its outline
/// position. The root comes first with the empty path.
pub fn index_tree(root: &Node) -> Vec<DisplayNode> {
    let mut out = Vec::with_capacity(tree::size(root));
    flatten(root, OutlinePath::root(), &mut out);
    out
}

fn flatten(node: &Node, path: OutlinePath, out: &mut Vec<DisplayNode>) {
    out.push(DisplayNode {
        id: node.id.clone(),
        text: node.text.clone(),
        depth: path.depth(),
        child_count: node.children.len(),
        path: path.clone(),
    });
    for (i, child) in node.children.iter().enumerate() {
        flatten(child, path.child(i + 1), out);
    }
}

/// The outline position of `id` in the current map, if present.
pub fn path_of(root: &Node, id: &NodeId) -> Option<OutlinePath> {
    index_tree(root)
        .into_iter()
        .find(|dn| dn.id == *id)
        .map(|dn| dn.path)
}

/// Resolves a selector against the current map.
///
/// Errors are plain strings; callers wrap them in the crate error type.
pub fn resolve<'a>(root: &'a Node, selector: &NodeSelector) -> Result<&'a Node, String> {
    match selector {
        NodeSelector::Root => Ok(root),
        NodeSelector::Path(path) => {
            let mut node = root;
            for (i, segment) in path.segments().iter().enumerate() {
                node = node.children.get(segment - 1).ok_or_else(|| {
                    format!(
                        "No topic at outline position {} (stops at {})",
                        path,
                        OutlinePath(path.segments()[..i].to_vec())
                    )
                })?;
            }
            Ok(node)
        }
        NodeSelector::Id(id) => {
            tree::find(root, id).ok_or_else(|| format!("No topic with id {}", id))
        }
        NodeSelector::Text(text) => {
            let matches: Vec<&Node> = collect_by_text(root, text);
            match matches.len() {
                0 => Err(format!("No topic titled \"{}\"", text)),
                1 => Ok(matches[0]),
                n => Err(format!(
                    "\"{}\" matches {} topics; use an outline position instead",
                    text, n
                )),
            }
        }
    }
}

fn collect_by_text<'a>(node: &'a Node, text: &str) -> Vec<&'a Node> {
    let mut matches = Vec::new();
    if node.text == text {
        matches.push(node);
    }
    for child in &node.children {
        matches.extend(collect_by_text(child, text));
    }
    matches
}
