//! # Arbor - Plain-Text Tree Rendering
//!
//! A small library for rendering hierarchies as indented text with
//! box-drawing connectors, the way `tree(1)` does:
//!
//! ```text
//! Main Topic
//! ├── Plan
//! │   └── Draft outline
//! └── Research
//! ```
//!
//! ## The Problem
//!
//! CLI applications that display hierarchies all end up hand-rolling the
//! same prefix bookkeeping: which glyph to use for a middle child versus
//! the last child, which columns still need a vertical rule, and how to
//! keep long labels from wrapping and breaking the connector alignment.
//!
//! ## The Solution
//!
//! Arbor separates the tree *structure* from its *presentation*:
//! - [`Tree`] is a plain recursive value: a label plus child trees
//! - [`GlyphSet`] picks the connector characters (Unicode or ASCII)
//! - [`RenderOptions`] controls glyphs, styling, and label truncation
//!
//! Styling uses `console::Style`, so ANSI codes degrade automatically
//! when stdout is not a terminal (pipes, CI, `TERM=dumb`).
//!
//! ## Quick Example
//!
//! ```rust
//! use arbor::Tree;
//!
//! let mut root = Tree::new("Main Topic");
//! let mut plan = Tree::new("Plan");
//! plan.push(Tree::new("Draft outline"));
//! root.push(plan);
//! root.push(Tree::new("Research"));
//!
//! let out = root.to_string();
//! assert!(out.contains("├── Plan"));
//! assert!(out.contains("└── Research"));
//! ```

use std::fmt;
use unicode_width::UnicodeWidthChar;

pub use console::Style;

/// Connector glyphs used when rendering a tree.
///
/// Each glyph occupies four columns so that nesting levels line up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphSet {
    /// Connector for a child that has following siblings.
    pub branch: &'static str,
    /// Connector for the last child of its parent.
    pub last: &'static str,
    /// Continuation rule for ancestors that still have siblings below.
    pub rule: &'static str,
    /// Blank filler for ancestors that are themselves last children.
    pub blank: &'static str,
}

impl GlyphSet {
    /// Box-drawing glyphs. The default.
    pub const UNICODE: GlyphSet = GlyphSet {
        branch: "├── ",
        last: "└── ",
        rule: "│   ",
        blank: "    ",
    };

    /// Pure-ASCII fallback for terminals without box-drawing support.
    pub const ASCII: GlyphSet = GlyphSet {
        branch: "|-- ",
        last: "`-- ",
        rule: "|   ",
        blank: "    ",
    };
}

/// Controls how a [`Tree`] is turned into text.
#[derive(Clone, Default)]
pub struct RenderOptions {
    glyphs: Option<GlyphSet>,
    label_style: Option<Style>,
    connector_style: Option<Style>,
    max_label_width: Option<usize>,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific glyph set instead of [`GlyphSet::UNICODE`].
    pub fn glyphs(mut self, glyphs: GlyphSet) -> Self {
        self.glyphs = Some(glyphs);
        self
    }

    /// Style applied to every label without an explicit per-node style.
    pub fn label_style(mut self, style: Style) -> Self {
        self.label_style = Some(style);
        self
    }

    /// Style applied to the connector glyphs (dim is a common choice).
    pub fn connector_style(mut self, style: Style) -> Self {
        self.connector_style = Some(style);
        self
    }

    /// Truncate labels wider than this many columns, appending `…`.
    ///
    /// Width is measured in display columns, not bytes or chars.
    pub fn max_label_width(mut self, width: usize) -> Self {
        self.max_label_width = Some(width);
        self
    }

    fn glyph_set(&self) -> GlyphSet {
        self.glyphs.unwrap_or(GlyphSet::UNICODE)
    }
}

/// A renderable tree: a label plus an ordered list of child trees.
#[derive(Debug, Clone)]
pub struct Tree<D> {
    label: D,
    style: Option<Style>,
    children: Vec<Tree<D>>,
}

impl<D: fmt::Display> Tree<D> {
    pub fn new(label: D) -> Self {
        Self {
            label,
            style: None,
            children: Vec::new(),
        }
    }

    /// Per-node style override, takes precedence over
    /// [`RenderOptions::label_style`].
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    /// Appends a child, preserving insertion order.
    pub fn push(&mut self, child: Tree<D>) -> &mut Self {
        self.children.push(child);
        self
    }

    pub fn label(&self) -> &D {
        &self.label
    }

    pub fn children(&self) -> &[Tree<D>] {
        &self.children
    }

    /// Renders the whole tree, one node per line, root first.
    pub fn render(&self, options: &RenderOptions) -> String {
        let mut out = String::new();
        out.push_str(&self.render_label(options));
        out.push('\n');
        let glyphs = options.glyph_set();
        self.render_children(&mut out, &glyphs, options, "");
        out
    }

    fn render_children(
        &self,
        out: &mut String,
        glyphs: &GlyphSet,
        options: &RenderOptions,
        prefix: &str,
    ) {
        let count = self.children.len();
        for (i, child) in self.children.iter().enumerate() {
            let is_last = i + 1 == count;
            let connector = if is_last { glyphs.last } else { glyphs.branch };
            let connector = match &options.connector_style {
                Some(style) => format!("{}{}", prefix, style.apply_to(connector)),
                None => format!("{}{}", prefix, connector),
            };
            out.push_str(&connector);
            out.push_str(&child.render_label(options));
            out.push('\n');

            let continuation = if is_last { glyphs.blank } else { glyphs.rule };
            let child_prefix = match &options.connector_style {
                Some(style) if !is_last => {
                    format!("{}{}", prefix, style.apply_to(continuation))
                }
                _ => format!("{}{}", prefix, continuation),
            };
            child.render_children(out, glyphs, options, &child_prefix);
        }
    }

    fn render_label(&self, options: &RenderOptions) -> String {
        let raw = self.label.to_string();
        let text = match options.max_label_width {
            Some(max) => truncate_columns(&raw, max),
            None => raw,
        };
        match self.style.as_ref().or(options.label_style.as_ref()) {
            Some(style) => style.apply_to(text).to_string(),
            None => text,
        }
    }
}

impl<D: fmt::Display> fmt::Display for Tree<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&RenderOptions::default()))
    }
}

/// Truncates `s` to at most `max` display columns, ending in `…` when
/// anything was cut.
fn truncate_columns(s: &str, max: usize) -> String {
    let mut width = 0;
    for (i, c) in s.char_indices() {
        let w = c.width().unwrap_or(0);
        if width + w > max.saturating_sub(1) {
            // Only cut if the rest actually overflows.
            let remaining: usize = s[i..].chars().filter_map(|c| c.width()).sum();
            if width + remaining > max {
                let mut out = s[..i].to_string();
                out.push('…');
                return out;
            }
            return s.to_string();
        }
        width += w;
    }
    s.to_string()
}
