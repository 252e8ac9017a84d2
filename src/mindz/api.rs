//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves
//! as the single entry point for all mindz operations, regardless of
//! the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (parsing selector strings into [`NodeSelector`]s)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **Tree transformations**: those live in `tree.rs` and are only
//!   ever reached through a command
//! - **I/O concerns**: no stdout, stderr, or terminal formatting
//!
//! ## Generic Over DataStore
//!
//! `MindzApi<S: DataStore>` is generic over the storage backend:
//! - Production: `MindzApi<FileStore>`
//! - Testing: `MindzApi<InMemoryStore>`
//!
//! One call = one user gesture = at most one new snapshot. The process
//! is single-threaded, so mutations are serialized by construction and
//! the store only ever observes fully-formed trees.

use crate::commands;
use crate::commands::config::ConfigAction;
use crate::commands::export::ExportFormat;
use crate::error::{MindzError, Result};
use crate::model::Scope;
use crate::outline::NodeSelector;
use crate::store::DataStore;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// The main API facade for mindz operations.
///
/// Generic over `DataStore` to allow different storage backends.
/// All UI clients (CLI, web, etc.) should interact through this API.
pub struct MindzApi<S: DataStore> {
    store: S,
    paths: commands::MindzPaths,
}

impl<S: DataStore> MindzApi<S> {
    pub fn new(store: S, paths: commands::MindzPaths) -> Self {
        Self { store, paths }
    }

    pub fn init(&mut self, scope: Scope) -> Result<commands::CmdResult> {
        commands::init::run(&mut self.store, &self.paths, scope)
    }

    pub fn show(&self, scope: Scope) -> Result<commands::CmdResult> {
        commands::show::run(&self.store, scope)
    }

    /// Appends a fresh topic under `parent`.
    pub fn add_child(
        &mut self,
        scope: Scope,
        parent: &str,
        text: String,
    ) -> Result<commands::CmdResult> {
        let selector = parse_selector(parent)?;
        commands::add::run(&mut self.store, scope, &selector, text)
    }

    /// Removes topics and their subtrees. The root is never removed.
    pub fn delete_node<I: AsRef<str>>(
        &mut self,
        scope: Scope,
        nodes: &[I],
    ) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(nodes)?;
        commands::delete::run(&mut self.store, scope, &selectors)
    }

    /// Replaces one topic's text. Empty text leaves the topic unchanged.
    pub fn update_text(
        &mut self,
        scope: Scope,
        node: &str,
        new_text: String,
    ) -> Result<commands::CmdResult> {
        let selector = parse_selector(node)?;
        commands::rename::run(&mut self.store, scope, &selector, &new_text)
    }

    pub fn export_map(
        &self,
        scope: Scope,
        format: Option<ExportFormat>,
        output: Option<PathBuf>,
    ) -> Result<commands::CmdResult> {
        commands::export::run(&self.store, scope, format, output)
    }

    pub fn import_map(
        &mut self,
        scope: Scope,
        path: &Path,
        into: Option<&str>,
        force: bool,
    ) -> Result<commands::CmdResult> {
        let selector = match into {
            Some(s) => Some(parse_selector(s)?),
            None => None,
        };
        commands::import::run(&mut self.store, scope, path, selector.as_ref(), force)
    }

    pub fn doctor(&mut self, scope: Scope) -> Result<commands::CmdResult> {
        commands::doctor::run(&mut self.store, scope)
    }

    pub fn config(&self, scope: Scope, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, scope, action)
    }

    pub fn map_path(&self, scope: Scope) -> Result<commands::CmdResult> {
        let path = self.store.tree_path(scope)?;
        Ok(commands::CmdResult::default().with_map_paths(vec![path]))
    }
}

fn parse_selector(s: &str) -> Result<NodeSelector> {
    NodeSelector::from_str(s).map_err(MindzError::Selector)
}

fn parse_selectors<I: AsRef<str>>(strs: &[I]) -> Result<Vec<NodeSelector>> {
    strs.iter().map(|s| parse_selector(s.as_ref())).collect()
}
