//! # Storage Layer
//!
//! This module defines the storage abstraction for mindz. The
//! [`DataStore`] trait allows the application to work with different
//! storage backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** (database, sync, etc.) without changing core logic
//! - Keep the tree engine **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - The whole map lives in a single document: `map.json`
//!   - One fully-formed snapshot per save; no partial writes of
//!     individual nodes
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Scope Pattern
//!
//! All operations take a [`Scope`] parameter:
//! - `Scope::Project`: Local `.mindz/` directory in current project
//! - `Scope::Global`: User-wide storage (`~/.local/share/mindz/mindz/`)
//!
//! This allows a mind map per project plus one shared globally.
//!
//! ## Degradation Policy
//!
//! Loading never fails on bad data: a missing or unparseable `map.json`
//! yields the default map (a lone root), and reads never modify the
//! stored file. `doctor` is the explicit salvage path — it backs up a
//! corrupt document before replacing it and repairs structural drift
//! (wrong root id, duplicated ids).

use crate::error::Result;
use crate::model::{Node, Scope};
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Report from the `doctor` operation.
#[derive(Debug, Default)]
pub struct DoctorReport {
    pub recovered_files: usize,
    pub fixed_root_ids: usize,
    pub reassigned_ids: usize,
}

impl DoctorReport {
    pub fn is_clean(&self) -> bool {
        self.recovered_files == 0 && self.fixed_root_ids == 0 && self.reassigned_ids == 0
    }
}

/// Abstract interface for map storage.
///
/// Implementations must hand out and accept only whole-map snapshots;
/// there is no per-node persistence.
pub trait DataStore {
    /// Load the current map. Missing or unreadable stored data falls
    /// back to [`Node::default_tree`] rather than erroring.
    fn load_tree(&self, scope: Scope) -> Result<Node>;

    /// Persist a complete post-mutation snapshot.
    fn save_tree(&mut self, tree: &Node, scope: Scope) -> Result<()>;

    /// Get the path of the backing document (for file-based stores)
    fn tree_path(&self, scope: Scope) -> Result<PathBuf>;

    /// Verify and fix consistency issues
    fn doctor(&mut self, scope: Scope) -> Result<DoctorReport>;
}
