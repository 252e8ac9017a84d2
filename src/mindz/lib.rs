//! # Mindz Architecture
//!
//! Mindz is a **UI-agnostic mind-map library**. This is not a CLI application that happens
//! to have some library code—it's a library that happens to have a CLI client.
//!
//! This distinction drives the entire architecture and should guide all development.
//!
//! ## The Four-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, renders the tree, prints messages      │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (selector strings → nodes)             │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Load snapshot → one engine call → save snapshot          │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                   │                          │
//!                   ▼                          ▼
//! ┌───────────────────────────┐  ┌────────────────────────────────┐
//! │  Tree Engine (tree.rs)    │  │  Storage Layer (store/)        │
//! │  - Pure transformations   │  │  - Abstract DataStore trait    │
//! │  - New snapshot per call, │  │  - FileStore (production),     │
//! │    input never mutated    │  │    InMemoryStore (testing)     │
//! └───────────────────────────┘  └────────────────────────────────┘
//! ```
//!
//! ## The Snapshot Model
//!
//! A whole map is one recursive [`model::Node`]. Every mutation goes
//! through the tree engine and yields a **new** snapshot; the previous
//! one stays valid and untouched. The store only ever sees complete
//! post-mutation snapshots—there is no per-node persistence, so no
//! observer can catch a half-built tree.
//!
//! ## The Outline System
//!
//! Node ids are opaque and stable, so the CLI maps user-friendly
//! outline positions (`1`, `1.2`, `root`) and topic texts onto ids per
//! invocation. See `outline.rs` for more information.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, engine, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! This means the same core could serve a TUI, a web view, or any other UI.
//!
//! ## Testing Strategy
//!
//! 1. **Engine** (`tree.rs`): Property-style unit tests of the three
//!    transformations and their invariants. This is where the lion's
//!    share of testing lives.
//!
//! 2. **Commands** (`commands/*.rs`): Unit tests over `InMemoryStore`,
//!    covering policy (root delete suppression, empty rename revert).
//!
//! 3. **API** (`api.rs`): Dispatch and selector-parsing tests.
//!
//! 4. **CLI** (thin `main.rs`): Integration tests in `tests/` driving
//!    the compiled binary.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: One module per user-facing operation
//! - [`tree`]: The pure tree engine
//! - [`outline`]: Outline positions and node selectors
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Node`, `NodeId`, `Scope`)
//! - [`config`]: Configuration management
//! - [`editor`]: External editor integration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod model;
pub mod outline;
pub mod store;
pub mod tree;
