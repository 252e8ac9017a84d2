use crate::config::MindzConfig;
use crate::error::{MindzError, Result};
use crate::model::{Node, Scope};
use crate::outline::DisplayNode;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod delete;
pub mod doctor;
pub mod export;
pub mod helpers;
pub mod import;
pub mod init;
pub mod rename;
pub mod show;

#[derive(Debug, Clone)]
pub struct MindzPaths {
    pub project: Option<PathBuf>,
    pub global: PathBuf,
}

impl MindzPaths {
    pub fn scope_dir(&self, scope: Scope) -> Result<PathBuf> {
        match scope {
            Scope::Project => self
                .project
                .clone()
                .ok_or_else(|| MindzError::Store("Project scope is not available".to_string())),
            Scope::Global => Ok(self.global.clone()),
        }
    }
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Nodes the operation touched (created, renamed, removed).
    pub affected_nodes: Vec<DisplayNode>,
    /// The flattened outline, for listing output.
    pub listed_nodes: Vec<DisplayNode>,
    /// The current map snapshot, for tree rendering.
    pub tree: Option<Node>,
    pub map_paths: Vec<PathBuf>,
    pub config: Option<MindzConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_nodes(mut self, nodes: Vec<DisplayNode>) -> Self {
        self.affected_nodes = nodes;
        self
    }

    pub fn with_listed_nodes(mut self, nodes: Vec<DisplayNode>) -> Self {
        self.listed_nodes = nodes;
        self
    }

    pub fn with_tree(mut self, tree: Node) -> Self {
        self.tree = Some(tree);
        self
    }

    pub fn with_map_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.map_paths = paths;
        self
    }

    pub fn with_config(mut self, config: MindzConfig) -> Self {
        self.config = Some(config);
        self
    }
}
