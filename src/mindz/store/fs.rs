use super::{DataStore, DoctorReport};
use crate::error::{MindzError, Result};
use crate::model::{Node, Scope};
use crate::tree;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

const MAP_FILENAME: &str = "map.json";

pub struct FileStore {
    project_root: Option<PathBuf>,
    global_root: PathBuf,
}

impl FileStore {
    pub fn new(project_root: Option<PathBuf>, global_root: PathBuf) -> Self {
        Self {
            project_root,
            global_root,
        }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(MindzError::Io)?;
        }
        Ok(())
    }

    fn store_root(&self, scope: Scope) -> Result<PathBuf> {
        let root = match scope {
            Scope::Project => self.project_root.as_ref().ok_or_else(|| {
                MindzError::Store("No project scope available (not in a project dir?)".to_string())
            })?,
            Scope::Global => &self.global_root,
        };
        Ok(root.clone())
    }

    /// Reads and parses the stored document. `None` covers every way
    /// the document can be unusable: absent, unreadable, unparseable.
    fn read_tree(&self, path: &Path) -> Option<Node> {
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }
}

impl DataStore for FileStore {
    fn load_tree(&self, scope: Scope) -> Result<Node> {
        let path = self.tree_path(scope)?;
        // Bad or missing data falls back to a fresh root. Loading never
        // rewrites the file; `doctor` owns salvage.
        Ok(self.read_tree(&path).unwrap_or_else(Node::default_tree))
    }

    fn save_tree(&mut self, tree: &Node, scope: Scope) -> Result<()> {
        let root = self.store_root(scope)?;
        self.ensure_dir(&root)?;

        let content = serde_json::to_string_pretty(tree).map_err(MindzError::Serialization)?;
        fs::write(root.join(MAP_FILENAME), content).map_err(MindzError::Io)?;
        Ok(())
    }

    fn tree_path(&self, scope: Scope) -> Result<PathBuf> {
        Ok(self.store_root(scope)?.join(MAP_FILENAME))
    }

    fn doctor(&mut self, scope: Scope) -> Result<DoctorReport> {
        let mut report = DoctorReport::default();
        let path = self.tree_path(scope)?;
        if !path.exists() {
            return Ok(report);
        }

        let content = fs::read_to_string(&path).map_err(MindzError::Io)?;
        let tree = match serde_json::from_str::<Node>(&content) {
            Ok(tree) => tree,
            Err(_) => {
                // Keep the unreadable document around before replacing it.
                let backup = path.with_file_name(format!(
                    "{}.corrupt-{}",
                    MAP_FILENAME,
                    Utc::now().format("%Y%m%d%H%M%S")
                ));
                fs::rename(&path, &backup).map_err(MindzError::Io)?;
                report.recovered_files += 1;
                Node::default_tree()
            }
        };

        let (tree, fixed_root) = tree::ensure_root_id(&tree);
        if fixed_root {
            report.fixed_root_ids += 1;
        }
        let (tree, reassigned) = tree::reassign_duplicate_ids(&tree);
        report.reassigned_ids = reassigned;

        if !report.is_clean() {
            self.save_tree(&tree, scope)?;
        }
        Ok(report)
    }
}
