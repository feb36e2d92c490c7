//! Project tree backed by a workspace directory
//!
//! Writes go straight to disk, so a step that committed stays committed even
//! if a later step fails. In dry-run mode writes are staged in memory
//! instead and reads see the staged content first.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{Action, Tree, normalize};
use crate::error::{self, Result};

/// A project tree rooted at a directory on disk
#[derive(Debug)]
pub struct HostTree {
    root: PathBuf,
    dry_run: bool,
    staged: BTreeMap<String, Vec<u8>>,
    actions: Vec<Action>,
}

impl HostTree {
    pub fn new(root: impl Into<PathBuf>, dry_run: bool) -> Self {
        Self {
            root: root.into(),
            dry_run,
            staged: BTreeMap::new(),
            actions: Vec::new(),
        }
    }

    /// Workspace root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(normalize(path))
    }
}

impl Tree for HostTree {
    fn read(&self, path: &str) -> Result<Option<Vec<u8>>> {
        let key = normalize(path);
        if let Some(content) = self.staged.get(&key) {
            return Ok(Some(content.clone()));
        }

        let full = self.resolve(&key);
        if full.is_dir() {
            return Ok(None);
        }
        match fs::read(&full) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(error::file_read_failed(key, e.to_string())),
        }
    }

    fn store(&mut self, path: &str, content: Vec<u8>) -> Result<()> {
        let key = normalize(path);
        if self.dry_run {
            self.staged.insert(key, content);
            return Ok(());
        }

        let full = self.resolve(&key);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| error::file_write_failed(parent.display().to_string(), e.to_string()))?;
        }
        fs::write(&full, content).map_err(|e| error::file_write_failed(key, e.to_string()))
    }

    fn actions(&self) -> &[Action] {
        &self.actions
    }

    fn record(&mut self, action: Action) {
        self.actions.push(action);
    }
}
