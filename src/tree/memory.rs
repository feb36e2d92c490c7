//! In-memory project tree

use std::collections::BTreeMap;

use super::{Action, Tree, normalize};
use crate::error::Result;

/// A project tree held entirely in memory
#[derive(Debug, Default, Clone)]
pub struct MemoryTree {
    files: BTreeMap<String, Vec<u8>>,
    actions: Vec<Action>,
}

impl MemoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file without recording an action
    #[must_use]
    pub fn with_file(mut self, path: &str, content: impl AsRef<[u8]>) -> Self {
        self.files
            .insert(normalize(path), content.as_ref().to_vec());
        self
    }

    /// Read a file as text, `None` if absent or not UTF-8
    pub fn read_string(&self, path: &str) -> Option<String> {
        self.files
            .get(&normalize(path))
            .and_then(|bytes| String::from_utf8(bytes.clone()).ok())
    }

    /// All paths currently in the tree
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }
}

impl Tree for MemoryTree {
    fn read(&self, path: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.files.get(&normalize(path)).cloned())
    }

    fn store(&mut self, path: &str, content: Vec<u8>) -> Result<()> {
        self.files.insert(normalize(path), content);
        Ok(())
    }

    fn actions(&self) -> &[Action] {
        &self.actions
    }

    fn record(&mut self, action: Action) {
        self.actions.push(action);
    }

    fn exists(&self, path: &str) -> Result<bool> {
        Ok(self.files.contains_key(&normalize(path)))
    }
}
