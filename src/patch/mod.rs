//! Planning and applying text insertions to module files
//!
//! Planning works on a parsed [`SourceFile`](crate::ast::SourceFile) and
//! produces [`InsertChange`]s whose offsets refer to the original text.
//! Applying opens one update session per file, inserts every change and
//! commits once.

mod imports;
mod metadata;

pub use imports::insert_import;
pub use metadata::{
    add_declaration_to_module, add_import_to_module, add_symbol_to_ng_module_metadata,
};

use tracing::debug;

use crate::error::Result;
use crate::tree::Tree;

/// Text to insert at a byte offset of a file's original content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertChange {
    pub path: String,
    pub pos: usize,
    pub to_add: String,
    pub description: String,
}

impl InsertChange {
    pub fn new(
        path: impl Into<String>,
        pos: usize,
        to_add: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            pos,
            to_add: to_add.into(),
            description: description.into(),
        }
    }
}

/// Apply planned changes to one file in a single update session
///
/// Either every change lands or the file is left as it was. An empty plan
/// does not touch the file.
pub fn apply_changes(tree: &mut dyn Tree, path: &str, changes: &[InsertChange]) -> Result<()> {
    if changes.is_empty() {
        debug!(path, "nothing to insert");
        return Ok(());
    }

    let mut recorder = tree.begin_update(path)?;
    for change in changes {
        debug!(path, pos = change.pos, "{}", change.description);
        recorder.insert_left(change.pos, change.to_add.as_str());
    }
    tree.commit_update(recorder)
}
