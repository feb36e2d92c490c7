//! Project tree abstraction
//!
//! The generator never touches the file system directly. Every read and
//! write goes through the [`Tree`] trait so that the planning and patching
//! logic stays independent of the host:
//! - [`HostTree`]: a workspace directory on disk, optionally staged in memory (dry run)
//! - [`MemoryTree`]: a path to content map, used by tests and previews
//!
//! Paths are workspace-relative and normalized with [`normalize`], so
//! `/src/app/app.module.ts`, `src/app/app.module.ts` and
//! `./src/app/../app/app.module.ts` all name the same file.

mod action;
mod host;
mod memory;
mod recorder;

pub use action::{Action, ActionKind, summarize};
pub use host::HostTree;
pub use memory::MemoryTree;
pub use recorder::UpdateRecorder;

use crate::error::{self, Result};

/// Capabilities a generator needs from the project it runs against
///
/// Implementors provide raw storage (`read`, `store`) and an action log.
/// The checked operations (`create`, `overwrite`, update sessions) are
/// built on top of those and record what they did.
pub trait Tree {
    /// Read the current content of a path, `None` when it does not exist
    fn read(&self, path: &str) -> Result<Option<Vec<u8>>>;

    /// Replace the content of a path without any existence checks
    fn store(&mut self, path: &str, content: Vec<u8>) -> Result<()>;

    /// Mutations performed so far, in order
    fn actions(&self) -> &[Action];

    /// Append to the action log
    fn record(&mut self, action: Action);

    /// Check whether a path exists
    ///
    /// Only a missing file reads as absent; any other read failure is returned.
    fn exists(&self, path: &str) -> Result<bool> {
        Ok(self.read(path)?.is_some())
    }

    /// Create a new file, failing if it already exists
    fn create(&mut self, path: &str, content: Vec<u8>) -> Result<()> {
        let path = normalize(path);
        if self.exists(&path)? {
            return Err(error::file_already_exists(path));
        }
        let size = content.len();
        self.store(&path, content)?;
        self.record(Action::new(ActionKind::Create, path, size));
        Ok(())
    }

    /// Replace the content of an existing file
    fn overwrite(&mut self, path: &str, content: Vec<u8>) -> Result<()> {
        let path = normalize(path);
        if !self.exists(&path)? {
            return Err(error::file_not_found(path));
        }
        let size = content.len();
        self.store(&path, content)?;
        self.record(Action::new(ActionKind::Overwrite, path, size));
        Ok(())
    }

    /// Open an update session on an existing file
    fn begin_update(&self, path: &str) -> Result<UpdateRecorder> {
        let path = normalize(path);
        let content = self
            .read(&path)?
            .ok_or_else(|| error::file_not_found(path.clone()))?;
        Ok(UpdateRecorder::new(path, content))
    }

    /// Apply every insertion of a session and write the result once
    ///
    /// Offsets are validated before anything is stored; an invalid session
    /// leaves the file untouched.
    fn commit_update(&mut self, recorder: UpdateRecorder) -> Result<()> {
        let (path, content) = recorder.finish()?;
        let size = content.len();
        self.store(&path, content)?;
        self.record(Action::new(ActionKind::Update, path, size));
        Ok(())
    }
}

/// Read a path as UTF-8 text
pub fn read_to_string(tree: &dyn Tree, path: &str) -> Result<String> {
    let path = normalize(path);
    let bytes = tree
        .read(&path)?
        .ok_or_else(|| error::file_not_found(path.clone()))?;
    String::from_utf8(bytes).map_err(|e| error::file_read_failed(path, e.to_string()))
}

/// Normalize a workspace path to `a/b/c` form
///
/// Backslashes become slashes, empty and `.` segments are dropped and `..`
/// pops the previous segment (never above the workspace root).
pub fn normalize(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split(['/', '\\']) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    segments.join("/")
}

/// Join two workspace paths and normalize the result
pub fn join(base: &str, relative: &str) -> String {
    normalize(&format!("{base}/{relative}"))
}
