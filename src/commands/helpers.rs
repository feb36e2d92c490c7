//! Command helper utilities

use std::path::{Path, PathBuf};

use crate::error::{self, Result};
use crate::workspace::WORKSPACE_FILE;

/// Resolve workspace path from optional argument
///
/// If a workspace path is provided, use it. Otherwise, search upwards from
/// the current directory for the nearest directory holding `angular.json`,
/// falling back to the current directory itself.
pub fn resolve_workspace_path(workspace: Option<PathBuf>) -> Result<PathBuf> {
    match workspace {
        Some(path) => {
            if !path.is_dir() {
                return Err(error::file_not_found(path.display().to_string()));
            }
            Ok(path)
        }
        None => {
            let current = std::env::current_dir().map_err(|e| {
                error::io_error(format!("Failed to get current directory: {e}"))
            })?;
            Ok(find_workspace_root(&current).unwrap_or(current))
        }
    }
}

/// Nearest ancestor of `start` (itself included) holding a workspace descriptor
pub fn find_workspace_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(WORKSPACE_FILE).is_file())
        .map(Path::to_path_buf)
}
