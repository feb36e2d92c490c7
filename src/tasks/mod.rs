//! Post-generation tasks
//!
//! The generator only schedules work here. Tasks run after the generator
//! has returned and every tree mutation has been committed.

use std::fmt;
use std::path::Path;
use std::process::Command;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{self, CoregenError, Result};
use crate::tree::{self, Tree};

/// Package manager used to install dependencies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

impl PackageManager {
    /// Executable name
    pub fn command(self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
        }
    }

    /// Flag that keeps install output down; only npm understands `--quiet`
    pub fn quiet_flag(self) -> &'static str {
        match self {
            PackageManager::Npm => "--quiet",
            PackageManager::Yarn | PackageManager::Pnpm | PackageManager::Bun => "--silent",
        }
    }

    /// Pick the package manager for a workspace
    ///
    /// An explicit choice wins, then the lockfile present in the tree, then npm.
    pub fn detect(tree: &dyn Tree, configured: Option<PackageManager>) -> Result<Self> {
        if let Some(manager) = configured {
            return Ok(manager);
        }
        let lockfiles = [
            ("yarn.lock", PackageManager::Yarn),
            ("pnpm-lock.yaml", PackageManager::Pnpm),
            ("bun.lockb", PackageManager::Bun),
            ("bun.lock", PackageManager::Bun),
        ];
        for (file, manager) in lockfiles {
            if tree.exists(file)? {
                return Ok(manager);
            }
        }
        Ok(PackageManager::Npm)
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

impl FromStr for PackageManager {
    type Err = CoregenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "npm" => Ok(PackageManager::Npm),
            "yarn" => Ok(PackageManager::Yarn),
            "pnpm" => Ok(PackageManager::Pnpm),
            "bun" => Ok(PackageManager::Bun),
            other => Err(error::config_invalid(format!(
                "unknown package manager '{other}' (expected npm, yarn, pnpm or bun)"
            ))),
        }
    }
}

/// Work to run after generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    /// Run `<package manager> install` in a workspace directory
    NodePackageInstall {
        package_manager: PackageManager,
        working_directory: String,
    },
}

impl Task {
    /// Command line shown to the user
    pub fn describe(&self) -> String {
        match self {
            Task::NodePackageInstall {
                package_manager, ..
            } => format!("{package_manager} install"),
        }
    }

    fn command(&self, workspace_root: &Path) -> Command {
        match self {
            Task::NodePackageInstall {
                package_manager,
                working_directory,
            } => {
                let mut command = Command::new(package_manager.command());
                command
                    .arg("install")
                    .arg(package_manager.quiet_flag())
                    .current_dir(workspace_root.join(tree::normalize(working_directory)));
                command
            }
        }
    }

    fn run(&self, workspace_root: &Path) -> Result<()> {
        info!("Installing packages ({})...", self.describe());
        let status = self
            .command(workspace_root)
            .status()
            .map_err(|e| error::task_failed(self.describe(), e.to_string()))?;

        if !status.success() {
            return Err(error::task_failed(self.describe(), status.to_string()));
        }
        Ok(())
    }
}

/// Ordered queue of scheduled tasks
#[derive(Debug, Default, Clone)]
pub struct TaskQueue {
    tasks: Vec<Task>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a task; an identical task is only scheduled once
    pub fn add_task(&mut self, task: Task) {
        if self.tasks.contains(&task) {
            return;
        }
        debug!(task = %task.describe(), "scheduled");
        self.tasks.push(task);
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Run every task in scheduling order, stopping at the first failure
    pub fn run(self, workspace_root: &Path) -> Result<()> {
        for task in &self.tasks {
            task.run(workspace_root)?;
        }
        Ok(())
    }
}
