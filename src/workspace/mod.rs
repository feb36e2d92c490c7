//! Workspace descriptor (angular.json)
//!
//! Only the fields the generator relies on are modelled. The document is
//! validated through typed deserialization; a missing file, invalid JSON,
//! a field of the wrong type or an unknown project all surface as
//! `ConfigurationMissing`.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::{self, Result};
use crate::tree::{self, Tree};

/// Workspace descriptor at the workspace root
pub const WORKSPACE_FILE: &str = "angular.json";

/// The parts of `angular.json` the generator reads
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSchema {
    #[serde(default)]
    pub default_project: Option<String>,
    pub projects: BTreeMap<String, WorkspaceProject>,
    #[serde(default)]
    pub cli: Option<WorkspaceCli>,
}

/// A single project entry
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceProject {
    #[serde(default)]
    pub root: String,
    #[serde(default)]
    pub source_root: Option<String>,
    pub project_type: ProjectType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Application,
    #[serde(other)]
    Library,
}

/// Workspace-wide CLI settings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceCli {
    #[serde(default)]
    pub package_manager: Option<String>,
}

impl WorkspaceSchema {
    /// Parse and validate workspace JSON
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            error::configuration_missing(format!("{WORKSPACE_FILE} is not valid: {e}"))
        })
    }

    /// Select the project to generate into
    ///
    /// An explicit name must exist. Without one the workspace default
    /// project is used, or the only project when there is exactly one.
    pub fn resolve_project(&self, name: Option<&str>) -> Result<(&str, &WorkspaceProject)> {
        let name = match name.or(self.default_project.as_deref()) {
            Some(name) => name,
            None if self.projects.len() == 1 => {
                return self
                    .projects
                    .iter()
                    .next()
                    .map(|(name, project)| (name.as_str(), project))
                    .ok_or_else(|| error::configuration_missing("no projects defined"));
            }
            None => {
                return Err(error::configuration_missing(
                    "no project given and the workspace has no default project",
                ));
            }
        };

        self.projects
            .get_key_value(name)
            .map(|(name, project)| (name.as_str(), project))
            .ok_or_else(|| {
                error::configuration_missing(format!(
                    "project '{name}' is not defined in {WORKSPACE_FILE}"
                ))
            })
    }
}

impl WorkspaceProject {
    /// Source root, `<root>/src` when not declared
    pub fn source_root(&self) -> String {
        match &self.source_root {
            Some(source_root) => tree::normalize(source_root),
            None => tree::join(&self.root, "src"),
        }
    }

    /// Default generation path: `<sourceRoot>/app` or `<sourceRoot>/lib`
    pub fn default_path(&self) -> String {
        let leaf = match self.project_type {
            ProjectType::Application => "app",
            ProjectType::Library => "lib",
        };
        tree::join(&self.source_root(), leaf)
    }
}

/// Read the workspace descriptor from the tree
pub fn read_workspace(tree: &dyn Tree) -> Result<WorkspaceSchema> {
    let bytes = tree
        .read(WORKSPACE_FILE)?
        .ok_or_else(|| error::configuration_missing(format!("{WORKSPACE_FILE} not found")))?;
    let text = String::from_utf8(bytes).map_err(|e| {
        error::configuration_missing(format!("{WORKSPACE_FILE} is not UTF-8: {e}"))
    })?;
    WorkspaceSchema::from_json(&text)
}
