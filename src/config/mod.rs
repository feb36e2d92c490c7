//! Generator configuration (coregen.yaml)
//!
//! Looked up in this order:
//! - the file given with `--config`
//! - `coregen.yaml` in the workspace root
//! - `<config_dir>/coregen/config.yaml`
//!
//! A missing file means defaults. Command line flags override file values.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{self, CoregenError, Result};
use crate::manifest::NodeDependencyType;
use crate::registry::DEFAULT_REGISTRY;
use crate::tasks::PackageManager;

/// Configuration file name in the workspace root
pub const CONFIG_FILE: &str = "coregen.yaml";

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Registry base URL
    pub registry: String,

    /// Timeout for each registry request
    pub registry_timeout_secs: u64,

    /// Packages added to the manifest at their latest version
    pub dependencies: Vec<String>,

    /// Manifest section the packages go to
    pub dependency_type: NodeDependencyType,

    /// Replace entries already present in the manifest
    pub overwrite_dependencies: bool,

    /// Package manager override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_manager: Option<PackageManager>,

    /// Log filter, e.g. `debug` or `coregen=trace`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            registry: DEFAULT_REGISTRY.to_string(),
            registry_timeout_secs: 30,
            dependencies: vec!["firebase".to_string(), "@angular/fire".to_string()],
            dependency_type: NodeDependencyType::Default,
            overwrite_dependencies: false,
            package_manager: None,
            log: None,
        }
    }
}

impl GeneratorConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| error::file_read_failed(path.display().to_string(), e.to_string()))?;
        Self::from_yaml(&yaml).map_err(|e| match e {
            CoregenError::ConfigParseFailed { reason, .. } => {
                error::config_parse_failed(path.display().to_string(), reason)
            }
            other => other,
        })
    }

    /// Load the configuration for a workspace
    pub fn load(workspace_root: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(error::file_not_found(path.display().to_string()));
            }
            debug!(path = %path.display(), "loading configuration");
            return Self::from_file(path);
        }

        match Self::candidates(workspace_root).into_iter().find(|p| p.is_file()) {
            Some(path) => {
                debug!(path = %path.display(), "loading configuration");
                Self::from_file(&path)
            }
            None => {
                debug!("no configuration file, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn candidates(workspace_root: &Path) -> Vec<PathBuf> {
        let mut candidates = vec![workspace_root.join(CONFIG_FILE)];
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join("coregen").join("config.yaml"));
        }
        candidates
    }

    /// Check values serde cannot
    pub fn validate(&self) -> Result<()> {
        let registry = self.registry.trim();
        if registry.is_empty() {
            return Err(error::config_invalid("registry must not be empty"));
        }
        if !registry.starts_with("http://") && !registry.starts_with("https://") {
            return Err(error::config_invalid(format!(
                "registry must be an http(s) URL, got '{registry}'"
            )));
        }
        if self.registry_timeout_secs == 0 {
            return Err(error::config_invalid(
                "registry_timeout_secs must be greater than zero",
            ));
        }
        if self.dependencies.is_empty() {
            return Err(error::config_invalid("dependencies must not be empty"));
        }
        if let Some(blank) = self.dependencies.iter().position(|d| d.trim().is_empty()) {
            return Err(error::config_invalid(format!(
                "dependencies[{blank}] is an empty package name"
            )));
        }
        Ok(())
    }
}
