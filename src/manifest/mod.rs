//! Package manifest (package.json) dependency updates
//!
//! The manifest is edited as a JSON document with its key order preserved.
//! New entries are placed in name order within their section, existing
//! entries are left where they are.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{self, Result};
use crate::tree::{self, Tree};

/// Manifest file at the workspace root
pub const PACKAGE_JSON: &str = "package.json";

/// Dependency section of the manifest
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeDependencyType {
    #[default]
    Default,
    Dev,
    Peer,
    Optional,
}

impl NodeDependencyType {
    /// Manifest key holding this kind of dependency
    pub fn section(self) -> &'static str {
        match self {
            NodeDependencyType::Default => "dependencies",
            NodeDependencyType::Dev => "devDependencies",
            NodeDependencyType::Peer => "peerDependencies",
            NodeDependencyType::Optional => "optionalDependencies",
        }
    }
}

/// A dependency entry to add to the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeDependency {
    pub kind: NodeDependencyType,
    pub name: String,
    pub version: String,
    /// Replace an existing entry of the same name
    pub overwrite: bool,
}

/// Add a dependency entry to `package.json`
///
/// Returns `false` without touching the file when an entry with the same
/// name exists and `overwrite` is off.
pub fn add_package_json_dependency(tree: &mut dyn Tree, dependency: &NodeDependency) -> Result<bool> {
    let mut manifest = read_manifest(tree)?;
    let root = manifest
        .as_object_mut()
        .ok_or_else(|| error::manifest_invalid(PACKAGE_JSON, "top level is not an object"))?;

    let section_key = dependency.kind.section();
    let section = root
        .entry(section_key)
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or_else(|| {
            error::manifest_invalid(PACKAGE_JSON, format!("`{section_key}` is not an object"))
        })?;

    let version = Value::String(dependency.version.clone());
    if section.contains_key(&dependency.name) {
        if !dependency.overwrite {
            return Ok(false);
        }
        section.insert(dependency.name.clone(), version);
    } else {
        *section = insert_sorted(std::mem::take(section), &dependency.name, version);
    }

    write_manifest(tree, &manifest)?;
    Ok(true)
}

/// Look up a dependency across all sections
pub fn get_package_json_dependency(tree: &dyn Tree, name: &str) -> Result<Option<NodeDependency>> {
    let manifest = read_manifest(tree)?;
    let kinds = [
        NodeDependencyType::Default,
        NodeDependencyType::Dev,
        NodeDependencyType::Peer,
        NodeDependencyType::Optional,
    ];

    Ok(kinds.into_iter().find_map(|kind| {
        manifest
            .get(kind.section())?
            .get(name)?
            .as_str()
            .map(|version| NodeDependency {
                kind,
                name: name.to_string(),
                version: version.to_string(),
                overwrite: false,
            })
    }))
}

fn read_manifest(tree: &dyn Tree) -> Result<Value> {
    let text = tree::read_to_string(tree, PACKAGE_JSON)?;
    serde_json::from_str(&text).map_err(|e| error::manifest_invalid(PACKAGE_JSON, e.to_string()))
}

fn write_manifest(tree: &mut dyn Tree, manifest: &Value) -> Result<()> {
    let mut text = serde_json::to_string_pretty(manifest)
        .map_err(|e| error::manifest_invalid(PACKAGE_JSON, e.to_string()))?;
    text.push('\n');
    tree.overwrite(PACKAGE_JSON, text.into_bytes())
}

/// Insert before the first existing key that sorts after `name`
fn insert_sorted(section: Map<String, Value>, name: &str, value: Value) -> Map<String, Value> {
    let mut result = Map::new();
    let mut pending = Some(value);
    for (key, existing) in section {
        if key.as_str() > name {
            if let Some(value) = pending.take() {
                result.insert(name.to_string(), value);
            }
        }
        result.insert(key, existing);
    }
    if let Some(value) = pending {
        result.insert(name.to_string(), value);
    }
    result
}
