//! Template rendering and materialization
//!
//! A [`TemplateSource`] provides raw template files. Rendering substitutes
//! variables into both contents (minijinja syntax, with the `classify`,
//! `dasherize` and `camelize` helpers as filters and functions) and paths
//! (`__name@dasherize__` placeholders). A trailing `.template` suffix is
//! dropped from rendered paths.

mod builtin;
pub mod strings;

pub use builtin::BuiltinTemplates;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use minijinja::Environment;
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{self, Result};
use crate::tree::{self, Tree};

/// Substitution variables, keyed by name
pub type TemplateVars = BTreeMap<String, String>;

/// A template or rendered file, path relative to its root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    pub path: String,
    pub content: String,
}

impl TemplateFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Provider of raw template files
pub trait TemplateSource {
    fn files(&self) -> Result<Vec<TemplateFile>>;
}

/// Templates read from a directory on disk
#[derive(Debug, Clone)]
pub struct DirectoryTemplates {
    root: PathBuf,
}

impl DirectoryTemplates {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl TemplateSource for DirectoryTemplates {
    fn files(&self) -> Result<Vec<TemplateFile>> {
        if !self.root.is_dir() {
            return Err(error::file_not_found(self.root.display().to_string()));
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry.map_err(|e| error::io_error(e.to_string()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let content = std::fs::read_to_string(entry.path())
                .map_err(|e| error::file_read_failed(entry.path().display().to_string(), e.to_string()))?;
            files.push(TemplateFile::new(relative_path(&self.root, entry.path()), content));
        }
        Ok(files)
    }
}

fn relative_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    tree::normalize(&relative.to_string_lossy())
}

fn environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.add_filter("classify", strings::classify);
    env.add_filter("dasherize", strings::dasherize);
    env.add_filter("camelize", strings::camelize);
    env.add_function("classify", strings::classify);
    env.add_function("dasherize", strings::dasherize);
    env.add_function("camelize", strings::camelize);
    env
}

/// Render every file of a source
pub fn render(source: &dyn TemplateSource, vars: &TemplateVars) -> Result<Vec<TemplateFile>> {
    let env = environment();
    source
        .files()?
        .into_iter()
        .map(|file| {
            let content = env
                .render_str(&file.content, vars)
                .map_err(|e| error::template_failed(&file.path, e.to_string()))?;
            let path = render_path(&file.path, vars)?;
            Ok(TemplateFile::new(path, content))
        })
        .collect()
}

/// Substitute `__var__` and `__var@helper__` placeholders in a path
///
/// Unknown variables are left as they are, so names such as `__tests__`
/// survive. An unknown helper is an error.
pub fn render_path(path: &str, vars: &TemplateVars) -> Result<String> {
    let mut out = String::with_capacity(path.len());
    let mut rest = path;
    while let Some(start) = rest.find("__") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("__") else {
            break;
        };
        let placeholder = &after[..end];
        out.push_str(&rest[..start]);

        let (name, helper) = placeholder
            .split_once('@')
            .map_or((placeholder, None), |(n, h)| (n, Some(h)));
        match vars.get(name) {
            Some(value) => out.push_str(&apply_helper(path, value, helper)?),
            None => {
                out.push_str("__");
                out.push_str(placeholder);
                out.push_str("__");
            }
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);

    let out = out.strip_suffix(".template").map(str::to_string).unwrap_or(out);
    Ok(tree::normalize(&out))
}

fn apply_helper(path: &str, value: &str, helper: Option<&str>) -> Result<String> {
    match helper {
        None => Ok(value.to_string()),
        Some("classify") => Ok(strings::classify(value)),
        Some("dasherize") => Ok(strings::dasherize(value)),
        Some("camelize") => Ok(strings::camelize(value)),
        Some(other) => Err(error::template_failed(
            path,
            format!("unknown path helper '{other}'"),
        )),
    }
}

/// Write rendered files under `target`, overwriting existing ones
pub fn materialize(tree: &mut dyn Tree, files: Vec<TemplateFile>, target: &str) -> Result<()> {
    for file in files {
        let path = tree::join(target, &file.path);
        let content = file.content.into_bytes();
        if tree.exists(&path)? {
            debug!(%path, "overwriting");
            tree.overwrite(&path, content)?;
        } else {
            debug!(%path, "creating");
            tree.create(&path, content)?;
        }
    }
    Ok(())
}
