//! Core module templates compiled into the binary

use super::{TemplateFile, TemplateSource};
use crate::error::Result;

const FILES: &[(&str, &str)] = &[
    (
        "__name@dasherize__/__name@dasherize__.module.ts.template",
        include_str!("../../templates/core/__name@dasherize__/__name@dasherize__.module.ts.template"),
    ),
    (
        "__name@dasherize__/module-import-guard.ts.template",
        include_str!("../../templates/core/__name@dasherize__/module-import-guard.ts.template"),
    ),
    (
        "__name@dasherize__/shell/shell.component.ts.template",
        include_str!("../../templates/core/__name@dasherize__/shell/shell.component.ts.template"),
    ),
    (
        "__name@dasherize__/shell/shell.component.html.template",
        include_str!("../../templates/core/__name@dasherize__/shell/shell.component.html.template"),
    ),
];

/// The core module, its import guard and a shell component
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

impl TemplateSource for BuiltinTemplates {
    fn files(&self) -> Result<Vec<TemplateFile>> {
        Ok(FILES
            .iter()
            .map(|(path, content)| TemplateFile::new(*path, *content))
            .collect())
    }
}
