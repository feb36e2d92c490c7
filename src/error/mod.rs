//! Error types and handling for coregen
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`fs`]: Project tree and file system errors
//! - [`source`]: Source parsing and patching errors
//! - [`config`]: Workspace, manifest and generator configuration errors
//! - [`registry`]: Package registry errors
//! - [`template`]: Template rendering and post-generation task errors
//!
//! Every error is fatal to a generation run. Nothing is retried.

pub mod config;
pub mod fs;
pub mod registry;
pub mod source;
pub mod template;

pub use config::{
    configuration_missing, invalid as config_invalid, manifest_invalid,
    parse_failed as config_parse_failed,
};
pub use fs::{
    already_exists as file_already_exists, io_error, not_found as file_not_found,
    read_failed as file_read_failed, write_failed as file_write_failed,
};
pub use registry::lookup_failed as registry_lookup_failed;
pub use source::{invalid_insertion, syntax_error, target_not_found};
pub use template::{render_failed as template_failed, task_failed};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for coregen operations
#[derive(Error, Diagnostic, Debug)]
pub enum CoregenError {
    // File system errors
    #[error("File {path} does not exist")]
    #[diagnostic(code(coregen::fs::not_found))]
    FileNotFound { path: String },

    #[error("File {path} already exists")]
    #[diagnostic(
        code(coregen::fs::already_exists),
        help("Use overwrite to replace existing content")
    )]
    FileAlreadyExists { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(coregen::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(coregen::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(coregen::fs::io_error))]
    IoError { message: String },

    // Source errors
    #[error("Syntax error in {path} at line {line}, column {column}")]
    #[diagnostic(
        code(coregen::source::syntax_error),
        help("Fix the syntax error in the file before running the generator")
    )]
    SyntaxError {
        path: String,
        line: usize,
        column: usize,
    },

    #[error("Could not find {target} in {path}")]
    #[diagnostic(
        code(coregen::source::target_not_found),
        help("The module metadata must declare the target list, e.g. `imports: []`")
    )]
    TargetNotFound { path: String, target: String },

    #[error("Invalid insertion at offset {position} in {path} ({length} bytes)")]
    #[diagnostic(code(coregen::source::invalid_insertion))]
    InvalidInsertion {
        path: String,
        position: usize,
        length: usize,
    },

    // Configuration errors
    #[error("Could not find workspace configuration: {reason}")]
    #[diagnostic(
        code(coregen::workspace::configuration_missing),
        help("Run coregen from the root of an Angular workspace, or pass --workspace")
    )]
    ConfigurationMissing { reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(coregen::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(coregen::config::invalid))]
    ConfigInvalid { message: String },

    #[error("Invalid package manifest {path}: {reason}")]
    #[diagnostic(code(coregen::manifest::invalid))]
    ManifestInvalid { path: String, reason: String },

    // Registry errors
    #[error("Registry lookup failed for package '{package}': {reason}")]
    #[diagnostic(
        code(coregen::registry::lookup_failed),
        help("Check network access and the registry URL (--registry or COREGEN_REGISTRY)")
    )]
    RegistryLookupFailed { package: String, reason: String },

    // Template and task errors
    #[error("Failed to render template {template}: {reason}")]
    #[diagnostic(code(coregen::template::render_failed))]
    TemplateFailed { template: String, reason: String },

    #[error("Task `{command}` failed: {reason}")]
    #[diagnostic(
        code(coregen::task::failed),
        help("Run the package manager install manually, or pass --skip-install")
    )]
    TaskFailed { command: String, reason: String },
}

impl From<std::io::Error> for CoregenError {
    fn from(err: std::io::Error) -> Self {
        CoregenError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for CoregenError {
    fn from(err: serde_yaml::Error) -> Self {
        CoregenError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, CoregenError>;
