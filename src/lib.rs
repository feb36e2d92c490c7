//! Coregen - core feature module generator
//!
//! Adds a core feature module to an Angular workspace: the module and the
//! routing module are registered in the root `@NgModule`, the Firebase
//! packages are added to `package.json` at their latest published versions,
//! a package install is scheduled and the module templates are written.
//!
//! Everything the generator touches goes through the [`tree::Tree`] trait,
//! so a run can target the file system ([`tree::HostTree`]) or memory
//! ([`tree::MemoryTree`]).

pub mod ast;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod manifest;
pub mod patch;
pub mod progress;
pub mod registry;
pub mod tasks;
pub mod template;
pub mod tree;
pub mod ui;
pub mod workspace;

pub use error::{CoregenError, Result};
