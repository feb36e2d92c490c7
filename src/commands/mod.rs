//! Command implementations for the coregen CLI

pub mod completions;
pub mod generate;
pub mod helpers;
pub mod version;
