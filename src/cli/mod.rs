//! CLI definitions using clap derive API
//!
//! Argument types live in one submodule per command:
//! - generate: Generate command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod generate;

pub use completions::CompletionsArgs;
pub use generate::GenerateArgs;

/// Coregen - core feature module generator
///
/// Adds a core module with a shell component to an Angular workspace.
#[derive(Parser, Debug)]
#[command(
    name = "coregen",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Core feature module generator for Angular workspaces",
    long_about = "Coregen registers a core feature module and the routing module in the root \
                  module of an Angular project, adds the Firebase packages at their latest \
                  versions to package.json, installs them and writes the module templates.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  coregen generate                        \x1b[90m# Generate into the default project\x1b[0m\n   \
                  coregen generate --dry-run              \x1b[90m# Show what would change\x1b[0m\n   \
                  coregen generate --name shell --skip-install \x1b[90m# Other name, no install\x1b[0m\n   \
                  coregen -w ../my-app generate           \x1b[90m# Run against another workspace\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Workspace directory (defaults to current directory)
    #[arg(long, short = 'w', global = true, env = "COREGEN_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Configuration file (defaults to coregen.yaml in the workspace)
    #[arg(long, short = 'c', global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the core module into a project
    #[command(alias = "g")]
    Generate(GenerateArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
