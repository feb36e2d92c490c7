use std::path::PathBuf;

use clap::Parser;

use crate::generator::{DEFAULT_NAME, GenerateOptions};

/// Arguments for the generate command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate the core module into the default project:\n    coregen generate\n\n\
                  Preview the changes without writing anything:\n    coregen generate --dry-run\n\n\
                  Generate into another project and directory:\n    coregen generate --project admin --path projects/admin/src/app\n\n\
                  Use a registry mirror and skip the install:\n    coregen generate --registry https://npm.example.com --skip-install")]
pub struct GenerateArgs {
    /// Project to generate into (defaults to the workspace default project)
    #[arg(long)]
    pub project: Option<String>,

    /// Target directory (defaults to <sourceRoot>/app)
    #[arg(long)]
    pub path: Option<String>,

    /// Root module file, relative to the target directory
    #[arg(long, short = 'm', value_name = "FILE")]
    pub module: Option<String>,

    /// Feature name
    #[arg(long, short = 'n', default_value = DEFAULT_NAME)]
    pub name: String,

    /// View encapsulation of the generated shell component
    #[arg(long, value_parser = ["Emulated", "None", "ShadowDom"])]
    pub encapsulation: Option<String>,

    /// Do not run the package manager afterwards
    #[arg(long)]
    pub skip_install: bool,

    /// Report the changes without writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Read templates from a directory instead of the built-in set
    #[arg(long, value_name = "DIR")]
    pub templates: Option<PathBuf>,

    /// Package registry URL
    #[arg(long, env = "COREGEN_REGISTRY", value_name = "URL")]
    pub registry: Option<String>,
}

impl GenerateArgs {
    /// Generator options carried by these arguments
    pub fn options(&self) -> GenerateOptions {
        GenerateOptions {
            project: self.project.clone(),
            path: self.path.clone(),
            module: self.module.clone(),
            name: self.name.clone(),
            encapsulation: self.encapsulation.clone(),
            skip_install: self.skip_install,
        }
    }
}
