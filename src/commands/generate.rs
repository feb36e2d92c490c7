//! Generate command implementation
//!
//! Builds the host tree, registry client and template source from the
//! command line and configuration, runs the generator on a single-threaded
//! runtime, prints what changed and finally runs the scheduled tasks.

use std::path::PathBuf;
use std::time::Duration;

use console::Term;
use tracing::info;

use crate::cli::GenerateArgs;
use crate::commands::helpers::resolve_workspace_path;
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::generator::{CoreGenerator, GeneratorSettings};
use crate::logging::init_logging;
use crate::progress::ProgressRegistry;
use crate::registry::NpmRegistry;
use crate::template::{BuiltinTemplates, DirectoryTemplates, TemplateSource};
use crate::tree::{HostTree, Tree};
use crate::ui;

/// Run generate command
pub fn run(
    workspace: Option<PathBuf>,
    config: Option<PathBuf>,
    verbose: bool,
    args: GenerateArgs,
) -> Result<()> {
    let root = resolve_workspace_path(workspace)?;
    let config = load_config(&root, config, &args)?;
    init_logging(config.log.as_deref(), verbose);

    let registry = NpmRegistry::new(
        &config.registry,
        Duration::from_secs(config.registry_timeout_secs),
    )?;
    let registry = ProgressRegistry::new(registry, Term::stderr().is_term() && !verbose);

    let directory = args.templates.as_ref().map(DirectoryTemplates::new);
    let templates: &dyn TemplateSource = match &directory {
        Some(directory) => directory,
        None => &BuiltinTemplates,
    };

    let generator = CoreGenerator::new(&registry, templates, GeneratorSettings::from(&config));
    let mut tree = HostTree::new(&root, args.dry_run);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(generator.run(&mut tree, &args.options()));
    registry.finish();

    ui::print_summary(tree.actions(), args.dry_run);
    let generation = result?;

    if args.dry_run {
        for task in generation.tasks.tasks() {
            info!("Skipping `{}` (dry run)", task.describe());
        }
        return Ok(());
    }
    generation.tasks.run(&root)
}

fn load_config(
    root: &std::path::Path,
    explicit: Option<PathBuf>,
    args: &GenerateArgs,
) -> Result<GeneratorConfig> {
    let mut config = GeneratorConfig::load(root, explicit.as_deref())?;
    if let Some(registry) = &args.registry {
        config.registry.clone_from(registry);
        config.validate()?;
    }
    Ok(config)
}
