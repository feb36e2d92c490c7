//! The `generate` rule
//!
//! Steps, in order:
//! 1. resolve the target project from the workspace descriptor
//! 2. register the feature module and `AppRoutingModule` in the root module
//! 3. resolve the latest versions of the configured packages
//! 4. add them to `package.json`
//! 5. schedule a package install
//! 6. render the templates into the target path
//!
//! Every step must succeed before the next starts. Steps already committed
//! are not rolled back when a later one fails.

use tracing::{debug, info, warn};

use crate::ast::read_into_source_file;
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::manifest::{NodeDependency, NodeDependencyType, add_package_json_dependency};
use crate::patch::{add_import_to_module, apply_changes};
use crate::registry::{Registry, RegistryPackage, resolve_latest_versions};
use crate::tasks::{PackageManager, Task, TaskQueue};
use crate::template::{self, TemplateSource, TemplateVars, strings};
use crate::tree::{self, Tree};
use crate::workspace::read_workspace;

/// Root module file name, relative to the target path
pub const DEFAULT_MODULE: &str = "app.module.ts";

/// Feature name used when none is given
pub const DEFAULT_NAME: &str = "core";

const ROUTING_MODULE: &str = "AppRoutingModule";
const ROUTING_MODULE_PATH: &str = "./app-routing.module";

/// Options of a single run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Project name, the workspace default when absent
    pub project: Option<String>,
    /// Target directory, `<sourceRoot>/<app|lib>` when absent
    pub path: Option<String>,
    /// Root module file relative to the target directory
    pub module: Option<String>,
    /// Feature name
    pub name: String,
    /// View encapsulation passed to the templates
    pub encapsulation: Option<String>,
    /// Do not schedule a package install
    pub skip_install: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            project: None,
            path: None,
            module: None,
            name: DEFAULT_NAME.to_string(),
            encapsulation: None,
            skip_install: false,
        }
    }
}

/// Dependency settings taken from the configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSettings {
    pub dependencies: Vec<String>,
    pub dependency_type: NodeDependencyType,
    pub overwrite_dependencies: bool,
    pub package_manager: Option<PackageManager>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self::from(&GeneratorConfig::default())
    }
}

impl From<&GeneratorConfig> for GeneratorSettings {
    fn from(config: &GeneratorConfig) -> Self {
        Self {
            dependencies: config.dependencies.clone(),
            dependency_type: config.dependency_type,
            overwrite_dependencies: config.overwrite_dependencies,
            package_manager: config.package_manager,
        }
    }
}

/// Outcome of a successful run
#[derive(Debug)]
pub struct Generation {
    /// Project generated into
    pub project: String,
    /// Directory the templates were written to
    pub path: String,
    /// Resolved packages, in configuration order
    pub packages: Vec<RegistryPackage>,
    /// Work to run once the tree is committed
    pub tasks: TaskQueue,
}

/// Generator for a core feature module
pub struct CoreGenerator<'a, R> {
    registry: R,
    templates: &'a dyn TemplateSource,
    settings: GeneratorSettings,
}

impl<'a, R: Registry> CoreGenerator<'a, R> {
    pub fn new(registry: R, templates: &'a dyn TemplateSource, settings: GeneratorSettings) -> Self {
        Self {
            registry,
            templates,
            settings,
        }
    }

    /// Run every step against `tree`
    pub async fn run(&self, tree: &mut dyn Tree, options: &GenerateOptions) -> Result<Generation> {
        let workspace = read_workspace(tree)?;
        let (project_name, project) = workspace.resolve_project(options.project.as_deref())?;
        let path = options
            .path
            .as_deref()
            .map_or_else(|| project.default_path(), tree::normalize);
        let module = tree::join(&path, options.module.as_deref().unwrap_or(DEFAULT_MODULE));
        debug!(project = project_name, %path, %module, "resolved target");

        let feature = strings::dasherize(&options.name);
        let feature_module = format!("{}Module", strings::classify(&options.name));
        add_to_module(tree, &module, &feature_module, &format!("./{feature}/{feature}.module"))?;
        add_to_module(tree, &module, ROUTING_MODULE, ROUTING_MODULE_PATH)?;

        let packages = resolve_latest_versions(&self.registry, &self.settings.dependencies).await?;
        for package in &packages {
            let dependency = NodeDependency {
                kind: self.settings.dependency_type,
                name: package.name.clone(),
                version: package.version.clone(),
                overwrite: self.settings.overwrite_dependencies,
            };
            if add_package_json_dependency(tree, &dependency)? {
                info!("Added dependency {}@{}", package.name, package.version);
            } else {
                debug!(name = %package.name, "dependency already present");
            }
        }

        let mut tasks = TaskQueue::new();
        if options.skip_install {
            debug!("package install skipped");
        } else {
            let configured = self.settings.package_manager.or_else(|| {
                workspace
                    .cli
                    .as_ref()
                    .and_then(|cli| cli.package_manager.as_deref())
                    .and_then(|name| match name.parse() {
                        Ok(manager) => Some(manager),
                        Err(e) => {
                            warn!("ignoring workspace package manager: {e}");
                            None
                        }
                    })
            });
            tasks.add_task(Task::NodePackageInstall {
                package_manager: PackageManager::detect(tree, configured)?,
                working_directory: String::new(),
            });
        }

        let mut vars = TemplateVars::new();
        vars.insert("name".to_string(), options.name.clone());
        vars.insert("project".to_string(), project_name.to_string());
        if let Some(encapsulation) = &options.encapsulation {
            vars.insert("encapsulation".to_string(), encapsulation.clone());
        }
        let files = template::render(self.templates, &vars)?;
        template::materialize(tree, files, &path)?;

        Ok(Generation {
            project: project_name.to_string(),
            path,
            packages,
            tasks,
        })
    }
}

/// Import `symbol` into the root module and list it in its `imports`
fn add_to_module(tree: &mut dyn Tree, module: &str, symbol: &str, import_path: &str) -> Result<()> {
    let source = read_into_source_file(tree, module)?;
    let changes = add_import_to_module(&source, symbol, import_path)?;
    if changes.is_empty() {
        debug!(module, symbol, "already registered");
        return Ok(());
    }
    apply_changes(tree, module, &changes)?;
    info!("Registered {symbol} in {module}");
    Ok(())
}
