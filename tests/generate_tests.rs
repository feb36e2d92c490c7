//! End-to-end generator runs against a workspace on disk

mod common;

use std::collections::HashMap;

use common::{APP_MODULE, PACKAGE_JSON, TestWorkspace};
use coregen::error::{self, CoregenError, Result};
use coregen::generator::{CoreGenerator, GenerateOptions, GeneratorSettings};
use coregen::manifest::{NodeDependencyType, get_package_json_dependency};
use coregen::registry::{Registry, RegistryPackage};
use coregen::template::BuiltinTemplates;
use coregen::tree::{ActionKind, HostTree, Tree};

struct StaticRegistry(HashMap<&'static str, &'static str>);

impl StaticRegistry {
    fn firebase() -> Self {
        Self(HashMap::from([
            ("firebase", "10.7.1"),
            ("@angular/fire", "17.0.0"),
        ]))
    }
}

impl Registry for StaticRegistry {
    async fn latest_version(&self, name: &str) -> Result<RegistryPackage> {
        self.0
            .get(name)
            .map(|version| RegistryPackage::new(name, *version))
            .ok_or_else(|| error::registry_lookup_failed(name, "HTTP 404 Not Found"))
    }
}

async fn generate(
    tree: &mut HostTree,
    registry: StaticRegistry,
    settings: GeneratorSettings,
    options: &GenerateOptions,
) -> Result<coregen::generator::Generation> {
    CoreGenerator::new(registry, &BuiltinTemplates, settings)
        .run(tree, options)
        .await
}

#[tokio::test]
async fn test_generate_on_disk() {
    let workspace = TestWorkspace::angular();
    let mut tree = HostTree::new(&workspace.path, false);

    let generation = generate(
        &mut tree,
        StaticRegistry::firebase(),
        GeneratorSettings::default(),
        &GenerateOptions::default(),
    )
    .await
    .unwrap();

    assert_eq!(generation.path, "src/app");
    let module = workspace.read_file("src/app/app.module.ts");
    assert!(module.starts_with("import { NgModule } from '@angular/core';"));
    assert!(module.contains("import { CoreModule } from './core/core.module';"));
    assert!(module.contains("import { AppRoutingModule } from './app-routing.module';"));
    assert!(module.contains("    BrowserModule,\n    CoreModule,\n    AppRoutingModule\n  ],"));
    assert!(module.contains("  declarations: [\n    AppComponent\n  ],"));

    assert!(workspace.file_exists("src/app/core/core.module.ts"));
    assert!(workspace.file_exists("src/app/core/module-import-guard.ts"));
    assert!(workspace.file_exists("src/app/core/shell/shell.component.ts"));
    assert!(workspace.file_exists("src/app/core/shell/shell.component.html"));

    let manifest = workspace.read_file("package.json");
    assert!(manifest.ends_with("}\n"));
    let deps: serde_json::Value = serde_json::from_str(&manifest).unwrap();
    assert_eq!(deps["dependencies"]["firebase"], "10.7.1");
    assert_eq!(deps["dependencies"]["@angular/fire"], "17.0.0");
    assert_eq!(deps["devDependencies"]["typescript"], "~5.2.2");
}

#[tokio::test]
async fn test_dry_run_writes_nothing() {
    let workspace = TestWorkspace::angular();
    let mut tree = HostTree::new(&workspace.path, true);

    generate(
        &mut tree,
        StaticRegistry::firebase(),
        GeneratorSettings::default(),
        &GenerateOptions::default(),
    )
    .await
    .unwrap();

    assert_eq!(workspace.read_file("src/app/app.module.ts"), APP_MODULE);
    assert_eq!(workspace.read_file("package.json"), PACKAGE_JSON);
    assert!(!workspace.file_exists("src/app/core"));

    let touched: Vec<(ActionKind, &str)> = tree
        .actions()
        .iter()
        .map(|a| (a.kind, a.path.as_str()))
        .collect();
    assert!(touched.contains(&(ActionKind::Update, "src/app/app.module.ts")));
    assert!(touched.contains(&(ActionKind::Overwrite, "package.json")));
    assert!(touched.contains(&(ActionKind::Create, "src/app/core/core.module.ts")));
}

#[tokio::test]
async fn test_failed_lookup_keeps_manifest() {
    let workspace = TestWorkspace::angular();
    let mut tree = HostTree::new(&workspace.path, false);
    let registry = StaticRegistry(HashMap::from([("firebase", "10.7.1")]));

    let err = generate(
        &mut tree,
        registry,
        GeneratorSettings::default(),
        &GenerateOptions::default(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, CoregenError::RegistryLookupFailed { ref package, .. } if package == "@angular/fire"));
    assert_eq!(workspace.read_file("package.json"), PACKAGE_JSON);
    assert!(!workspace.file_exists("src/app/core/core.module.ts"));
    assert!(
        workspace
            .read_file("src/app/app.module.ts")
            .contains("AppRoutingModule")
    );
}

#[tokio::test]
async fn test_dev_dependencies_setting() {
    let workspace = TestWorkspace::angular();
    let mut tree = HostTree::new(&workspace.path, false);
    let settings = GeneratorSettings {
        dependency_type: NodeDependencyType::Dev,
        ..GeneratorSettings::default()
    };

    generate(
        &mut tree,
        StaticRegistry::firebase(),
        settings,
        &GenerateOptions {
            skip_install: true,
            ..GenerateOptions::default()
        },
    )
    .await
    .unwrap();

    let firebase = get_package_json_dependency(&tree, "firebase")
        .unwrap()
        .unwrap();
    assert_eq!(firebase.kind, NodeDependencyType::Dev);
    assert_eq!(firebase.version, "10.7.1");
}

#[tokio::test]
async fn test_module_without_metadata_only_gets_imports() {
    let workspace = TestWorkspace::angular();
    workspace.write_file("src/app/app.module.ts", "export class AppModule {}\n");
    let mut tree = HostTree::new(&workspace.path, false);

    generate(
        &mut tree,
        StaticRegistry::firebase(),
        GeneratorSettings::default(),
        &GenerateOptions::default(),
    )
    .await
    .unwrap();

    assert_eq!(
        workspace.read_file("src/app/app.module.ts"),
        "import { CoreModule } from './core/core.module';\n\
         import { AppRoutingModule } from './app-routing.module';\n\
         export class AppModule {}\n"
    );
}

#[tokio::test]
async fn test_syntax_error_in_module() {
    let workspace = TestWorkspace::angular();
    workspace.write_file("src/app/app.module.ts", "@NgModule({ imports: [ })\n");
    let mut tree = HostTree::new(&workspace.path, false);

    let err = generate(
        &mut tree,
        StaticRegistry::firebase(),
        GeneratorSettings::default(),
        &GenerateOptions::default(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, CoregenError::SyntaxError { .. }));
    assert!(tree.actions().is_empty());
}
