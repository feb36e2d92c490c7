//! CLI integration tests using the REAL coregen binary

mod common;

use assert_cmd::Command;
use common::{APP_MODULE, PACKAGE_JSON, TestWorkspace};
use predicates::prelude::*;

// Nothing listens on the discard port, so registry lookups fail fast.
const UNREACHABLE_REGISTRY: &str = "http://127.0.0.1:9";

#[allow(deprecated)]
fn coregen_cmd() -> Command {
    let mut cmd = Command::cargo_bin("coregen").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("COREGEN_REGISTRY")
        .env_remove("COREGEN_WORKSPACE");
    cmd
}

#[test]
fn test_help_output() {
    coregen_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Angular"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_generate_help_lists_flags() {
    coregen_cmd()
        .args(["generate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--skip-install"))
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("--registry"));
}

#[test]
fn test_version_output() {
    coregen_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("coregen"))
        .stdout(predicate::str::contains("Build info"));
}

#[test]
fn test_completions_output() {
    coregen_cmd()
        .args(["completions", "--shell", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("coregen"));
}

#[test]
fn test_completions_unknown_shell() {
    coregen_cmd()
        .args(["completions", "--shell", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown shell"));
}

#[test]
fn test_generate_without_workspace_descriptor() {
    let workspace = TestWorkspace::new();
    coregen_cmd()
        .arg("-w")
        .arg(&workspace.path)
        .args(["generate", "--skip-install", "--registry", UNREACHABLE_REGISTRY])
        .assert()
        .failure()
        .stderr(predicate::str::contains("angular.json not found"));
}

#[test]
fn test_generate_registry_failure_keeps_patched_module() {
    let workspace = TestWorkspace::angular();
    coregen_cmd()
        .arg("-w")
        .arg(&workspace.path)
        .args(["generate", "--skip-install", "--registry", UNREACHABLE_REGISTRY])
        .assert()
        .failure()
        .stdout(predicate::str::contains("UPDATE src/app/app.module.ts"))
        .stderr(predicate::str::contains("Registry lookup failed"));

    let module = workspace.read_file("src/app/app.module.ts");
    assert!(module.contains("import { CoreModule } from './core/core.module';"));
    assert_eq!(workspace.read_file("package.json"), PACKAGE_JSON);
    assert!(!workspace.file_exists("src/app/core/core.module.ts"));
}

#[test]
fn test_generate_dry_run_touches_nothing() {
    let workspace = TestWorkspace::angular();
    coregen_cmd()
        .arg("-w")
        .arg(&workspace.path)
        .args(["generate", "--dry-run", "--registry", UNREACHABLE_REGISTRY])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Dry run"));

    assert_eq!(workspace.read_file("src/app/app.module.ts"), APP_MODULE);
}

#[test]
fn test_registry_from_environment() {
    let workspace = TestWorkspace::angular();
    coregen_cmd()
        .arg("-w")
        .arg(&workspace.path)
        .env("COREGEN_REGISTRY", "not-a-url")
        .args(["generate", "--skip-install"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("registry must be an http(s) URL"));

    assert_eq!(workspace.read_file("src/app/app.module.ts"), APP_MODULE);
}

#[test]
fn test_invalid_config_file() {
    let workspace = TestWorkspace::angular();
    workspace.write_file("coregen.yaml", "dependencies: []\n");
    coregen_cmd()
        .arg("-w")
        .arg(&workspace.path)
        .args(["generate", "--skip-install"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("dependencies must not be empty"));
}
