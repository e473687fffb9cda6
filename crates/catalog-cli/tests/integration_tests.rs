//! Integration tests for the catalog CLI binary.
//!
//! These tests exercise the actual compiled binary using assert_cmd.

use assert_cmd::Command;
use catalog_test_utils::TestCatalog;
use predicates::prelude::*;

/// Get a Command for the catalog binary
fn catalog_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("catalog"));
    cmd.env_remove("REGISTRY_URL");
    cmd
}

#[test]
fn test_version_output() {
    catalog_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("catalog"));
}

#[test]
fn test_no_command_shows_help_hint() {
    catalog_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("catalog --help"));
}

#[test]
fn test_unknown_flag_fails() {
    catalog_cmd()
        .args(["build", "--no-such-flag"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--no-such-flag"));
}

#[test]
fn test_registry_url_env_rewrites_dependencies() {
    let catalog = TestCatalog::new();
    catalog.add_component("button", "registry:ui", &[]);
    catalog.add_component("login-form", "registry:block", &["button"]);

    catalog_cmd()
        .current_dir(catalog.root())
        .env("REGISTRY_URL", "https://cdn.example.com/")
        .arg("build")
        .assert()
        .success()
        .stdout(predicate::str::contains("Catalog written"));

    let doc = catalog.read_json("registry.json");
    assert_eq!(
        doc["items"][1]["registryDependencies"][0],
        "https://cdn.example.com/r/button.json"
    );
}

#[test]
fn test_config_file_name_and_homepage() {
    let catalog = TestCatalog::new();
    catalog.write_config("name = \"acme\"\nhomepage = \"https://acme.dev\"\n");
    catalog.add_component("button", "registry:ui", &[]);

    catalog_cmd()
        .current_dir(catalog.root())
        .arg("build")
        .assert()
        .success();

    let doc = catalog.read_json("registry.json");
    assert_eq!(doc["name"], "acme");
    assert_eq!(doc["homepage"], "https://acme.dev");
}

#[test]
fn test_invalid_config_is_reported() {
    let catalog = TestCatalog::new();
    catalog.write_config("unknown_key = 1\n");

    catalog_cmd()
        .current_dir(catalog.root())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("catalog.toml"));
}

#[test]
fn test_duplicate_names_fail_strict_build() {
    let catalog = TestCatalog::new();
    catalog.add_component("shared", "registry:ui", &[]);
    catalog.add_manifest(
        "blocks/shared",
        &TestCatalog::component_manifest("shared", "registry:ui", &[]),
    );

    catalog_cmd()
        .current_dir(catalog.root())
        .arg("build")
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate entry name 'shared'"));
    catalog.assert_file_missing("registry.json");
}
