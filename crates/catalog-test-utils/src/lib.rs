//! Shared test utilities for the catalog workspace.
//!
//! [`TestCatalog`] lays out a throwaway project with manifests under
//! `registry/new-york/` and the component source files they reference.
//! Dev-dependency only, never published.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

/// Default manifest directory, relative to the project root.
pub const SOURCE_DIR: &str = "registry/new-york";

/// A temporary catalog project.
///
/// # Example
///
/// ```rust,no_run
/// use catalog_test_utils::TestCatalog;
///
/// let catalog = TestCatalog::new();
/// catalog.add_component("button", "registry:ui", &[]);
/// catalog.add_component("login-form", "registry:block", &["button"]);
/// catalog.assert_file_exists("registry/new-york/ui/button/button.tsx");
/// ```
pub struct TestCatalog {
    temp_dir: TempDir,
}

impl Default for TestCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCatalog {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of a project-relative path.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Write a file, creating parent directories.
    pub fn write(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Write `catalog.toml` at the project root.
    pub fn write_config(&self, toml: &str) {
        self.write("catalog.toml", toml);
    }

    /// Write raw manifest text to `<SOURCE_DIR>/<dir>/index.json`.
    pub fn add_raw_manifest(&self, dir: &str, content: &str) -> PathBuf {
        self.write(&format!("{}/{}/index.json", SOURCE_DIR, dir), content)
    }

    /// Write a manifest document to `<SOURCE_DIR>/<dir>/index.json`.
    pub fn add_manifest(&self, dir: &str, manifest: &Value) -> PathBuf {
        let text = serde_json::to_string_pretty(manifest).unwrap();
        self.add_raw_manifest(dir, &text)
    }

    /// Manifest for a component with one source file, without creating the file.
    pub fn component_manifest(name: &str, kind: &str, registry_deps: &[&str]) -> Value {
        let mut manifest = json!({
            "name": name,
            "type": kind,
            "files": [{ "path": Self::component_file(name, kind), "type": kind }]
        });
        if !registry_deps.is_empty() {
            manifest["registryDependencies"] = json!(registry_deps);
        }
        manifest
    }

    /// Repo-relative source path used for a component's single file.
    pub fn component_file(name: &str, kind: &str) -> String {
        format!("{}/{}/{}/{}.tsx", SOURCE_DIR, Self::kind_dir(kind), name, name)
    }

    fn kind_dir(kind: &str) -> &str {
        kind.strip_prefix("registry:").unwrap_or(kind)
    }

    /// Add a valid component: manifest plus its source file.
    pub fn add_component(&self, name: &str, kind: &str, registry_deps: &[&str]) -> PathBuf {
        self.write(
            &Self::component_file(name, kind),
            &format!("export function {}() {{}}\n", name.replace('-', "_")),
        );
        self.add_manifest(
            &format!("{}/{}", Self::kind_dir(kind), name),
            &Self::component_manifest(name, kind, registry_deps),
        )
    }

    /// Add a component manifest whose source file does not exist.
    pub fn add_component_without_file(&self, name: &str, kind: &str) -> PathBuf {
        self.add_manifest(
            &format!("{}/{}", Self::kind_dir(kind), name),
            &Self::component_manifest(name, kind, &[]),
        )
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel)).unwrap()
    }

    /// Parse a JSON file under the project.
    pub fn read_json(&self, rel: &str) -> Value {
        serde_json::from_str(&self.read(rel)).unwrap()
    }

    pub fn assert_file_exists(&self, rel: &str) {
        assert!(self.path(rel).exists(), "expected {} to exist", rel);
    }

    pub fn assert_file_missing(&self, rel: &str) {
        assert!(!self.path(rel).exists(), "expected {} to be absent", rel);
    }
}
