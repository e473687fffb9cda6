//! Golden-file tests using test-fixtures/
//!
//! The fixture project is copied into a temp dir, built there, and the
//! written catalog is compared byte-for-byte with `expected.json`.

use catalog_core::{BuildConfig, BuildOutcome, CatalogBuilder, CatalogDocument};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;
use walkdir::WalkDir;

/// Normalize line endings to LF for cross-platform comparison.
fn normalize_line_endings(s: &str) -> String {
    s.replace("\r\n", "\n")
}

fn fixtures_dir() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    // crates/catalog-core -> ../../test-fixtures
    manifest_dir.join("../../test-fixtures")
}

fn copy_tree(from: &Path, to: &Path) {
    for entry in WalkDir::new(from) {
        let entry = entry.unwrap();
        let rel = entry.path().strip_prefix(from).unwrap();
        let dest = to.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest).unwrap();
        } else {
            fs::copy(entry.path(), &dest).unwrap();
        }
    }
}

fn basic_project() -> (tempfile::TempDir, String) {
    let fixture = fixtures_dir().join("catalogs/basic");
    let temp = tempdir().unwrap();
    copy_tree(&fixture, temp.path());
    let expected = fs::read_to_string(fixture.join("expected.json")).unwrap_or_else(|e| {
        panic!("Failed to read expected output in {}: {}", fixture.display(), e)
    });
    (temp, normalize_line_endings(&expected))
}

#[test]
fn test_basic_fixture_matches_golden_output() {
    let (temp, expected) = basic_project();
    // Load only the file config so REGISTRY_URL in the environment cannot leak in.
    let config = BuildConfig::load(temp.path()).unwrap();
    let report = CatalogBuilder::new(temp.path(), config).build().unwrap();

    assert!(report.is_success(), "errors: {:?}", report.errors);
    assert!(report.warnings.is_empty(), "warnings: {:?}", report.warnings);
    assert_eq!(report.manifests_found, 3);

    let written = fs::read_to_string(temp.path().join("registry.json")).unwrap();
    assert_eq!(normalize_line_endings(&written), expected);

    match report.outcome {
        BuildOutcome::Written { checksum, .. } => {
            assert_eq!(checksum, catalog_fs::compute_bytes_checksum(written.as_bytes()));
        }
        other => panic!("expected a written catalog, got {:?}", other),
    }
}

#[test]
fn test_golden_output_parses_back() {
    let (_temp, expected) = basic_project();
    let doc = CatalogDocument::from_json(&expected).unwrap();

    assert_eq!(doc.len(), 3);
    assert_eq!(doc.by_kind("registry:hook").count(), 1);
    let hook = doc.get("use-toggle").unwrap();
    assert_eq!(hook.extensions["meta"]["tags"][0], "state");
    assert_eq!(doc.to_json().unwrap(), expected);
}

#[test]
fn test_fixture_report_lists_dependency_edges() {
    let (temp, _) = basic_project();
    let config = BuildConfig::load(temp.path()).unwrap();
    let report = CatalogBuilder::new(temp.path(), config).check().unwrap();

    assert_eq!(report.outcome, BuildOutcome::Checked);
    assert_eq!(report.dependencies.len(), 1);
    let edge = &report.dependencies[0];
    assert_eq!(edge.from, "login-form");
    assert_eq!(edge.target, "button");
    assert!(edge.resolved);
}
