//! Per-manifest validation.
//!
//! Checks run in a fixed order and the first structural failure rejects the
//! manifest:
//!
//! 1. the file parses as a JSON object
//! 2. `name` is present and non-empty
//! 3. `type` is present and non-empty
//! 4. `files` is present and non-empty
//!
//! A manifest that passes is converted into a [`CatalogEntry`] and every
//! declared file is checked on disk. Missing files do not reject the entry;
//! all of them are collected so one run reports every problem.

use std::path::{Path, PathBuf};

use catalog_fs::NormalizedPath;
use serde_json::{Map, Value};

use crate::issue::{BuildIssue, RequiredField};
use crate::manifest::CatalogEntry;

/// A manifest that passed the structural checks.
#[derive(Debug, Clone)]
pub struct AcceptedManifest {
    /// Manifest location relative to the project root.
    pub source: String,
    pub entry: CatalogEntry,
    /// `FileNotFound` issues for this entry, in declaration order.
    pub missing_files: Vec<BuildIssue>,
}

/// Result of validating one manifest.
#[derive(Debug, Clone)]
pub enum ManifestOutcome {
    Accepted(AcceptedManifest),
    Rejected(BuildIssue),
}

/// Validates manifests against a project root.
#[derive(Debug, Clone)]
pub struct Validator {
    project_root: PathBuf,
}

impl Validator {
    /// `project_root` is what `files[].path` entries are relative to.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
        }
    }

    fn display_path(&self, manifest_path: &Path) -> String {
        NormalizedPath::relative_to(manifest_path, &self.project_root).to_string()
    }

    /// Read and validate one manifest file.
    pub fn validate_file(&self, manifest_path: &Path) -> ManifestOutcome {
        match catalog_fs::io::read_text(manifest_path) {
            Ok(content) => self.validate_str(manifest_path, &content),
            Err(e) => ManifestOutcome::Rejected(BuildIssue::MalformedManifest {
                path: self.display_path(manifest_path),
                cause: e.to_string(),
            }),
        }
    }

    /// Validate manifest text that was read from `manifest_path`.
    pub fn validate_str(&self, manifest_path: &Path, content: &str) -> ManifestOutcome {
        let path = self.display_path(manifest_path);
        let malformed = |cause: String| {
            ManifestOutcome::Rejected(BuildIssue::MalformedManifest {
                path: path.clone(),
                cause,
            })
        };

        let value: Value = match serde_json::from_str(content) {
            Ok(value) => value,
            Err(e) => return malformed(e.to_string()),
        };
        let Some(object) = value.as_object() else {
            return malformed("manifest must be a JSON object".to_string());
        };

        for field in [RequiredField::Name, RequiredField::Type, RequiredField::Files] {
            if is_missing(object, field) {
                return ManifestOutcome::Rejected(BuildIssue::MissingField {
                    path: path.clone(),
                    field,
                });
            }
        }

        let entry = match CatalogEntry::from_value(value) {
            Ok(entry) => entry,
            Err(e) => return malformed(e.to_string()),
        };
        let missing_files = self.check_files(&entry);

        tracing::debug!(
            manifest = %path,
            entry = %entry.name,
            missing = missing_files.len(),
            "manifest accepted"
        );
        ManifestOutcome::Accepted(AcceptedManifest {
            source: path,
            entry,
            missing_files,
        })
    }

    /// `FileNotFound` for every declared file absent from the project.
    pub fn check_files(&self, entry: &CatalogEntry) -> Vec<BuildIssue> {
        entry
            .files
            .iter()
            .filter(|file| {
                !NormalizedPath::new(&file.path)
                    .resolve_under(&self.project_root)
                    .is_file()
            })
            .map(|file| BuildIssue::FileNotFound {
                entry_name: entry.name.clone(),
                file_path: file.path.clone(),
            })
            .collect()
    }

    /// Validate many manifests, optionally across `jobs` threads.
    ///
    /// Outcomes come back in the same order as `paths` regardless of `jobs`.
    pub fn validate_all(&self, paths: &[PathBuf], jobs: usize) -> Vec<ManifestOutcome> {
        let jobs = jobs.clamp(1, paths.len().max(1));
        if jobs == 1 {
            return paths.iter().map(|p| self.validate_file(p)).collect();
        }

        let chunk_size = paths.len().div_ceil(jobs);
        std::thread::scope(|s| {
            let handles: Vec<_> = paths
                .chunks(chunk_size)
                .map(|chunk| {
                    s.spawn(move || {
                        chunk
                            .iter()
                            .map(|p| self.validate_file(p))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            handles
                .into_iter()
                .flat_map(|handle| match handle.join() {
                    Ok(outcomes) => outcomes,
                    Err(panic) => std::panic::resume_unwind(panic),
                })
                .collect()
        })
    }
}

fn is_missing(object: &Map<String, Value>, field: RequiredField) -> bool {
    match object.get(field.key()) {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(_) => false,
    }
}
