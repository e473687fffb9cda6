//! Manifest discovery.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::config::BuildConfig;
use crate::error::{Error, Result};
use crate::manifest::MANIFEST_FILENAME;

/// Finds manifest files at any depth under a root directory.
#[derive(Debug, Clone)]
pub struct Scanner {
    filename: String,
    ignored_dirs: Vec<String>,
}

impl Default for Scanner {
    fn default() -> Self {
        Self {
            filename: MANIFEST_FILENAME.to_string(),
            ignored_dirs: vec!["node_modules".to_string()],
        }
    }
}

impl Scanner {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            ..Self::default()
        }
    }

    pub fn from_config(config: &BuildConfig) -> Self {
        Self {
            filename: config.manifest_filename.clone(),
            ignored_dirs: config.ignore.clone(),
        }
    }

    /// Replace the set of directory names that are never descended into.
    pub fn with_ignored_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }

    fn is_ignored(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0
            && entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| self.ignored_dirs.iter().any(|d| d == name))
    }

    /// Absolute paths of all manifests under `root`, sorted.
    ///
    /// Unreadable sub-directories are skipped with a warning. Fails only when
    /// `root` itself is missing or not a directory.
    pub fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.is_dir() {
            return Err(Error::RootNotFound(root.to_path_buf()));
        }
        let root = std::path::absolute(root)?;

        let mut found = Vec::new();
        let walker = WalkDir::new(&root)
            .into_iter()
            .filter_entry(|e| !self.is_ignored(e));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable path during scan");
                    continue;
                }
            };
            if entry.file_name() == self.filename.as_str() && is_regular_file(&entry) {
                found.push(entry.into_path());
            }
        }

        found.sort();
        tracing::debug!(root = %root.display(), count = found.len(), "manifest scan complete");
        Ok(found)
    }
}

/// Files and symlinks to files. Links are not followed while walking, so
/// directory links cannot cause cycles.
fn is_regular_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}
