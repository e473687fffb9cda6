//! Forward-slash paths for manifest file references
//!
//! Manifests reference their files with repo-relative paths such as
//! `registry/new-york/ui/button/index.tsx`. Authors on Windows sometimes
//! write backslashes or a leading `./`; both are normalized away so that the
//! same reference always resolves, and always prints, the same way.

use std::path::{Path, PathBuf};

/// A path normalized to forward slashes with no leading `./` segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedPath {
    inner: String,
}

impl NormalizedPath {
    /// Create a normalized path from any path-like input.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let raw = path.as_ref().to_string_lossy().replace('\\', "/");
        let mut rest = raw.as_str();
        while let Some(stripped) = rest.strip_prefix("./") {
            rest = stripped;
        }
        Self {
            inner: rest.to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Resolve a repo-relative reference against a project root.
    ///
    /// References with a leading `/` are still treated as relative to the
    /// root; manifests never point outside the project.
    pub fn resolve_under(&self, root: &Path) -> PathBuf {
        root.join(self.inner.trim_start_matches('/'))
    }

    /// Express `path` relative to `root` when it lies under it.
    ///
    /// Falls back to the full path otherwise. Used to keep report lines short.
    pub fn relative_to(path: &Path, root: &Path) -> Self {
        match path.strip_prefix(root) {
            Ok(rel) => Self::new(rel),
            Err(_) => Self::new(path),
        }
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.inner)
    }
}
