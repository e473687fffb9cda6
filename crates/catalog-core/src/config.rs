//! Build configuration from `catalog.toml`.
//!
//! Every field is optional in the file. Precedence, lowest first:
//! built-in defaults, `catalog.toml` at the project root, the `REGISTRY_URL`
//! environment variable (base URL only), then whatever the caller sets
//! afterwards (CLI flags).
//!
//! ```toml
//! name = "Uruhuu"
//! homepage = "https://uruhuu.vercel.app"
//! source_dir = "registry/new-york"
//! output = "registry.json"
//! strict = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::manifest::MANIFEST_FILENAME;

/// Config filename looked up at the project root.
pub const CONFIG_FILENAME: &str = "catalog.toml";

/// Environment variable overriding the dependency base URL.
pub const REGISTRY_URL_ENV: &str = "REGISTRY_URL";

/// Homepage baked in at compile time, overridable with `CATALOG_DEFAULT_HOMEPAGE`.
pub const DEFAULT_HOMEPAGE: &str = match option_env!("CATALOG_DEFAULT_HOMEPAGE") {
    Some(url) => url,
    None => "https://uruhuu.vercel.app",
};

pub const DEFAULT_CATALOG_NAME: &str = "Uruhuu";

/// Settings for one catalog build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Catalog name written to the document.
    pub name: String,
    /// Homepage written to the document; also the default base URL.
    pub homepage: String,
    /// Base URL used to rewrite bare registry dependencies.
    pub registry_url: Option<String>,
    /// Optional `extends` marker written to the document.
    pub extends: Option<String>,
    /// Directory scanned for manifests, relative to the project root.
    pub source_dir: String,
    /// Artifact path, relative to the project root.
    pub output: String,
    pub manifest_filename: String,
    /// Directory names skipped while scanning.
    pub ignore: Vec<String>,
    /// Treat missing files and duplicate names as blocking.
    pub strict: bool,
    /// Worker threads used to validate manifests.
    pub jobs: usize,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_CATALOG_NAME.to_string(),
            homepage: DEFAULT_HOMEPAGE.to_string(),
            registry_url: None,
            extends: None,
            source_dir: "registry/new-york".to_string(),
            output: "registry.json".to_string(),
            manifest_filename: MANIFEST_FILENAME.to_string(),
            ignore: vec!["node_modules".to_string()],
            strict: true,
            jobs: 1,
        }
    }
}

impl BuildConfig {
    /// Parse a config from TOML text.
    pub fn from_toml(content: &str, path: &Path) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load `catalog.toml` from the project root, or defaults when absent.
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = project_root.join(CONFIG_FILENAME);
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = catalog_fs::io::read_text(&path)?;
        Self::from_toml(&content, &path)
    }

    /// Apply `REGISTRY_URL` from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply environment-style overrides from an arbitrary lookup.
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(REGISTRY_URL_ENV).filter(|u| !u.trim().is_empty()) {
            tracing::debug!(url = %url, "registry URL overridden from environment");
            self.registry_url = Some(url);
        }
        self
    }

    /// Base URL for dependency rewriting, without trailing slashes.
    pub fn base_url(&self) -> &str {
        self.registry_url
            .as_deref()
            .unwrap_or(&self.homepage)
            .trim_end_matches('/')
    }

    /// Reject values the pipeline cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::ConfigInvalid {
                field: "name",
                reason: "catalog name must not be empty".to_string(),
            });
        }
        if !crate::resolver::is_absolute_url(self.base_url()) {
            return Err(Error::ConfigInvalid {
                field: "registry_url",
                reason: format!("'{}' is not an absolute URL", self.base_url()),
            });
        }
        if self.manifest_filename.is_empty() || self.manifest_filename.contains(['/', '\\']) {
            return Err(Error::ConfigInvalid {
                field: "manifest_filename",
                reason: format!("'{}' must be a bare file name", self.manifest_filename),
            });
        }
        if self.jobs == 0 {
            return Err(Error::ConfigInvalid {
                field: "jobs",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
