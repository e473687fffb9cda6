//! Fatal errors for the catalog pipeline.
//!
//! Problems with individual manifests are not errors in this sense; they are
//! collected as [`BuildIssue`](crate::issue::BuildIssue)s in the build report.
//! An [`Error`] means the pipeline could not continue at all.

use std::path::PathBuf;

/// Errors that stop a build immediately.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The manifest root does not exist or is not a directory.
    #[error("manifest root not found: {0}")]
    RootNotFound(PathBuf),

    /// Filesystem failure while reading config or writing the artifact.
    #[error(transparent)]
    Fs(#[from] catalog_fs::Error),

    /// Failed to parse `catalog.toml`.
    #[error("failed to parse config at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Config parsed but holds an unusable value.
    #[error("invalid config value for '{field}': {reason}")]
    ConfigInvalid { field: &'static str, reason: String },

    /// Failed to serialize or parse a catalog document.
    #[error("catalog document error: {0}")]
    Document(#[from] serde_json::Error),

    /// I/O error outside of the artifact write path.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
