//! Component catalog builder.
//!
//! Turns a tree of per-component manifests into one sorted catalog document:
//!
//! ```text
//! Scanner -> Validator -> Resolver -> Aggregator
//!    |           |            |            |
//! index.json  BuildIssue  registry URLs  registry.json
//! ```
//!
//! Each stage is a plain type that can be used on its own; [`CatalogBuilder`]
//! wires them together and produces a [`BuildReport`].

pub mod aggregator;
pub mod config;
pub mod document;
pub mod error;
pub mod issue;
pub mod manifest;
pub mod pipeline;
pub mod report;
pub mod resolver;
pub mod scanner;
pub mod validator;

pub use aggregator::Aggregator;
pub use config::{BuildConfig, CONFIG_FILENAME, REGISTRY_URL_ENV};
pub use document::{CATALOG_SCHEMA, CatalogDocument};
pub use error::{Error, Result};
pub use issue::{BuildIssue, RequiredField};
pub use manifest::{CatalogEntry, MANIFEST_FILENAME, ManifestFile};
pub use pipeline::{BuildMode, CatalogBuilder};
pub use report::{BuildOutcome, BuildReport, BuildStats};
pub use resolver::Resolver;
pub use scanner::Scanner;
pub use validator::{ManifestOutcome, Validator};
