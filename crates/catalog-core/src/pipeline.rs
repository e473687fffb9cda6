//! Build orchestration: scan, validate, resolve, aggregate.
//!
//! ```text
//! Scanning -> Validating -> Resolving -> Aggregating -> Written
//!                                             \-> Aborted
//! ```
//!
//! Every manifest is processed before the abort decision is made, so a
//! failing build lists all of its problems. Fatal I/O problems (missing
//! manifest root, artifact write failure) return `Err` straight away.

use std::path::{Path, PathBuf};

use crate::aggregator::{Aggregator, find_duplicate_names};
use crate::config::BuildConfig;
use crate::error::Result;
use crate::report::{BuildOutcome, BuildReport, BuildStats, EntrySummary};
use crate::resolver::Resolver;
use crate::scanner::Scanner;
use crate::validator::{ManifestOutcome, Validator};

/// Whether a run may write the artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    Write,
    CheckOnly,
}

/// Runs the catalog pipeline for one project.
#[derive(Debug, Clone)]
pub struct CatalogBuilder {
    root: PathBuf,
    config: BuildConfig,
}

impl CatalogBuilder {
    pub fn new(root: impl Into<PathBuf>, config: BuildConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// Load `catalog.toml` and environment overrides for `root`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let config = BuildConfig::load(&root)?.with_env_overrides();
        config.validate()?;
        Ok(Self::new(root, config))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut BuildConfig {
        &mut self.config
    }

    pub fn source_path(&self) -> PathBuf {
        self.root.join(&self.config.source_dir)
    }

    /// Build and write the catalog.
    pub fn build(&self) -> Result<BuildReport> {
        self.run(BuildMode::Write)
    }

    /// Run every check without writing anything.
    pub fn check(&self) -> Result<BuildReport> {
        self.run(BuildMode::CheckOnly)
    }

    pub fn run(&self, mode: BuildMode) -> Result<BuildReport> {
        let config = &self.config;
        let mut report = BuildReport::new(config.strict);

        let root = std::path::absolute(&self.root)?;
        let manifests = Scanner::from_config(config).scan(&root.join(&config.source_dir))?;
        report.manifests_found = manifests.len();
        tracing::info!(count = manifests.len(), "found manifests");

        let validator = Validator::new(&root);
        let mut accepted = Vec::new();
        for outcome in validator.validate_all(&manifests, config.jobs) {
            match outcome {
                ManifestOutcome::Accepted(mut manifest) => {
                    report.record_all(std::mem::take(&mut manifest.missing_files));
                    report.entries.push(EntrySummary {
                        name: manifest.entry.name.clone(),
                        kind: manifest.entry.kind.clone(),
                        manifest: manifest.source.clone(),
                    });
                    accepted.push(manifest);
                }
                ManifestOutcome::Rejected(issue) => {
                    tracing::debug!(issue = %issue, "manifest rejected");
                    report.record(issue);
                }
            }
        }
        report.record_all(find_duplicate_names(&accepted));

        let mut entries: Vec<_> = accepted.into_iter().map(|m| m.entry).collect();
        let resolver = Resolver::new(config.base_url());
        resolver.rewrite_all(&mut entries);
        report.dependencies = resolver.edges(&entries);
        report.record_all(resolver.check_closure(&entries));
        report.stats = BuildStats::from_entries(&entries);

        if report.has_blocking_issues() {
            tracing::info!(errors = report.errors.len(), "build aborted");
            report.outcome = BuildOutcome::Aborted;
            return Ok(report);
        }

        report.outcome = match mode {
            BuildMode::CheckOnly => BuildOutcome::Checked,
            BuildMode::Write => {
                let aggregator = Aggregator::from_config(config);
                let document = aggregator.assemble(entries);
                let path = root.join(&config.output);
                let checksum = aggregator.write(&document, &path)?;
                BuildOutcome::Written { path, checksum }
            }
        };
        Ok(report)
    }
}
