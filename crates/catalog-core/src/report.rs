//! Build report types
//!
//! The report is what the operator sees after a build. It is never persisted
//! as part of the catalog artifact.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

use crate::issue::BuildIssue;
use crate::manifest::{CatalogEntry, KNOWN_KINDS};
use crate::resolver::DependencyEdge;

/// Entry counts for the built catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildStats {
    pub total: usize,
    /// Count per entry `type`, in lexicographic order.
    pub by_kind: BTreeMap<String, usize>,
}

impl BuildStats {
    pub fn from_entries(entries: &[CatalogEntry]) -> Self {
        let mut by_kind = BTreeMap::new();
        for entry in entries {
            *by_kind.entry(entry.kind.clone()).or_insert(0) += 1;
        }
        Self {
            total: entries.len(),
            by_kind,
        }
    }

    pub fn count(&self, kind: &str) -> usize {
        self.by_kind.get(kind).copied().unwrap_or(0)
    }

    /// Rows for display: known categories always (even at zero), then any
    /// other tag that occurred, by its literal name.
    pub fn display_rows(&self) -> Vec<(String, usize)> {
        let known = KNOWN_KINDS
            .iter()
            .map(|(tag, label)| (label.to_string(), self.count(tag)));
        let other = self
            .by_kind
            .iter()
            .filter(|(kind, _)| !KNOWN_KINDS.iter().any(|(tag, _)| *tag == kind.as_str()))
            .map(|(kind, n)| (kind.clone(), *n));
        known.chain(other).collect()
    }
}

/// Summary of one accepted entry, for per-entry report lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntrySummary {
    pub name: String,
    pub kind: String,
    /// Manifest location relative to the project root.
    pub manifest: String,
}

/// Terminal state of a build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum BuildOutcome {
    /// The artifact was written.
    Written { path: PathBuf, checksum: String },
    /// Check-only run with no blocking issues; nothing written.
    Checked,
    /// Blocking issues were found; nothing written.
    Aborted,
}

/// Everything a build found, plus what it did about it.
#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    /// Policy the issues were classified under.
    pub strict: bool,
    pub manifests_found: usize,
    pub entries: Vec<EntrySummary>,
    pub dependencies: Vec<DependencyEdge>,
    /// Blocking issues, in discovery order.
    pub errors: Vec<BuildIssue>,
    /// Non-blocking issues, in discovery order.
    pub warnings: Vec<BuildIssue>,
    pub stats: BuildStats,
    pub outcome: BuildOutcome,
}

impl BuildReport {
    pub fn new(strict: bool) -> Self {
        Self {
            strict,
            manifests_found: 0,
            entries: Vec::new(),
            dependencies: Vec::new(),
            errors: Vec::new(),
            warnings: Vec::new(),
            stats: BuildStats::default(),
            outcome: BuildOutcome::Aborted,
        }
    }

    /// File an issue under errors or warnings according to the policy.
    pub fn record(&mut self, issue: BuildIssue) {
        if issue.is_blocking(self.strict) {
            self.errors.push(issue);
        } else {
            self.warnings.push(issue);
        }
    }

    pub fn record_all(&mut self, issues: impl IntoIterator<Item = BuildIssue>) {
        for issue in issues {
            self.record(issue);
        }
    }

    pub fn has_blocking_issues(&self) -> bool {
        !self.errors.is_empty()
    }

    /// True unless the build aborted.
    pub fn is_success(&self) -> bool {
        !matches!(self.outcome, BuildOutcome::Aborted)
    }

    /// Unresolved dependency warnings only.
    pub fn unresolved_dependencies(&self) -> impl Iterator<Item = &BuildIssue> {
        self.warnings
            .iter()
            .filter(|i| matches!(i, BuildIssue::UnresolvedDependency { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn entry(name: &str, kind: &str) -> CatalogEntry {
        CatalogEntry::from_value(json!({
            "name": name,
            "type": kind,
            "files": [{ "path": "x", "type": kind }]
        }))
        .unwrap()
    }

    #[test]
    fn test_stats_group_by_kind() {
        let stats = BuildStats::from_entries(&[
            entry("a", "registry:ui"),
            entry("b", "registry:ui"),
            entry("c", "registry:hook"),
            entry("d", "registry:theme"),
        ]);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.count("registry:ui"), 2);
        assert_eq!(stats.count("registry:block"), 0);
        assert_eq!(
            stats.display_rows(),
            vec![
                ("UI Components".to_string(), 2),
                ("Blocks".to_string(), 0),
                ("Hooks".to_string(), 1),
                ("Libraries".to_string(), 0),
                ("registry:theme".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_record_respects_policy() {
        let missing = BuildIssue::FileNotFound {
            entry_name: "a".into(),
            file_path: "a.tsx".into(),
        };

        let mut strict = BuildReport::new(true);
        strict.record(missing.clone());
        assert_eq!(strict.errors.len(), 1);
        assert!(strict.has_blocking_issues());

        let mut lenient = BuildReport::new(false);
        lenient.record(missing);
        assert!(lenient.errors.is_empty());
        assert_eq!(lenient.warnings.len(), 1);
        assert!(!lenient.has_blocking_issues());
    }

    #[test]
    fn test_outcome_serializes_with_state_tag() {
        let value = serde_json::to_value(BuildOutcome::Checked).unwrap();
        assert_eq!(value, json!({ "state": "checked" }));
    }
}
