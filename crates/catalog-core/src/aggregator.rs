//! Aggregation of validated entries into the catalog artifact.

use std::collections::BTreeMap;
use std::path::Path;

use crate::config::BuildConfig;
use crate::document::{CATALOG_SCHEMA, CatalogDocument};
use crate::error::Result;
use crate::issue::BuildIssue;
use crate::manifest::CatalogEntry;
use crate::validator::AcceptedManifest;

/// Assembles and writes the catalog document.
#[derive(Debug, Clone)]
pub struct Aggregator {
    name: String,
    homepage: String,
    extends: Option<String>,
}

impl Aggregator {
    pub fn new(name: impl Into<String>, homepage: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            homepage: homepage.into(),
            extends: None,
        }
    }

    pub fn from_config(config: &BuildConfig) -> Self {
        Self {
            name: config.name.clone(),
            homepage: config.homepage.clone(),
            extends: config.extends.clone(),
        }
    }

    pub fn with_extends(mut self, extends: impl Into<String>) -> Self {
        self.extends = Some(extends.into());
        self
    }

    /// Sort entries by name (byte-wise, stable) and wrap them in a document.
    pub fn assemble(&self, mut entries: Vec<CatalogEntry>) -> CatalogDocument {
        entries.sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()));
        CatalogDocument {
            schema: CATALOG_SCHEMA.to_string(),
            name: self.name.clone(),
            homepage: self.homepage.clone(),
            extends: self.extends.clone(),
            items: entries,
        }
    }

    /// Write `document` atomically and return the checksum of its bytes.
    pub fn write(&self, document: &CatalogDocument, path: &Path) -> Result<String> {
        let rendered = document.to_json()?;
        catalog_fs::io::write_atomic(path, rendered.as_bytes())?;
        let checksum = catalog_fs::compute_bytes_checksum(rendered.as_bytes());
        tracing::info!(
            path = %path.display(),
            items = document.len(),
            checksum = %checksum,
            "catalog written"
        );
        Ok(checksum)
    }
}

/// One `DuplicateName` issue per name declared by more than one manifest.
///
/// Names are reported in lexicographic order; manifests in the order given.
pub fn find_duplicate_names(manifests: &[AcceptedManifest]) -> Vec<BuildIssue> {
    let mut by_name: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for manifest in manifests {
        by_name
            .entry(manifest.entry.name.as_str())
            .or_default()
            .push(manifest.source.as_str());
    }
    by_name
        .into_iter()
        .filter(|(_, sources)| sources.len() > 1)
        .map(|(name, sources)| BuildIssue::DuplicateName {
            name: name.to_string(),
            manifests: sources.into_iter().map(str::to_string).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn entry(name: &str) -> CatalogEntry {
        CatalogEntry::from_value(json!({
            "name": name,
            "type": "registry:ui",
            "files": [{ "path": format!("{name}.tsx"), "type": "registry:ui" }]
        }))
        .unwrap()
    }

    fn accepted(name: &str, source: &str) -> AcceptedManifest {
        AcceptedManifest {
            source: source.to_string(),
            entry: entry(name),
            missing_files: Vec::new(),
        }
    }

    fn names(doc: &CatalogDocument) -> Vec<&str> {
        doc.items.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_assemble_sorts_bytewise() {
        let aggregator = Aggregator::new("uruhuu", "https://uruhuu.vercel.app");
        let doc = aggregator.assemble(vec![
            entry("tabs"),
            entry("Accordion"),
            entry("alert-dialog"),
            entry("alert"),
        ]);
        // Uppercase sorts before lowercase in byte order.
        assert_eq!(names(&doc), vec!["Accordion", "alert", "alert-dialog", "tabs"]);
        assert_eq!(doc.schema, CATALOG_SCHEMA);
    }

    #[test]
    fn test_assemble_is_stable_for_equal_names() {
        let aggregator = Aggregator::new("c", "https://example.com");
        let mut first = entry("shared");
        first.title = Some("first".into());
        let mut second = entry("shared");
        second.title = Some("second".into());

        let doc = aggregator.assemble(vec![first, entry("a"), second]);

        let titles: Vec<_> = doc.items.iter().map(|e| e.title.as_deref()).collect();
        assert_eq!(titles, vec![None, Some("first"), Some("second")]);
    }

    #[test]
    fn test_extends_marker() {
        let doc = Aggregator::new("c", "https://example.com")
            .with_extends("none")
            .assemble(vec![entry("a")]);
        assert_eq!(doc.extends.as_deref(), Some("none"));
        assert!(doc.to_json().unwrap().contains("\"extends\": \"none\""));
    }

    #[test]
    fn test_write_returns_checksum_of_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("registry.json");
        let aggregator = Aggregator::new("c", "https://example.com");
        let doc = aggregator.assemble(vec![entry("b"), entry("a")]);

        let checksum = aggregator.write(&doc, &path).unwrap();

        assert_eq!(catalog_fs::compute_file_checksum(&path).unwrap(), checksum);
        let reloaded = CatalogDocument::load(&path).unwrap();
        assert_eq!(reloaded, doc);
    }

    #[test]
    fn test_find_duplicate_names() {
        let issues = find_duplicate_names(&[
            accepted("shared", "b/index.json"),
            accepted("solo", "c/index.json"),
            accepted("shared", "a/index.json"),
        ]);
        assert_eq!(
            issues,
            vec![BuildIssue::DuplicateName {
                name: "shared".into(),
                manifests: vec!["b/index.json".into(), "a/index.json".into()],
            }]
        );
    }
}
