//! The catalog document written by a build.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::manifest::CatalogEntry;

/// Schema identifier written at the top of every catalog document.
pub const CATALOG_SCHEMA: &str = "https://ui.shadcn.com/schema/registry.json";

/// Aggregated catalog: every valid entry, sorted by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub name: String,
    pub homepage: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
    pub items: Vec<CatalogEntry>,
}

impl CatalogDocument {
    /// Parse a previously written document.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read a previously written document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = catalog_fs::io::read_text(path)?;
        Self::from_json(&content)
    }

    /// Render as pretty JSON (2-space indent) with a trailing newline.
    pub fn to_json(&self) -> Result<String> {
        let mut out = serde_json::to_string_pretty(self)?;
        out.push('\n');
        Ok(out)
    }

    /// Look up an entry by name.
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.items.iter().find(|e| e.name == name)
    }

    /// Entries of one category, in catalog order.
    pub fn by_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a CatalogEntry> + 'a {
        self.items.iter().filter(move |e| e.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
