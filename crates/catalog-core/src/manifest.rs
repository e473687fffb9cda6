//! Catalog entry manifests (`index.json`).
//!
//! Each catalog entry is described by one manifest file. The fields the
//! pipeline works with are typed; everything else a manifest carries
//! (`$schema`, `tailwind`, `cssVars`, `css`, `docs`, `meta`, ...) is kept in
//! an open map and written back out unchanged.
//!
//! # Example
//!
//! ```json
//! {
//!   "name": "login-form",
//!   "type": "registry:block",
//!   "title": "Login Form",
//!   "dependencies": ["@base-ui-components/react"],
//!   "registryDependencies": ["button", "input"],
//!   "files": [
//!     {
//!       "path": "registry/new-york/blocks/login-form/login-form.tsx",
//!       "type": "registry:component",
//!       "target": "components/login-form.tsx"
//!     }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Conventional manifest filename.
pub const MANIFEST_FILENAME: &str = "index.json";

/// Entry categories with a display label, in report order.
pub const KNOWN_KINDS: &[(&str, &str)] = &[
    ("registry:ui", "UI Components"),
    ("registry:block", "Blocks"),
    ("registry:hook", "Hooks"),
    ("registry:lib", "Libraries"),
];

/// Human-readable label for an entry type, if it is one of [`KNOWN_KINDS`].
pub fn kind_label(kind: &str) -> Option<&'static str> {
    KNOWN_KINDS
        .iter()
        .find(|(tag, _)| *tag == kind)
        .map(|(_, label)| *label)
}

/// One physical file belonging to a catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestFile {
    /// Repo-relative path of the source file.
    pub path: String,

    /// File role tag (e.g. `registry:ui`, `registry:component`).
    #[serde(rename = "type")]
    pub kind: String,

    /// Path the file is renamed to on install.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    /// Inline file content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One catalog item parsed from a manifest.
///
/// Optional lists stay `None` when the manifest omits them so that the
/// serialized entry has the same shape as its manifest. An explicit `null`
/// on a known optional field is read as absent and not written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Unique key of the entry.
    pub name: String,

    /// Category tag (e.g. `registry:ui`).
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// External package names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_dependencies: Option<Vec<String>>,

    /// References to other entries, by bare name or absolute URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry_dependencies: Option<Vec<String>>,

    pub files: Vec<ManifestFile>,

    /// Fields the pipeline does not interpret, preserved verbatim.
    #[serde(flatten)]
    pub extensions: Map<String, Value>,
}

impl CatalogEntry {
    /// Convert an already-parsed manifest document into an entry.
    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }

    /// Registry dependency references, empty when none are declared.
    pub fn registry_dependencies(&self) -> &[String] {
        self.registry_dependencies.as_deref().unwrap_or_default()
    }

    /// Display label for this entry's category.
    pub fn kind_label(&self) -> &str {
        kind_label(&self.kind).unwrap_or(self.kind.as_str())
    }
}
