//! Registry dependency resolution.
//!
//! Entries refer to each other through `registryDependencies`. A reference is
//! either a bare entry name (`"button"`) or an absolute URL pointing at some
//! catalog's item document. Bare names are rewritten to
//! `<base>/r/<name>.json` so that installers can fetch them directly; URLs are
//! left alone.
//!
//! After rewriting, every reference is reduced back to a bare name and checked
//! against the catalog. References that match nothing are reported as
//! warnings; they never remove the referring entry.
//!
//! # Example
//!
//! ```
//! use catalog_core::resolver::{Resolver, bare_name};
//!
//! let resolver = Resolver::new("https://ui.example.com/");
//! let url = resolver.rewrite("button");
//! assert_eq!(url, "https://ui.example.com/r/button.json");
//! assert_eq!(resolver.rewrite(&url), url);
//! assert_eq!(bare_name(&url), "button");
//! ```

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::issue::BuildIssue;
use crate::manifest::CatalogEntry;

/// Sub-path under the base URL where item documents are served.
pub const ITEM_SUBPATH: &str = "r";

static URL_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*://").unwrap());

/// Whether `reference` already carries a URL scheme.
pub fn is_absolute_url(reference: &str) -> bool {
    URL_SCHEME.is_match(reference)
}

/// Reduce a reference to the entry name it points at.
///
/// For URLs this is the last path segment without its `.json` suffix; query
/// strings and fragments are ignored. Bare names are returned unchanged.
pub fn bare_name(reference: &str) -> &str {
    if !is_absolute_url(reference) {
        return reference;
    }
    let without_query = reference
        .split(['?', '#'])
        .next()
        .unwrap_or(reference)
        .trim_end_matches('/');
    let segment = without_query.rsplit('/').next().unwrap_or(without_query);
    segment.strip_suffix(".json").unwrap_or(segment)
}

/// A resolved edge between two catalog entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyEdge {
    /// Referring entry.
    pub from: String,
    /// Reference as written to the catalog.
    pub reference: String,
    /// Entry name the reference points at.
    pub target: String,
    /// Whether `target` exists in the catalog.
    pub resolved: bool,
}

/// Rewrites and checks registry dependencies against a base URL.
#[derive(Debug, Clone)]
pub struct Resolver {
    base_url: String,
}

impl Resolver {
    /// Create a resolver. Trailing slashes on `base_url` are ignored.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Rewrite a single reference. Idempotent.
    pub fn rewrite(&self, reference: &str) -> String {
        if is_absolute_url(reference) {
            reference.to_string()
        } else {
            format!("{}/{}/{}.json", self.base_url, ITEM_SUBPATH, reference)
        }
    }

    /// Entry name a reference points at.
    ///
    /// URLs this resolver built map back to the exact name that was written
    /// into them, so names containing `?` or `#` still resolve. Anything else
    /// goes through [`bare_name`].
    pub fn target_name<'a>(&self, reference: &'a str) -> &'a str {
        reference
            .strip_prefix(self.base_url.as_str())
            .and_then(|rest| rest.strip_prefix('/'))
            .and_then(|rest| rest.strip_prefix(ITEM_SUBPATH))
            .and_then(|rest| rest.strip_prefix('/'))
            .and_then(|rest| rest.strip_suffix(".json"))
            .filter(|name| !name.is_empty() && !name.contains('/'))
            .unwrap_or_else(|| bare_name(reference))
    }

    /// Rewrite every entry's registry dependencies in place.
    pub fn rewrite_all(&self, entries: &mut [CatalogEntry]) {
        for entry in entries.iter_mut() {
            if let Some(deps) = entry.registry_dependencies.as_mut() {
                for dep in deps.iter_mut() {
                    *dep = self.rewrite(dep);
                }
            }
        }
    }

    /// List every dependency edge and whether it lands on a known entry.
    pub fn edges(&self, entries: &[CatalogEntry]) -> Vec<DependencyEdge> {
        let known: BTreeSet<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        entries
            .iter()
            .flat_map(|entry| {
                let known = &known;
                entry.registry_dependencies().iter().map(move |reference| {
                    let target = self.target_name(reference);
                    DependencyEdge {
                        from: entry.name.clone(),
                        reference: reference.clone(),
                        target: target.to_string(),
                        resolved: known.contains(target),
                    }
                })
            })
            .collect()
    }

    /// Warnings for every reference that does not match a catalog entry.
    pub fn check_closure(&self, entries: &[CatalogEntry]) -> Vec<BuildIssue> {
        self.edges(entries)
            .into_iter()
            .filter(|edge| !edge.resolved)
            .map(|edge| BuildIssue::UnresolvedDependency {
                from_entry: edge.from,
                target: edge.reference,
            })
            .collect()
    }
}
