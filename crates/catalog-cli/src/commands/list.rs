//! List command implementation

use std::path::Path;

use colored::Colorize;

use catalog_core::{BuildConfig, CatalogDocument};

use crate::error::{CliError, Result};

/// Run the list command
///
/// Reads the artifact named by `catalog.toml` (default `registry.json`).
pub fn run_list(root: &Path, kind: Option<&str>) -> Result<()> {
    let config = BuildConfig::load(root)?;
    let path = root.join(&config.output);
    if !path.is_file() {
        return Err(CliError::user(format!(
            "no catalog at {}; run 'catalog build' first",
            path.display()
        )));
    }

    let document = CatalogDocument::load(&path)?;
    let entries: Vec<_> = match kind {
        Some(kind) => document.by_kind(kind).collect(),
        None => document.items.iter().collect(),
    };

    println!(
        "{} {} ({})",
        document.name.bold(),
        document.homepage.dimmed(),
        path.display()
    );
    println!();

    if entries.is_empty() {
        println!("  {}", "No entries".dimmed());
        return Ok(());
    }

    let width = entries.iter().map(|e| e.name.len()).max().unwrap_or(0);
    for entry in &entries {
        println!(
            "  {:width$}  {}",
            entry.name.cyan(),
            entry.kind_label().dimmed(),
            width = width
        );
    }
    println!();
    println!("{} entries", entries.len());

    Ok(())
}
