//! Build and check command implementations
//!
//! Both commands run the full pipeline; `check` stops before writing.

use std::path::Path;

use colored::Colorize;

use catalog_core::{BuildMode, BuildOutcome, BuildReport, CatalogBuilder};

use crate::error::{CliError, Result};

/// Flag overrides applied on top of `catalog.toml` and the environment.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    pub lenient: bool,
    pub output: Option<String>,
    pub jobs: Option<usize>,
    pub json: bool,
}

/// Open the project and apply CLI flags, which win over every other source.
pub fn open_builder(root: &Path, options: &BuildOptions) -> Result<CatalogBuilder> {
    let mut builder = CatalogBuilder::open(root)?;
    let config = builder.config_mut();
    if options.lenient {
        config.strict = false;
    }
    if let Some(output) = &options.output {
        config.output = output.clone();
    }
    if let Some(jobs) = options.jobs {
        config.jobs = jobs;
    }
    builder.config().validate()?;
    Ok(builder)
}

/// Run the build command
pub fn run_build(root: &Path, options: &BuildOptions) -> Result<()> {
    run_pipeline(root, options, BuildMode::Write)
}

/// Run the check command
pub fn run_check(root: &Path, options: &BuildOptions) -> Result<()> {
    run_pipeline(root, options, BuildMode::CheckOnly)
}

fn run_pipeline(root: &Path, options: &BuildOptions, mode: BuildMode) -> Result<()> {
    let builder = open_builder(root, options)?;
    if !options.json {
        let verb = match mode {
            BuildMode::Write => "Building",
            BuildMode::CheckOnly => "Checking",
        };
        println!(
            "{} {} catalog from {}...",
            "=>".blue().bold(),
            verb,
            builder.source_path().display()
        );
    }

    let report = builder.run(mode)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if report.is_success() {
        Ok(())
    } else {
        Err(CliError::BuildAborted {
            errors: report.errors.len(),
        })
    }
}

fn print_report(report: &BuildReport) {
    println!("Found {} manifest(s)", report.manifests_found);
    println!();

    for entry in &report.entries {
        println!("  {} {} ({})", "+".green(), entry.name.cyan(), entry.kind.dimmed());
        for edge in report.dependencies.iter().filter(|e| e.from == entry.name) {
            println!("     {} depends on {}", "->".dimmed(), edge.target);
        }
    }

    if !report.errors.is_empty() {
        eprintln!();
        eprintln!(
            "{} Found {} error(s):",
            "ERROR".red().bold(),
            report.errors.len()
        );
        for issue in &report.errors {
            eprintln!("   {} {}", "-".red(), issue);
        }
    }

    if !report.warnings.is_empty() {
        eprintln!();
        eprintln!(
            "{} {} warning(s):",
            "WARN".yellow().bold(),
            report.warnings.len()
        );
        for issue in &report.warnings {
            eprintln!("   {} {}", "-".yellow(), issue);
        }
    }

    println!();
    println!("{}:", "Statistics".bold());
    println!("   Total: {}", report.stats.total);
    for (label, count) in report.stats.display_rows() {
        println!("   {}: {}", label, count);
    }
    println!();

    match &report.outcome {
        BuildOutcome::Written { path, checksum } => {
            println!("{} Catalog written to {}", "OK".green().bold(), path.display());
            println!("   {}", checksum.dimmed());
        }
        BuildOutcome::Checked => {
            println!("{} Catalog is valid. Nothing written.", "OK".green().bold());
        }
        BuildOutcome::Aborted => {
            println!("{} Build aborted. Existing artifact left untouched.", "FAILED".red().bold());
        }
    }
}
