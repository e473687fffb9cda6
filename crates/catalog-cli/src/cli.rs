//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Catalog - build a component catalog from per-component manifests
#[derive(Parser, Debug)]
#[command(name = "catalog")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Options shared by `build` and `check`.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct PipelineArgs {
    /// Project root containing catalog.toml and the manifest tree
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Downgrade missing files and duplicate names to warnings
    #[arg(long)]
    pub lenient: bool,

    /// Output the build report as JSON for CI/CD integration
    #[arg(long)]
    pub json: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Build the catalog and write the artifact
    ///
    /// Examples:
    ///   catalog build                      # Build in the current directory
    ///   catalog build --lenient            # Keep entries with missing files
    ///   catalog build --output public/r/registry.json
    Build {
        #[command(flatten)]
        pipeline: PipelineArgs,

        /// Artifact path, relative to the project root
        #[arg(short, long)]
        output: Option<String>,

        /// Number of threads used to validate manifests
        #[arg(short, long)]
        jobs: Option<usize>,
    },

    /// Run every check without writing the artifact
    Check {
        #[command(flatten)]
        pipeline: PipelineArgs,
    },

    /// List the entries of a built catalog
    List {
        /// Project root containing the artifact
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Only show entries of this type (e.g. registry:ui)
        #[arg(short, long)]
        kind: Option<String>,
    },
}
