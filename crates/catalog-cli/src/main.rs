//! Catalog CLI
//!
//! Builds, checks and lists a component catalog.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands, PipelineArgs};
use commands::BuildOptions;
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // stdout carries the report; logs go to stderr.
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| CliError::user(format!("failed to set tracing subscriber: {}", e)))?;
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} component catalog builder", "catalog".green().bold());
            println!();
            println!("Run {} for available commands.", "catalog --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Build {
            pipeline,
            output,
            jobs,
        } => {
            let options = BuildOptions {
                output,
                jobs,
                ..options_from(&pipeline)
            };
            commands::run_build(&pipeline.root, &options)
        }
        Commands::Check { pipeline } => {
            commands::run_check(&pipeline.root, &options_from(&pipeline))
        }
        Commands::List { root, kind } => commands::run_list(&root, kind.as_deref()),
    }
}

fn options_from(pipeline: &PipelineArgs) -> BuildOptions {
    BuildOptions {
        lenient: pipeline.lenient,
        json: pipeline.json,
        ..BuildOptions::default()
    }
}
