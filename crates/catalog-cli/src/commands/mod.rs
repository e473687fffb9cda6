//! Command implementations for catalog-cli

pub mod build;
pub mod list;

pub use build::{BuildOptions, run_build, run_check};
pub use list::run_list;
