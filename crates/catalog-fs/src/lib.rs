//! Filesystem primitives for the component catalog builder
//!
//! Provides forward-slash path handling for manifest file references,
//! atomic artifact writes, and content checksums.

pub mod checksum;
pub mod error;
pub mod io;
pub mod path;

pub use checksum::{compute_bytes_checksum, compute_file_checksum};
pub use error::{Error, Result};
pub use path::NormalizedPath;
