//! SHA-256 checksums in the `sha256:<hex>` format
//!
//! The build prints the checksum of every artifact it writes so operators can
//! confirm that two builds of an unchanged tree produced identical bytes.

use sha2::{Digest, Sha256};
use std::path::Path;

const PREFIX: &str = "sha256:";

/// Checksum of an in-memory byte buffer.
pub fn compute_bytes_checksum(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{}{:x}", PREFIX, hasher.finalize())
}

/// Checksum of a file's current contents.
pub fn compute_file_checksum(path: &Path) -> crate::Result<String> {
    let content = std::fs::read(path).map_err(|e| crate::Error::io(path, e))?;
    Ok(compute_bytes_checksum(&content))
}
