//! Checksum calculation for identifying a loaded dataset.

use sha2::{Digest, Sha256};

/// Calculate the SHA-256 checksum of raw file content.
///
/// # Returns
/// Hexadecimal string representation of the hash.
pub fn calculate_checksum(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}
