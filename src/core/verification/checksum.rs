//! Checksum calculation for exported documents

use sha2::{Digest, Sha256};

/// Calculate the SHA-256 checksum of an exported document
///
/// # Returns
///
/// Returns a hex-encoded SHA-256 checksum string (64 characters).
///
/// # Examples
///
/// ```
/// use bngl_export::core::verification::checksum::document_checksum;
///
/// let checksum = document_checksum("begin model\nend model\n");
/// assert_eq!(checksum.len(), 64);
/// ```
pub fn document_checksum(document: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(document.as_bytes());
    let result = hasher.finalize();

    format!("{result:x}")
}

/// Verify that a document matches an expected checksum
pub fn verify_checksum(document: &str, expected: &str) -> bool {
    document_checksum(document).eq_ignore_ascii_case(expected.trim())
}
