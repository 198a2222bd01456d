//! SRI digest computation

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use sha2::{Digest, Sha384};

use super::ScanError;

/// Algorithm prefix of every integrity value
pub const SRI_PREFIX: &str = "sha384-";

/// Compute the integrity value for a file's contents
///
/// The bytes are decoded as UTF-8 text first and the digest runs over that
/// text, so invalid sequences are replaced with U+FFFD before hashing. For
/// valid UTF-8 input the result equals a plain SHA-384 of the bytes.
#[must_use]
pub fn sri_digest(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    let digest = Sha384::digest(text.as_bytes());
    format!("{SRI_PREFIX}{}", STANDARD.encode(digest))
}

/// Read a file and compute its integrity value
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn compute_sri_hash(path: &Path) -> Result<String, ScanError> {
    let bytes = std::fs::read(path).map_err(|source| ScanError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(sri_digest(&bytes))
}
