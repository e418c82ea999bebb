use sha2::{Digest, Sha256};

/// Stable storage key for a fingerprint: hex SHA-256 of its UTF-8 bytes.
pub fn fingerprint_key(fingerprint: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(fingerprint.as_bytes());
    hex::encode(hasher.finalize())
}
