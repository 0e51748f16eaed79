use sha2::{Digest, Sha256};

/// Compute the SHA-256 hash of a byte slice, returning a lowercase hex string.
pub fn sha256_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

/// First 16 hex characters of the SHA-256 digest.
///
/// Short enough for a log line, long enough to tell two keys apart.
pub fn short_digest(data: &[u8]) -> String {
    let mut full = sha256_bytes(data);
    full.truncate(16);
    full
}
