use sha2::{Digest, Sha256};
use shared::types::Challenge;

/// Leading 16 bits of SHA-256 over the candidate's 8 raw little-endian bytes.
///
/// The first digest byte is the low byte of the prefix.
pub fn digest_prefix(candidate: u64) -> u16 {
    let digest = Sha256::digest(candidate.to_le_bytes());
    u16::from_le_bytes([digest[0], digest[1]])
}

#[inline]
pub fn matches(challenge: Challenge, candidate: u64) -> bool {
    digest_prefix(candidate) == challenge.value()
}
