//! # Hashing Utilities
//!
//! SHA-256 is the only hash the envelope pipeline needs: it derives the
//! network id from a passphrase and the transaction hash from the signature
//! base. Both are fixed by the ledger schema, so there is no room for
//! picking something faster here.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 hash of the input data.
///
/// Returns a 32-byte digest as a `Vec<u8>`, for callers that immediately
/// hand the result to something wanting `&[u8]`.
///
/// # Example
///
/// ```
/// use txe_protocol::crypto::sha256;
///
/// let hash = sha256(b"Test SDF Network ; September 2015");
/// assert_eq!(hash.len(), 32);
/// ```
pub fn sha256(data: &[u8]) -> Vec<u8> {
    sha256_array(data).to_vec()
}

/// Compute the SHA-256 hash and return a fixed-size array.
pub fn sha256_array(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}
