//! # Cryptographic Primitives
//!
//! Everything the envelope signer needs from cryptography, and nothing more:
//!
//! - **SHA-256** for network ids and transaction hashes.
//! - **Ed25519** (via `ed25519-dalek`) for signatures.
//! - **StrKey** for the checksummed text form of keys.
//!
//! Everything here is a thin, typed wrapper around audited implementations:
//! `sha2`, `ed25519-dalek` and `stellar-strkey`.

pub mod hash;
pub mod keys;
pub mod strkey;

pub use hash::{sha256, sha256_array};
pub use keys::{Keypair, PublicKey};
pub use strkey::KeyError;
