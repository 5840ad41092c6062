//! # StrKey Encoding
//!
//! The human-facing form of keys: `G...` for account ids, `S...` for secret
//! seeds and `M...` for multiplexed accounts. Framing, base32 and the CRC16
//! checksum come from `stellar-strkey`; this module pins which kind of key
//! each call site accepts and maps failures onto [`KeyError`].
//!
//! The version byte is what stops a seed from being pasted where an address
//! belongs, so every decoder names the kind it expects.

use stellar_strkey::{ed25519, Strkey};
use thiserror::Error;

use crate::config::PUBLIC_KEY_LENGTH;

/// Errors raised while decoding a strkey or building keys from one.
///
/// None of these echo the input back. A malformed seed is still mostly a
/// seed, and error strings end up in logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// Bad length, alphabet, padding or checksum.
    #[error("invalid strkey")]
    Invalid,

    /// Well-formed, but a different kind of key than the caller asked for.
    #[error("expected {expected}, got {actual}")]
    WrongKind {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("invalid public key bytes: not a valid Ed25519 point")]
    InvalidPublicKey,
}

const ACCOUNT_ID: &str = "account id";
const SECRET_SEED: &str = "secret seed";
const MUXED_ACCOUNT: &str = "muxed account";

fn parse(encoded: &str) -> Result<Strkey, KeyError> {
    Strkey::from_string(encoded).map_err(|_| KeyError::Invalid)
}

fn kind(key: &Strkey) -> &'static str {
    match key {
        Strkey::PublicKeyEd25519(_) => ACCOUNT_ID,
        Strkey::PrivateKeyEd25519(_) => SECRET_SEED,
        Strkey::MuxedAccountEd25519(_) => MUXED_ACCOUNT,
        Strkey::PreAuthTx(_) => "pre-auth transaction",
        Strkey::HashX(_) => "hash-x signer",
        Strkey::SignedPayloadEd25519(_) => "signed payload",
        Strkey::Contract(_) => "contract",
    }
}

/// Decode a `G...` account id to its raw key bytes.
pub fn decode_account_id(encoded: &str) -> Result<[u8; PUBLIC_KEY_LENGTH], KeyError> {
    match parse(encoded)? {
        Strkey::PublicKeyEd25519(ed25519::PublicKey(key)) => Ok(key),
        other => Err(KeyError::WrongKind {
            expected: ACCOUNT_ID,
            actual: kind(&other),
        }),
    }
}

/// Decode an `S...` secret seed to its raw 32 bytes.
pub fn decode_seed(encoded: &str) -> Result<[u8; PUBLIC_KEY_LENGTH], KeyError> {
    match parse(encoded)? {
        Strkey::PrivateKeyEd25519(ed25519::PrivateKey(seed)) => Ok(seed),
        other => Err(KeyError::WrongKind {
            expected: SECRET_SEED,
            actual: kind(&other),
        }),
    }
}

/// Decode a payment destination: a plain `G...` account (no id) or an
/// `M...` multiplexed account (key plus 64-bit id).
pub fn decode_muxed(encoded: &str) -> Result<([u8; PUBLIC_KEY_LENGTH], Option<u64>), KeyError> {
    match parse(encoded)? {
        Strkey::PublicKeyEd25519(ed25519::PublicKey(key)) => Ok((key, None)),
        Strkey::MuxedAccountEd25519(ed25519::MuxedAccount { ed25519, id }) => {
            Ok((ed25519, Some(id)))
        }
        other => Err(KeyError::WrongKind {
            expected: MUXED_ACCOUNT,
            actual: kind(&other),
        }),
    }
}

pub fn encode_account_id(key: &[u8; PUBLIC_KEY_LENGTH]) -> String {
    ed25519::PublicKey(*key).to_string()
}

/// Handle with care: the output is spendable.
pub fn encode_seed(seed: &[u8; PUBLIC_KEY_LENGTH]) -> String {
    ed25519::PrivateKey(*seed).to_string()
}

pub fn encode_muxed(key: &[u8; PUBLIC_KEY_LENGTH], id: u64) -> String {
    ed25519::MuxedAccount { ed25519: *key, id }.to_string()
}
