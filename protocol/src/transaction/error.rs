//! Errors surfaced by the transaction builder and envelope signer.

use thiserror::Error;

use crate::crypto::strkey::KeyError;
use crate::xdr::XdrError;

/// Failure of a build or sign step.
///
/// Every variant is deterministic: retrying the same call with the same
/// input fails the same way. None of them leave partial state behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransactionError {
    /// Input base64 or XDR was malformed.
    #[error("decode error: {0}")]
    Decode(#[source] XdrError),

    /// A value could not be encoded, e.g. a list past its schema bound.
    #[error("encode error: {0}")]
    Encode(#[source] XdrError),

    /// A seed or address string was malformed.
    #[error("key error: {0}")]
    Key(#[from] KeyError),

    /// The signature could not be produced or attached.
    #[error("signing error: {0}")]
    Sign(String),
}
