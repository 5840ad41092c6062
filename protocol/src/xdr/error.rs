//! Error types for XDR encoding and decoding.

use thiserror::Error;

/// Everything that can go wrong turning bytes into ledger values or back.
///
/// Decoding is strict: the canonical encoding of a value is unique, so any
/// input that would not re-encode to itself is rejected here rather than
/// silently normalized. Schema violations reported by `stellar-xdr`
/// (unknown union tags, non-zero padding, over-long arrays) arrive as
/// [`XdrError::Schema`] with the codec's message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum XdrError {
    /// The text form was not valid standard base64.
    #[error("invalid base64: {0}")]
    InvalidBase64(String),

    /// The input ended in the middle of a value.
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// A standalone value was decoded but bytes were left over.
    #[error("{0} trailing bytes after value")]
    TrailingBytes(usize),

    /// The bytes do not follow the ledger schema.
    #[error("schema violation: {0}")]
    Schema(String),

    /// A variable-length field exceeded its schema bound.
    #[error("length {actual} exceeds maximum {max}")]
    LengthExceeded { max: usize, actual: usize },

    /// An asset code was empty, too long, mis-padded or not alphanumeric.
    #[error("invalid asset code: {0:?}")]
    InvalidAssetCode(String),

    /// A well-formed envelope of a kind this signer does not handle.
    #[error("unsupported envelope type: {0}")]
    UnsupportedEnvelope(&'static str),
}
