//! Byte and base64 entry points over the `stellar-xdr` codec.
//!
//! `stellar-xdr` owns the wire format: big-endian integers, 4-byte
//! alignment, `i32` union tags, length-prefixed arrays with schema bounds.
//! What this module adds is the policy the pipeline applies at every
//! boundary:
//!
//! - decoding is bounded by [`XDR_DEPTH_LIMIT`] because input is untrusted;
//! - a standalone value must span its whole input, and leftover bytes are
//!   reported with their count;
//! - failures land in [`XdrError`] so callers match on one error type.

use std::io::{Cursor, ErrorKind};

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use stellar_xdr::curr::{self as xdr, Limited, Limits, ReadXdr, WriteXdr};

use super::error::XdrError;
use crate::config::XDR_DEPTH_LIMIT;

impl From<xdr::Error> for XdrError {
    fn from(err: xdr::Error) -> Self {
        match err {
            xdr::Error::Io(io) if io.kind() == ErrorKind::UnexpectedEof => XdrError::UnexpectedEof,
            other => XdrError::Schema(other.to_string()),
        }
    }
}

/// Canonical encoding for any schema value.
pub trait EncodeXdr: WriteXdr {
    fn encode(&self) -> Result<Vec<u8>, XdrError> {
        Ok(self.to_xdr(Limits::none())?)
    }

    fn encode_base64(&self) -> Result<String, XdrError> {
        Ok(BASE64.encode(self.encode()?))
    }
}

impl<T: WriteXdr> EncodeXdr for T {}

/// Strict decoding for any schema value.
pub trait DecodeXdr: ReadXdr + Sized {
    /// Decode one value from the front of `bytes`, returning it and the
    /// number of bytes it occupied.
    fn decode_prefix(bytes: &[u8]) -> Result<(Self, usize), XdrError> {
        let mut reader = Limited::new(Cursor::new(bytes), Limits::depth(XDR_DEPTH_LIMIT));
        let value = Self::read_xdr(&mut reader)?;
        let consumed = usize::try_from(reader.inner.position())
            .map_err(|e| XdrError::Schema(e.to_string()))?;
        Ok((value, consumed))
    }

    /// Decode a value that must span all of `bytes`.
    fn decode(bytes: &[u8]) -> Result<Self, XdrError> {
        let (value, consumed) = Self::decode_prefix(bytes)?;
        match bytes.len() - consumed {
            0 => Ok(value),
            extra => Err(XdrError::TrailingBytes(extra)),
        }
    }

    fn decode_base64(encoded: &str) -> Result<Self, XdrError> {
        Self::decode(&from_base64(encoded)?)
    }
}

impl<T: ReadXdr> DecodeXdr for T {}

/// Decode standard, padded base64. Surrounding whitespace is ignored.
pub fn from_base64(encoded: &str) -> Result<Vec<u8>, XdrError> {
    BASE64
        .decode(encoded.trim())
        .map_err(|e| XdrError::InvalidBase64(e.to_string()))
}
