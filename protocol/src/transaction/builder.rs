//! Transaction assembly from base64-encoded operations.
//!
//! The [`TransactionBuilder`] owns one [`Transaction`] skeleton (source,
//! fee, sequence number, memo), appends operations to it, and serializes
//! the result to canonical base64 XDR for the signer.
//!
//! The builder does not sign. That happens in [`super::envelope`], which
//! takes the serialized transaction, keeping construction testable without
//! key material.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use tracing::{debug, trace};

use super::error::TransactionError;
use crate::config::MAX_OPERATIONS;
use crate::xdr::{
    check_operation, muxed_address, DecodeXdr, EncodeXdr, Operation, Transaction, XdrError,
};

/// Assembles a transaction one operation at a time.
///
/// # Usage
///
/// ```rust
/// use txe_protocol::transaction::TransactionBuilder;
/// use txe_protocol::xdr::{muxed_account, payment, skeleton, Asset, EncodeXdr};
///
/// let source = muxed_account(
///     "GAMMEG4YSIGJO3I45T37A57EN5CFQQH5OVHO4XDUGF7E32VJ76YYX56E",
/// ).unwrap();
/// let dest = muxed_account(
///     "GCICVEBF5JYDBCTR3TXFGN56WGYBAKKWVHUQYPM72F6ZEQ7BDQZT4NFZ",
/// ).unwrap();
/// let op = payment(dest, Asset::Native, 500_000_000)
///     .encode_base64()
///     .unwrap();
///
/// let mut builder = TransactionBuilder::create(skeleton(source, 10, 1));
/// builder.append_operation(&op).unwrap();
/// let tx_b64 = builder.serialize().unwrap();
/// assert!(!tx_b64.is_empty());
/// ```
///
/// Operations are appended in call order; duplicates are allowed. An empty
/// operation list still serializes, since the ledger rejects it on submission
/// and it is not this builder's call to make.
#[derive(Debug, Clone)]
pub struct TransactionBuilder {
    tx: Transaction,
}

impl TransactionBuilder {
    /// Takes ownership of the skeleton. Any operations it already carries
    /// are kept.
    pub fn create(tx: Transaction) -> Self {
        trace!(
            source = %muxed_address(&tx.source_account),
            fee = tx.fee,
            seq_num = tx.seq_num.0,
            "transaction builder created"
        );
        Self { tx }
    }

    /// Decodes a base64 XDR operation and appends it.
    ///
    /// Fails with [`TransactionError::Decode`] on malformed base64, on bytes
    /// that are not exactly one valid operation (including asset codes the
    /// ledger would refuse), and with [`TransactionError::Encode`] if the
    /// transaction is already full. The operation list is untouched on
    /// failure.
    pub fn append_operation(&mut self, operation_b64: &str) -> Result<&mut Self, TransactionError> {
        let op = Operation::decode_base64(operation_b64).map_err(TransactionError::Decode)?;
        check_operation(&op).map_err(TransactionError::Decode)?;
        self.append(op)
    }

    /// Appends an already-decoded operation.
    pub fn append(&mut self, op: Operation) -> Result<&mut Self, TransactionError> {
        let index = self.tx.operations.len();
        let full = || {
            TransactionError::Encode(XdrError::LengthExceeded {
                max: MAX_OPERATIONS,
                actual: index + 1,
            })
        };
        if index >= MAX_OPERATIONS {
            return Err(full());
        }

        let kind = op.body.name();
        let mut operations = self.tx.operations.to_vec();
        operations.push(op);
        self.tx.operations = operations.try_into().map_err(|_| full())?;
        debug!(index, kind, "operation appended");
        Ok(self)
    }

    /// Canonical XDR bytes of the transaction.
    pub fn to_xdr(&self) -> Result<Vec<u8>, TransactionError> {
        let bytes = self.tx.encode().map_err(TransactionError::Encode)?;
        debug!(
            bytes = bytes.len(),
            operations = self.tx.operations.len(),
            "transaction serialized"
        );
        Ok(bytes)
    }

    /// Base64 of the canonical XDR. Idempotent; the builder can keep
    /// accepting operations afterwards.
    pub fn serialize(&self) -> Result<String, TransactionError> {
        Ok(BASE64.encode(self.to_xdr()?))
    }

    pub fn transaction(&self) -> &Transaction {
        &self.tx
    }

    pub fn operation_count(&self) -> usize {
        self.tx.operations.len()
    }

    pub fn into_transaction(self) -> Transaction {
        self.tx
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
