//! # XDR Module
//!
//! Canonical binary encoding of the ledger structures this crate builds and
//! signs. Ledger nodes parse exactly this schema, so every byte here has to
//! match what they expect. The schema types and their wire codec come from
//! `stellar-xdr` and are re-exported here.
//!
//! ## Architecture
//!
//! ```text
//! codec.rs       — EncodeXdr / DecodeXdr: bytes and base64, strict decoding
//! error.rs       — XdrError
//! types.rs       — account, asset, memo and time-bound helpers
//! operation.rs   — payment / create-account constructors, operation checks
//! transaction.rs — transaction skeleton, legacy envelope conversion
//! ```
//!
//! Decoding is strict: unknown discriminants, over-long arrays, non-zero
//! padding and trailing bytes are all errors, so that decode followed by
//! encode always reproduces the input exactly.

pub mod codec;
pub mod error;
pub mod operation;
pub mod transaction;
pub mod types;

pub use codec::{from_base64, DecodeXdr, EncodeXdr};
pub use error::XdrError;
pub use operation::{check_operation, create_account, payment};
pub use transaction::{check_transaction, from_legacy, skeleton, to_legacy};
pub use types::{
    account_address, account_id, account_id_from_bytes, account_key, asset_code, asset_issuer,
    check_asset, credit_asset, memo_text, muxed_account, muxed_address, muxed_key, time_bounds,
};

pub use stellar_xdr::curr::{
    AccountId, Asset, CreateAccountOp, DecoratedSignature, Hash, Memo, MuxedAccount, Operation,
    OperationBody, PaymentOp, Preconditions, Signature, SignatureHint, TimeBounds, Transaction,
    TransactionEnvelope, TransactionSignaturePayload, TransactionSignaturePayloadTaggedTransaction,
    TransactionV0, TransactionV0Envelope, TransactionV1Envelope, VecM,
};
