//! # Transaction Module
//!
//! Assembly and signing of ledger transactions. Data flows one way:
//!
//! ```text
//! operation (base64) ─▶ TransactionBuilder ─▶ transaction (base64)
//!                                                   │
//!                                                   ▼
//!                       signed envelope (base64) ◀─ EnvelopeSigner ◀─ seed, passphrase
//! ```
//!
//! ## Architecture
//!
//! ```text
//! builder.rs  — TransactionBuilder: skeleton + base64 operations -> transaction XDR
//! envelope.rs — EnvelopeSigner: transaction XDR + seeds -> signed envelope XDR
//! signing.rs  — Signature base, transaction hash, Ed25519 signing
//! network.rs  — Network passphrase and id
//! error.rs    — TransactionError
//! ```
//!
//! ## Design Decisions
//!
//! - Both stages exchange base64 text, so they can run in different
//!   processes or on different machines.
//! - Fees and sequence numbers are passed through untouched. Only the
//!   ledger knows whether they are acceptable.
//! - Nothing is deduplicated or required beyond the schema bounds: an
//!   empty operation list serializes, and the same key may sign twice.

pub mod builder;
pub mod envelope;
pub mod error;
pub mod network;
pub mod signing;

pub use builder::TransactionBuilder;
pub use envelope::EnvelopeSigner;
pub use error::TransactionError;
pub use network::Network;
pub use signing::{sign_hash, signature_base, transaction_hash, verify_signature};
