// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # TXE Protocol — Transaction Envelope Library
//!
//! Builds ledger transactions from base64-encoded operations and turns them
//! into signed, network-bound transaction envelopes, byte-for-byte in the
//! canonical XDR that ledger nodes parse.
//!
//! ## Architecture
//!
//! - **config** — Protocol constants: passphrases, type tags, schema limits.
//! - **crypto** — SHA-256, Ed25519 keypairs, strkey addresses and seeds.
//! - **xdr** — Ledger schema types (`stellar-xdr`) and strict encode/decode.
//! - **transaction** — The builder and envelope signer pipeline.
//! - **logging** — Subscriber setup for programs embedding the library.
//!
//! ## Pipeline
//!
//! 1. Encode an [`xdr::Operation`] to base64.
//! 2. [`transaction::TransactionBuilder`] appends it to a transaction skeleton
//!    and serializes the transaction.
//! 3. [`transaction::EnvelopeSigner`] decodes that transaction, signs it for a
//!    network passphrase, and serializes the signed envelope.
//!
//! ## Design Philosophy
//!
//! 1. Every byte matches the reference encoding, or it's a bug.
//! 2. No hand-rolled cryptography or codecs: Ed25519 comes from
//!    `ed25519-dalek`, the schema from `stellar-xdr`, strkeys from
//!    `stellar-strkey`.
//! 3. Every failure is a typed error, and none leaves partial state behind.

pub mod config;
pub mod crypto;
pub mod logging;
pub mod transaction;
pub mod xdr;
