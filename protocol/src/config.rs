//! # Protocol Configuration & Constants
//!
//! Every magic number the envelope pipeline depends on lives here. The
//! values are fixed by the ledger's XDR schema and by the networks that
//! consume it; changing any of them means every signature we produce stops
//! verifying on the other side.

// ---------------------------------------------------------------------------
// Network Passphrases
// ---------------------------------------------------------------------------

/// Passphrase of the public production network.
pub const PUBLIC_NETWORK_PASSPHRASE: &str = "Public Global Stellar Network ; September 2015";

/// Passphrase of the public test network. Reset periodically.
pub const TEST_NETWORK_PASSPHRASE: &str = "Test SDF Network ; September 2015";

// ---------------------------------------------------------------------------
// Envelope Type Tags
// ---------------------------------------------------------------------------

/// Discriminator for transaction envelopes. Sits between the network id and
/// the transaction bytes in the signing payload.
pub const ENVELOPE_TYPE_TX: i32 = 2;

// ---------------------------------------------------------------------------
// XDR Length Limits
// ---------------------------------------------------------------------------

/// Maximum number of operations in a single transaction (`Operation<100>`).
pub const MAX_OPERATIONS: usize = 100;

/// Maximum number of signatures on an envelope (`DecoratedSignature<20>`).
pub const MAX_SIGNATURES: usize = 20;

/// Maximum byte length of a text memo (`string<28>`).
pub const MAX_MEMO_TEXT_LENGTH: usize = 28;

/// Alphanumeric asset codes: 1-4 characters for alphanum4, 5-12 for alphanum12.
pub const ASSET_CODE4_LENGTH: usize = 4;
pub const ASSET_CODE12_LENGTH: usize = 12;

// ---------------------------------------------------------------------------
// Cryptographic Parameters
// ---------------------------------------------------------------------------

/// Ed25519 seed length in bytes.
pub const SEED_LENGTH: usize = 32;

/// Ed25519 public key length in bytes.
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// Ed25519 signature length. The XDR field is `opaque<64>`, so this is an
/// upper bound on the wire but always exact for what we produce.
pub const SIGNATURE_LENGTH: usize = 64;

/// Signature hint: the trailing bytes of the signer's public key.
pub const SIGNATURE_HINT_LENGTH: usize = 4;

/// SHA-256 output length.
pub const HASH_LENGTH: usize = 32;

// ---------------------------------------------------------------------------
// Decoding Limits
// ---------------------------------------------------------------------------

/// Nesting depth allowed when decoding untrusted XDR. Transactions built by
/// this crate never come close; the bound only stops hostile input from
/// recursing without end.
pub const XDR_DEPTH_LIMIT: u32 = 500;

// ---------------------------------------------------------------------------
// Fees & Amounts
// ---------------------------------------------------------------------------

/// Minimum per-operation fee in stroops on the public networks.
pub const BASE_FEE: u32 = 100;

/// Stroops per whole unit of an asset. Amounts on the wire are always
/// integer stroops; seven implied decimal places.
pub const STROOPS_PER_UNIT: i64 = 10_000_000;

// ---------------------------------------------------------------------------
// Utility
// ---------------------------------------------------------------------------

/// Returns a friendly name for a passphrase, mainly for logging.
/// Unknown networks are reported as custom; we don't echo arbitrary text.
pub fn network_name(passphrase: &str) -> &'static str {
    match passphrase {
        PUBLIC_NETWORK_PASSPHRASE => "public",
        TEST_NETWORK_PASSPHRASE => "testnet",
        _ => "custom",
    }
}
