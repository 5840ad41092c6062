//! Network identity for signatures.
//!
//! A network is named by its passphrase, and identified by the SHA-256 of
//! it. That id is the first thing fed into every transaction hash, so a
//! signature made for one network is worthless on any other.

use serde::{Deserialize, Serialize};

use crate::config::{self, HASH_LENGTH, PUBLIC_NETWORK_PASSPHRASE, TEST_NETWORK_PASSPHRASE};
use crate::crypto::hash::sha256_array;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Network {
    passphrase: String,
}

impl Network {
    pub fn new(passphrase: impl Into<String>) -> Self {
        Self {
            passphrase: passphrase.into(),
        }
    }

    /// The public production network.
    pub fn public() -> Self {
        Self::new(PUBLIC_NETWORK_PASSPHRASE)
    }

    /// The public test network.
    pub fn testnet() -> Self {
        Self::new(TEST_NETWORK_PASSPHRASE)
    }

    pub fn passphrase(&self) -> &str {
        &self.passphrase
    }

    /// `SHA-256(passphrase)`.
    pub fn id(&self) -> [u8; HASH_LENGTH] {
        sha256_array(self.passphrase.as_bytes())
    }

    /// Short label for logs.
    pub fn name(&self) -> &'static str {
        config::network_name(&self.passphrase)
    }
}
