//! # Key Management
//!
//! Ed25519 keypairs for signing envelopes, and the public half used to
//! address accounts and check signatures.
//!
//! Keys arrive as strkeys (`S...` seeds, `G...` addresses); see
//! [`super::strkey`]. Internally everything is raw 32-byte material handed
//! to `ed25519-dalek`.
//!
//! ## Security considerations
//!
//! - Signing keys are zeroized on drop (ed25519-dalek does this for us).
//! - `Debug` on a keypair prints the address only.
//! - Key bytes are never logged.

use ed25519_dalek::{Signature as DalekSignature, Signer, SigningKey, Verifier, VerifyingKey};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::strkey::{self, KeyError};
use crate::config::{PUBLIC_KEY_LENGTH, SEED_LENGTH, SIGNATURE_HINT_LENGTH, SIGNATURE_LENGTH};

/// An Ed25519 keypair that can sign transaction hashes.
///
/// Not `Serialize`; the seed is only exported through
/// [`Keypair::secret_seed`].
///
/// # Examples
///
/// ```
/// use txe_protocol::crypto::keys::Keypair;
///
/// let kp = Keypair::from_secret_seed(
///     "SDKJ2BUKQ5TCMSLRQBAFSEVJ3LBXFGHEKKPTYNCDWSOJ4CFGFR5SKRME",
/// ).unwrap();
/// let sig = kp.sign(b"payload");
/// assert!(kp.public_key().verify(b"payload", &sig));
/// ```
pub struct Keypair {
    signing_key: SigningKey,
}

/// The public half of a keypair. Any 32 bytes that decode to a valid
/// Ed25519 point.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicKey {
    bytes: [u8; PUBLIC_KEY_LENGTH],
}

impl Keypair {
    /// Generate a fresh keypair from the OS RNG.
    pub fn random() -> Self {
        Self {
            signing_key: SigningKey::generate(&mut OsRng),
        }
    }

    /// Construct a keypair from a raw 32-byte Ed25519 seed.
    pub fn from_seed(seed: &[u8; SEED_LENGTH]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(seed),
        }
    }

    /// Parse an `S...` secret seed.
    pub fn from_secret_seed(seed: &str) -> Result<Self, KeyError> {
        let raw = strkey::decode_seed(seed)?;
        Ok(Self::from_seed(&raw))
    }

    /// Export the seed in strkey form. Handle with care.
    pub fn secret_seed(&self) -> String {
        strkey::encode_seed(&self.signing_key.to_bytes())
    }

    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            bytes: self.signing_key.verifying_key().to_bytes(),
        }
    }

    /// The `G...` address of this keypair.
    pub fn address(&self) -> String {
        self.public_key().address()
    }

    /// Sign a message. Deterministic per RFC 8032: same key and message,
    /// same 64 bytes.
    pub fn sign(&self, message: &[u8]) -> [u8; SIGNATURE_LENGTH] {
        self.signing_key.sign(message).to_bytes()
    }

    /// Last four bytes of the public key.
    pub fn signature_hint(&self) -> [u8; SIGNATURE_HINT_LENGTH] {
        self.public_key().signature_hint()
    }
}

impl Clone for Keypair {
    fn clone(&self) -> Self {
        Self::from_seed(&self.signing_key.to_bytes())
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Keypair({})", self.address())
    }
}

impl PartialEq for Keypair {
    /// Compared by public key; secret material is never compared directly.
    fn eq(&self, other: &Self) -> bool {
        self.public_key() == other.public_key()
    }
}

impl Eq for Keypair {}

impl PublicKey {
    /// Wrap raw key bytes, checking they form a valid Ed25519 point.
    pub fn from_bytes(bytes: &[u8; PUBLIC_KEY_LENGTH]) -> Result<Self, KeyError> {
        VerifyingKey::from_bytes(bytes).map_err(|_| KeyError::InvalidPublicKey)?;
        Ok(Self { bytes: *bytes })
    }

    /// Parse a `G...` address.
    pub fn from_address(address: &str) -> Result<Self, KeyError> {
        let raw = strkey::decode_account_id(address)?;
        Self::from_bytes(&raw)
    }

    pub fn address(&self) -> String {
        strkey::encode_account_id(&self.bytes)
    }

    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.bytes
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// The hint a verifier uses to pick this key out of an envelope.
    pub fn signature_hint(&self) -> [u8; SIGNATURE_HINT_LENGTH] {
        let mut hint = [0u8; SIGNATURE_HINT_LENGTH];
        hint.copy_from_slice(&self.bytes[PUBLIC_KEY_LENGTH - SIGNATURE_HINT_LENGTH..]);
        hint
    }

    /// Strict Ed25519 verification. Wrong length, bad point, or bad
    /// signature all come back as `false`.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        let Ok(verifying_key) = VerifyingKey::from_bytes(&self.bytes) else {
            return false;
        };
        let Ok(sig_bytes) = <[u8; SIGNATURE_LENGTH]>::try_from(signature) else {
            return false;
        };
        let sig = DalekSignature::from_bytes(&sig_bytes);
        verifying_key.verify(message, &sig).is_ok()
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.address())
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address())
    }
}
