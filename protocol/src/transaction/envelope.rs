//! Signed envelope production.
//!
//! The [`EnvelopeSigner`] takes a serialized transaction, collects Ed25519
//! signatures over its network-bound hash, and serializes the resulting
//! envelope. That envelope is the artifact ledger nodes accept.

use tracing::debug;

use super::error::TransactionError;
use super::network::Network;
use super::signing::{sign_hash, transaction_hash, verify_signature};
use crate::config::{HASH_LENGTH, MAX_SIGNATURES};
use crate::crypto::keys::{Keypair, PublicKey};
use crate::xdr::{
    check_transaction, from_legacy, to_legacy, DecodeXdr, DecoratedSignature, EncodeXdr,
    Transaction, TransactionEnvelope, TransactionV0Envelope, TransactionV1Envelope, VecM, XdrError,
};

/// Wraps one transaction and accumulates signatures over it.
///
/// The transaction is fixed at construction; only the signature list ever
/// grows. Each pipeline run should use its own signer; there is no internal
/// locking.
///
/// Transactions that fit the legacy layout are emitted as legacy (`TxV0`)
/// envelopes, the form ledger nodes have always accepted. Anything that
/// needs the newer fields (multiplexed source, richer preconditions), or an
/// envelope that arrived as `Tx`, is emitted as a `Tx` envelope. Either way
/// the hash, and so every signature, is the same.
///
/// # Example
///
/// ```rust,no_run
/// use txe_protocol::config::TEST_NETWORK_PASSPHRASE;
/// use txe_protocol::transaction::EnvelopeSigner;
///
/// # fn run(tx_b64: &str) -> Result<(), txe_protocol::transaction::TransactionError> {
/// let mut signer = EnvelopeSigner::create(tx_b64)?;
/// signer.sign(
///     "SDKJ2BUKQ5TCMSLRQBAFSEVJ3LBXFGHEKKPTYNCDWSOJ4CFGFR5SKRME",
///     TEST_NETWORK_PASSPHRASE,
/// )?;
/// let envelope_b64 = signer.serialize()?;
/// # let _ = envelope_b64;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct EnvelopeSigner {
    tx: Transaction,
    signatures: Vec<DecoratedSignature>,
    legacy: bool,
}

impl EnvelopeSigner {
    /// Decode a base64 XDR transaction into an unsigned envelope.
    pub fn create(transaction_b64: &str) -> Result<Self, TransactionError> {
        let tx = Transaction::decode_base64(transaction_b64).map_err(TransactionError::Decode)?;
        check_transaction(&tx).map_err(TransactionError::Decode)?;
        Ok(Self::from_transaction(tx))
    }

    pub fn from_transaction(tx: Transaction) -> Self {
        let legacy = to_legacy(&tx).is_some();
        Self {
            tx,
            signatures: Vec::new(),
            legacy,
        }
    }

    /// Reload a previously serialized envelope, keeping its signatures and
    /// layout so more can be added.
    pub fn from_envelope_base64(envelope_b64: &str) -> Result<Self, TransactionError> {
        let envelope =
            TransactionEnvelope::decode_base64(envelope_b64).map_err(TransactionError::Decode)?;
        let signer = match envelope {
            TransactionEnvelope::TxV0(env) => Self {
                tx: from_legacy(env.tx),
                signatures: env.signatures.into(),
                legacy: true,
            },
            TransactionEnvelope::Tx(env) => Self {
                tx: env.tx,
                signatures: env.signatures.into(),
                legacy: false,
            },
            TransactionEnvelope::TxFeeBump(_) => {
                return Err(TransactionError::Decode(XdrError::UnsupportedEnvelope(
                    "TxFeeBump",
                )))
            }
        };
        check_transaction(&signer.tx).map_err(TransactionError::Decode)?;

        debug!(
            signatures = signer.signatures.len(),
            legacy = signer.legacy,
            "envelope loaded"
        );
        Ok(signer)
    }

    /// Sign with an `S...` seed for the network named by `network_passphrase`.
    ///
    /// A malformed seed fails with [`TransactionError::Key`]. The signature
    /// list is unchanged on any failure.
    pub fn sign(
        &mut self,
        secret_seed: &str,
        network_passphrase: &str,
    ) -> Result<&mut Self, TransactionError> {
        let keypair = Keypair::from_secret_seed(secret_seed)?;
        self.sign_with_keypair(&keypair, &Network::new(network_passphrase))
    }

    /// Sign with an already-parsed keypair.
    ///
    /// Signatures accumulate in call order and are never deduplicated:
    /// signing twice with the same key yields two identical entries. An
    /// envelope already carrying 20 signatures refuses with
    /// [`TransactionError::Sign`].
    pub fn sign_with_keypair(
        &mut self,
        keypair: &Keypair,
        network: &Network,
    ) -> Result<&mut Self, TransactionError> {
        if self.signatures.len() >= MAX_SIGNATURES {
            return Err(TransactionError::Sign(format!(
                "envelope already carries the maximum of {} signatures",
                MAX_SIGNATURES
            )));
        }

        let hash = transaction_hash(&self.tx, network).map_err(TransactionError::Encode)?;
        let decorated = sign_hash(keypair, &hash).map_err(|e| TransactionError::Sign(e.to_string()))?;

        debug!(
            network = network.name(),
            hint = %hex::encode(decorated.hint.0),
            tx_hash = %hex::encode(hash),
            signatures = self.signatures.len() + 1,
            "transaction signed"
        );

        self.signatures.push(decorated);
        Ok(self)
    }

    /// The envelope as it will be serialized.
    pub fn envelope(&self) -> Result<TransactionEnvelope, TransactionError> {
        let signatures: VecM<DecoratedSignature, 20> =
            self.signatures.clone().try_into().map_err(|_| {
                TransactionError::Encode(XdrError::LengthExceeded {
                    max: MAX_SIGNATURES,
                    actual: self.signatures.len(),
                })
            })?;

        Ok(match to_legacy(&self.tx).filter(|_| self.legacy) {
            Some(tx) => TransactionEnvelope::TxV0(TransactionV0Envelope { tx, signatures }),
            None => TransactionEnvelope::Tx(TransactionV1Envelope {
                tx: self.tx.clone(),
                signatures,
            }),
        })
    }

    /// Canonical XDR bytes of the signed envelope.
    pub fn to_xdr(&self) -> Result<Vec<u8>, TransactionError> {
        self.envelope()?.encode().map_err(TransactionError::Encode)
    }

    /// Base64 of the canonical envelope XDR. Deterministic for a given
    /// transaction and signature list; calling it has no side effects.
    pub fn serialize(&self) -> Result<String, TransactionError> {
        self.envelope()?
            .encode_base64()
            .map_err(TransactionError::Encode)
    }

    /// The transaction hash on `network`, which is also its ledger id.
    pub fn hash(&self, network: &Network) -> Result<[u8; HASH_LENGTH], TransactionError> {
        transaction_hash(&self.tx, network).map_err(TransactionError::Encode)
    }

    pub fn hash_hex(&self, network: &Network) -> Result<String, TransactionError> {
        Ok(hex::encode(self.hash(network)?))
    }

    /// `true` if any attached signature verifies under `public_key` for
    /// `network`.
    pub fn verify(&self, public_key: &PublicKey, network: &Network) -> Result<bool, TransactionError> {
        let hash = self.hash(network)?;
        Ok(self
            .signatures
            .iter()
            .any(|sig| verify_signature(public_key, &hash, sig)))
    }

    pub fn signatures(&self) -> &[DecoratedSignature] {
        &self.signatures
    }

    pub fn transaction(&self) -> &Transaction {
        &self.tx
    }

    /// `true` when serialization emits the legacy `TxV0` layout.
    pub fn is_legacy(&self) -> bool {
        self.legacy && to_legacy(&self.tx).is_some()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
