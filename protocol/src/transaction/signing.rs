//! Transaction hashing and Ed25519 signing.
//!
//! What gets signed is not the transaction bytes themselves but the hash of
//! the *signature base*, the XDR of a `TransactionSignaturePayload`:
//!
//! ```text
//! SHA-256( network_id || ENVELOPE_TYPE_TX (i32, BE) || XDR(transaction) )
//! ```
//!
//! The network id pins the signature to one network, the type tag keeps a
//! transaction signature from being mistaken for any other signed payload,
//! and the XDR pins it to these exact transaction bytes.

use super::network::Network;
use crate::config::HASH_LENGTH;
use crate::crypto::hash::sha256_array;
use crate::crypto::keys::{Keypair, PublicKey};
use crate::xdr::{
    DecoratedSignature, EncodeXdr, Hash, Signature, SignatureHint, Transaction,
    TransactionSignaturePayload, TransactionSignaturePayloadTaggedTransaction, XdrError,
};

/// The bytes whose hash is signed: `network_id || type tag || XDR(tx)`.
pub fn signature_base(tx: &Transaction, network: &Network) -> Result<Vec<u8>, XdrError> {
    TransactionSignaturePayload {
        network_id: Hash(network.id()),
        tagged_transaction: TransactionSignaturePayloadTaggedTransaction::Tx(tx.clone()),
    }
    .encode()
}

/// The transaction hash on `network`: what gets signed, and the
/// transaction's id once it lands on the ledger.
pub fn transaction_hash(tx: &Transaction, network: &Network) -> Result<[u8; HASH_LENGTH], XdrError> {
    Ok(sha256_array(&signature_base(tx, network)?))
}

/// Sign an already-computed transaction hash.
pub fn sign_hash(keypair: &Keypair, hash: &[u8; HASH_LENGTH]) -> Result<DecoratedSignature, XdrError> {
    let signature = keypair.sign(hash);
    Ok(DecoratedSignature {
        hint: SignatureHint(keypair.signature_hint()),
        signature: Signature(signature.to_vec().try_into()?),
    })
}

/// Does `signature` verify as `public_key` signing `hash`? The hint must
/// match too; a signature under the right key with the wrong hint is one a
/// ledger node would never try against that key.
pub fn verify_signature(
    public_key: &PublicKey,
    hash: &[u8; HASH_LENGTH],
    signature: &DecoratedSignature,
) -> bool {
    signature.hint.0 == public_key.signature_hint()
        && public_key.verify(hash, signature.signature.0.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ENVELOPE_TYPE_TX;
    use crate::xdr::{muxed_account, payment, skeleton, Asset};

    const SEED: &str = "SDKJ2BUKQ5TCMSLRQBAFSEVJ3LBXFGHEKKPTYNCDWSOJ4CFGFR5SKRME";
    const DEST: &str = "GCICVEBF5JYDBCTR3TXFGN56WGYBAKKWVHUQYPM72F6ZEQ7BDQZT4NFZ";

    fn sample_tx(kp: &Keypair) -> Transaction {
        let mut tx = skeleton(kp.public_key().into(), 10, 1);
        tx.operations = vec![payment(muxed_account(DEST).unwrap(), Asset::Native, 500_000_000)]
            .try_into()
            .unwrap();
        tx
    }

    #[test]
    fn signature_base_layout() {
        let kp = Keypair::from_secret_seed(SEED).unwrap();
        let tx = sample_tx(&kp);
        let base = signature_base(&tx, &Network::testnet()).unwrap();
        assert_eq!(&base[..32], &Network::testnet().id());
        assert_eq!(&base[32..36], &ENVELOPE_TYPE_TX.to_be_bytes());
        assert_eq!(&base[36..], tx.encode().unwrap().as_slice());
    }

    #[test]
    fn hash_is_digest_of_signature_base() {
        let kp = Keypair::from_secret_seed(SEED).unwrap();
        let tx = sample_tx(&kp);
        for network in [Network::testnet(), Network::public(), Network::new("Standalone")] {
            let base = signature_base(&tx, &network).unwrap();
            assert_eq!(transaction_hash(&tx, &network).unwrap(), sha256_array(&base));
        }
    }

    #[test]
    fn reference_transaction_hash() {
        let kp = Keypair::from_secret_seed(SEED).unwrap();
        let hash = transaction_hash(&sample_tx(&kp), &Network::testnet()).unwrap();
        assert_eq!(
            hex::encode(hash),
            "8b2b0ca7228032b442062b1b4ddaf3f70159ff436d765d126ff6e060a974b5a7"
        );
    }

    #[test]
    fn signed_hash_verifies() {
        let kp = Keypair::from_secret_seed(SEED).unwrap();
        let hash = transaction_hash(&sample_tx(&kp), &Network::testnet()).unwrap();
        let sig = sign_hash(&kp, &hash).unwrap();
        assert_eq!(sig.signature.0.len(), 64);
        assert_eq!(sig.hint.0, kp.signature_hint());
        assert!(verify_signature(&kp.public_key(), &hash, &sig));
    }

    #[test]
    fn signature_does_not_verify_on_other_network() {
        let kp = Keypair::from_secret_seed(SEED).unwrap();
        let tx = sample_tx(&kp);
        let test_hash = transaction_hash(&tx, &Network::testnet()).unwrap();
        let sig = sign_hash(&kp, &test_hash).unwrap();

        let public_hash = transaction_hash(&tx, &Network::public()).unwrap();
        assert!(!verify_signature(&kp.public_key(), &public_hash, &sig));
    }

    #[test]
    fn hint_mismatch_fails_verification() {
        let kp = Keypair::from_secret_seed(SEED).unwrap();
        let hash = transaction_hash(&sample_tx(&kp), &Network::testnet()).unwrap();
        let mut sig = sign_hash(&kp, &hash).unwrap();
        sig.hint = SignatureHint([0, 0, 0, 0]);
        assert!(!verify_signature(&kp.public_key(), &hash, &sig));
    }
}
