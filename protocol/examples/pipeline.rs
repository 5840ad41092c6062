//! Builds and signs one payment end to end, printing each artifact.
//!
//! Run with:
//!   cargo run --example pipeline
//!
//! `RUST_LOG=txe_protocol=debug` shows the builder and signer events, and
//! `LOG_FORMAT=json` switches them to JSON lines. Logs go to stderr; the
//! base64 artifacts go to stdout.

use anyhow::{Context, Result};

use txe_protocol::config::{network_name, STROOPS_PER_UNIT, TEST_NETWORK_PASSPHRASE};
use txe_protocol::crypto::keys::Keypair;
use txe_protocol::logging::{init_logging, LogFormat};
use txe_protocol::transaction::{EnvelopeSigner, Network, TransactionBuilder};
use txe_protocol::xdr::{muxed_account, muxed_address, payment, skeleton, Asset, EncodeXdr};

const SOURCE_SEED: &str = "SDKJ2BUKQ5TCMSLRQBAFSEVJ3LBXFGHEKKPTYNCDWSOJ4CFGFR5SKRME";
const DESTINATION: &str = "GCICVEBF5JYDBCTR3TXFGN56WGYBAKKWVHUQYPM72F6ZEQ7BDQZT4NFZ";

fn main() -> Result<()> {
    let format = LogFormat::from_str_lossy(&std::env::var("LOG_FORMAT").unwrap_or_default());
    init_logging("txe_protocol=info", format).context("installing log subscriber")?;

    let seed = std::env::var("TXE_SEED").unwrap_or_else(|_| SOURCE_SEED.to_string());
    let passphrase =
        std::env::var("TXE_NETWORK").unwrap_or_else(|_| TEST_NETWORK_PASSPHRASE.to_string());

    let keypair = Keypair::from_secret_seed(&seed).context("parsing source seed")?;
    let destination = muxed_account(DESTINATION)?;
    println!("source:      {}", keypair.address());
    println!("destination: {}", muxed_address(&destination));
    println!("network:     {}", network_name(&passphrase));

    // 1. Encode the operation the way an external producer would hand it over.
    let op_b64 = payment(destination, Asset::Native, 50 * STROOPS_PER_UNIT).encode_base64()?;
    println!("operation:   {}", op_b64);

    // 2. Assemble the transaction.
    let mut builder = TransactionBuilder::create(skeleton(keypair.public_key().into(), 10, 1));
    builder.append_operation(&op_b64)?;
    let tx_b64 = builder.serialize()?;
    println!("transaction: {}", tx_b64);

    // 3. Sign and emit the envelope.
    let mut signer = EnvelopeSigner::create(&tx_b64)?;
    signer.sign(&seed, &passphrase)?;

    let network = Network::new(&passphrase);
    println!("tx hash:     {}", signer.hash_hex(&network)?);
    println!("envelope:    {}", signer.serialize()?);

    anyhow::ensure!(
        signer.verify(&keypair.public_key(), &network)?,
        "signature did not verify against the source key"
    );

    Ok(())
}
