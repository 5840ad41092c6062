// Build & sign benchmarks for the envelope pipeline.
//
// Covers seed decoding, operation encoding, transaction assembly, hashing,
// and envelope signing with growing signature counts.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use txe_protocol::config::BASE_FEE;
use txe_protocol::crypto::keys::Keypair;
use txe_protocol::transaction::{transaction_hash, EnvelopeSigner, Network, TransactionBuilder};
use txe_protocol::xdr::{muxed_account, payment, skeleton, Asset, EncodeXdr, Transaction};

const SEED: &str = "SDKJ2BUKQ5TCMSLRQBAFSEVJ3LBXFGHEKKPTYNCDWSOJ4CFGFR5SKRME";
const DEST: &str = "GCICVEBF5JYDBCTR3TXFGN56WGYBAKKWVHUQYPM72F6ZEQ7BDQZT4NFZ";

fn payment_b64() -> String {
    let dest = muxed_account(DEST).unwrap();
    payment(dest, Asset::Native, 500_000_000)
        .encode_base64()
        .unwrap()
}

fn sample_transaction(ops: usize) -> Transaction {
    let source = Keypair::from_secret_seed(SEED).unwrap().public_key().into();
    let op = payment_b64();
    let mut builder = TransactionBuilder::create(skeleton(source, BASE_FEE, 1));
    for _ in 0..ops {
        builder.append_operation(&op).unwrap();
    }
    builder.into_transaction()
}

fn bench_seed_decode(c: &mut Criterion) {
    c.bench_function("strkey/keypair_from_seed", |b| {
        b.iter(|| Keypair::from_secret_seed(SEED).unwrap());
    });
}

fn bench_encode_operation(c: &mut Criterion) {
    c.bench_function("xdr/encode_payment", |b| {
        b.iter(payment_b64);
    });
}

fn bench_build_transaction(c: &mut Criterion) {
    let mut group = c.benchmark_group("builder/serialize");

    for ops in [1, 10, 100] {
        group.throughput(Throughput::Elements(ops as u64));
        group.bench_with_input(BenchmarkId::from_parameter(ops), &ops, |b, &ops| {
            b.iter(|| {
                TransactionBuilder::create(sample_transaction(ops))
                    .serialize()
                    .unwrap()
            });
        });
    }

    group.finish();
}

fn bench_transaction_hash(c: &mut Criterion) {
    let tx = sample_transaction(1);
    let network = Network::testnet();

    c.bench_function("signing/transaction_hash", |b| {
        b.iter(|| transaction_hash(&tx, &network).unwrap());
    });
}

fn bench_sign_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("signing/envelope");
    let tx = sample_transaction(1);
    let network = Network::testnet();

    for signers in [1, 5, 20] {
        let keypairs: Vec<Keypair> = (0..signers).map(|_| Keypair::random()).collect();

        group.throughput(Throughput::Elements(signers as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(signers),
            &keypairs,
            |b, keypairs| {
                b.iter(|| {
                    let mut signer = EnvelopeSigner::from_transaction(tx.clone());
                    for kp in keypairs {
                        signer.sign_with_keypair(kp, &network).unwrap();
                    }
                    signer.serialize().unwrap()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_seed_decode,
    bench_encode_operation,
    bench_build_transaction,
    bench_transaction_hash,
    bench_sign_envelope,
);
criterion_main!(benches);
