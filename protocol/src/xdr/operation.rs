//! Operations: the individual actions a transaction carries.
//!
//! The operation set is the schema's closed `OperationBody` union, decoded
//! exhaustively by `stellar-xdr`; an unknown tag is a decode error rather
//! than an opaque passthrough. This crate constructs the two kinds its
//! pipeline builds (`CreateAccount`, `Payment`) and checks every decoded
//! operation's assets before accepting it.
//!
//! Operations are usually produced on their own and handed over as base64
//! (see [`super::EncodeXdr::encode_base64`]), then decoded again by the
//! transaction builder. That boundary lets them be built by a different
//! party than the one assembling the transaction.

use stellar_xdr::curr::{
    AccountId, Asset, ClawbackOp, CreateAccountOp, CreatePassiveSellOfferOp, ManageBuyOfferOp,
    ManageSellOfferOp, MuxedAccount, Operation, OperationBody, PathPaymentStrictReceiveOp,
    PathPaymentStrictSendOp, PaymentOp,
};

use super::error::XdrError;
use super::types::check_asset;

/// A payment sourced from the transaction's account. `amount` is in the
/// asset's smallest unit (stroops).
pub fn payment(destination: MuxedAccount, asset: Asset, amount: i64) -> Operation {
    Operation {
        source_account: None,
        body: OperationBody::Payment(PaymentOp {
            destination,
            asset,
            amount,
        }),
    }
}

/// Fund and create a new account, sourced from the transaction's account.
pub fn create_account(destination: AccountId, starting_balance: i64) -> Operation {
    Operation {
        source_account: None,
        body: OperationBody::CreateAccount(CreateAccountOp {
            destination,
            starting_balance,
        }),
    }
}

/// Every asset an operation names, in field order.
fn assets(body: &OperationBody) -> Vec<&Asset> {
    match body {
        OperationBody::Payment(PaymentOp { asset, .. })
        | OperationBody::Clawback(ClawbackOp { asset, .. }) => vec![asset],
        OperationBody::PathPaymentStrictReceive(PathPaymentStrictReceiveOp {
            send_asset,
            dest_asset,
            path,
            ..
        })
        | OperationBody::PathPaymentStrictSend(PathPaymentStrictSendOp {
            send_asset,
            dest_asset,
            path,
            ..
        }) => [send_asset, dest_asset]
            .into_iter()
            .chain(path.iter())
            .collect(),
        OperationBody::ManageSellOffer(ManageSellOfferOp { selling, buying, .. })
        | OperationBody::ManageBuyOffer(ManageBuyOfferOp { selling, buying, .. })
        | OperationBody::CreatePassiveSellOffer(CreatePassiveSellOfferOp {
            selling, buying, ..
        }) => vec![selling, buying],
        _ => Vec::new(),
    }
}

/// Rejects a decoded operation whose assets the schema accepts but the
/// ledger never would (see [`check_asset`]).
pub fn check_operation(op: &Operation) -> Result<(), XdrError> {
    assets(&op.body).into_iter().try_for_each(check_asset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xdr::types::{account_id, credit_asset, muxed_account, muxed_address};
    use crate::xdr::{DecodeXdr, EncodeXdr};
    use stellar_xdr::curr::{AlphaNum4, AssetCode4, VecM};

    const DEST: &str = "GCICVEBF5JYDBCTR3TXFGN56WGYBAKKWVHUQYPM72F6ZEQ7BDQZT4NFZ";

    fn dest() -> MuxedAccount {
        muxed_account(DEST).unwrap()
    }

    fn bad_asset() -> Asset {
        Asset::CreditAlphanum4(AlphaNum4 {
            asset_code: AssetCode4(*b"A-B\0"),
            issuer: account_id(DEST).unwrap(),
        })
    }

    #[test]
    fn native_payment_matches_reference_encoding() {
        let op = payment(dest(), Asset::Native, 50 * 10_000_000);
        assert_eq!(
            op.encode_base64().unwrap(),
            "AAAAAAAAAAEAAAAAkCqQJepwMIpx3O5TN76xsBApVqnpDD2f0X2SQ+EcMz4AAAAAAAAAAB3NZQA="
        );
    }

    #[test]
    fn native_payment_is_56_bytes() {
        // source flag + tag + account id + asset tag + amount
        let op = payment(dest(), Asset::Native, 1);
        assert_eq!(op.encode().unwrap().len(), 4 + 4 + 36 + 4 + 8);
    }

    #[test]
    fn payment_fields_survive_decoding() {
        let op = payment(dest(), Asset::Native, 500_000_000);
        let decoded = Operation::decode_base64(&op.encode_base64().unwrap()).unwrap();
        match decoded.body {
            OperationBody::Payment(p) => {
                assert_eq!(muxed_address(&p.destination), DEST);
                assert_eq!(p.asset, Asset::Native);
                assert_eq!(p.amount, 500_000_000);
            }
            other => panic!("expected payment, got {:?}", other),
        }
    }

    #[test]
    fn source_account_override_is_encoded() {
        let mut op = create_account(account_id(DEST).unwrap(), 10);
        op.source_account = Some(dest());
        let bytes = op.encode().unwrap();
        assert_eq!(&bytes[..4], &[0, 0, 0, 1]);
        assert_eq!(Operation::decode(&bytes).unwrap(), op);
        assert_eq!(op.body.name(), "CreateAccount");
    }

    #[test]
    fn unknown_operation_type_rejected() {
        let mut bytes = payment(dest(), Asset::Native, 1).encode().unwrap();
        bytes[7] = 99;
        assert!(matches!(
            Operation::decode(&bytes),
            Err(XdrError::Schema(_))
        ));
    }

    #[test]
    fn truncated_operation_rejected() {
        let bytes = payment(dest(), Asset::Native, 1).encode().unwrap();
        assert_eq!(
            Operation::decode(&bytes[..bytes.len() - 3]).unwrap_err(),
            XdrError::UnexpectedEof
        );
    }

    #[test]
    fn check_accepts_well_formed_assets() {
        let usd = credit_asset("USD", account_id(DEST).unwrap()).unwrap();
        assert!(check_operation(&payment(dest(), usd, 1)).is_ok());
        assert!(check_operation(&create_account(account_id(DEST).unwrap(), 1)).is_ok());
    }

    #[test]
    fn check_rejects_bad_payment_asset() {
        assert!(matches!(
            check_operation(&payment(dest(), bad_asset(), 1)),
            Err(XdrError::InvalidAssetCode(_))
        ));
    }

    #[test]
    fn check_walks_path_payment_path() {
        let op = Operation {
            source_account: None,
            body: OperationBody::PathPaymentStrictSend(PathPaymentStrictSendOp {
                send_asset: Asset::Native,
                send_amount: 1,
                destination: dest(),
                dest_asset: Asset::Native,
                dest_min: 1,
                path: VecM::try_from(vec![Asset::Native, bad_asset()]).unwrap(),
            }),
        };
        assert!(matches!(
            check_operation(&op),
            Err(XdrError::InvalidAssetCode(_))
        ));
    }
}
