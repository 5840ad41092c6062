//! Transactions and the two envelope layouts that carry them.
//!
//! # Canonical Byte Format
//!
//! ```text
//! Transaction
//!   source_account   MuxedAccount      36 (44 if multiplexed)
//!   fee              u32                4
//!   seq_num          i64                8
//!   cond             Preconditions      4 (+16 for time bounds)
//!   memo             Memo               4 (+ arm)
//!   operations       Operation<100>     4 + n * op
//!   ext              union (v = 0)      4
//!
//! TransactionEnvelope::TxV0 (legacy)
//!   tag              i32 = 0            4
//!   tx               TransactionV0      source key without its type tag
//!   signatures       DecoratedSignature<20>
//! ```
//!
//! A plain-key source with no preconditions beyond time bounds encodes the
//! same bytes either way: the legacy envelope tag `0` sits exactly where
//! the key type tag would. [`to_legacy`] and [`from_legacy`] move between
//! the two shapes without changing what gets hashed.

use stellar_xdr::curr::{
    Memo, MuxedAccount, Operation, Preconditions, SequenceNumber, Transaction, TransactionExt,
    TransactionV0, TransactionV0Ext, VecM,
};

use super::error::XdrError;
use super::operation::check_operation;

/// A transaction with no memo, no time bounds and no operations yet.
///
/// `fee` and `seq_num` are taken as given. Whether they are acceptable is
/// decided by the ledger, which is the only party that knows the account's
/// current sequence.
pub fn skeleton(source_account: MuxedAccount, fee: u32, seq_num: i64) -> Transaction {
    Transaction {
        source_account,
        fee,
        seq_num: SequenceNumber(seq_num),
        cond: Preconditions::None,
        memo: Memo::None,
        operations: VecM::default(),
        ext: TransactionExt::V0,
    }
}

/// Checks every operation the schema accepted (see
/// [`super::operation::check_operation`]).
pub fn check_transaction(tx: &Transaction) -> Result<(), XdrError> {
    tx.operations.iter().try_for_each(check_operation)
}

/// The legacy form of `tx`, if it has one: plain-key source, at most time
/// bounds as preconditions, no extension.
pub fn to_legacy(tx: &Transaction) -> Option<TransactionV0> {
    let MuxedAccount::Ed25519(source) = &tx.source_account else {
        return None;
    };
    let time_bounds = match &tx.cond {
        Preconditions::None => None,
        Preconditions::Time(bounds) => Some(bounds.clone()),
        Preconditions::V2(_) => return None,
    };
    if !matches!(tx.ext, TransactionExt::V0) {
        return None;
    }

    Some(TransactionV0 {
        source_account_ed25519: source.clone(),
        fee: tx.fee,
        seq_num: tx.seq_num.clone(),
        time_bounds,
        memo: tx.memo.clone(),
        operations: tx.operations.clone(),
        ext: TransactionV0Ext::V0,
    })
}

pub fn from_legacy(tx: TransactionV0) -> Transaction {
    Transaction {
        source_account: MuxedAccount::Ed25519(tx.source_account_ed25519),
        fee: tx.fee,
        seq_num: tx.seq_num,
        cond: match tx.time_bounds {
            Some(bounds) => Preconditions::Time(bounds),
            None => Preconditions::None,
        },
        memo: tx.memo,
        operations: tx.operations,
        ext: TransactionExt::V0,
    }
}
