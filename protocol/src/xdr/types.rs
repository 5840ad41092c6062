//! Ledger value helpers shared by operations and transactions: account ids,
//! assets, memos and time bounds.
//!
//! The values themselves are the `stellar-xdr` schema types. This module
//! adds the conversions the pipeline needs (strkey text, crate keys) and
//! the checks the schema leaves open: asset codes must be alphanumeric and
//! zero-padded, memo text must fit in 28 bytes.

use stellar_xdr::curr::{
    AccountId, AlphaNum12, AlphaNum4, Asset, AssetCode12, AssetCode4, Memo, MuxedAccount,
    MuxedAccountMed25519, PublicKey as XdrPublicKey, StringM, TimeBounds, TimePoint, Uint256,
};

use super::error::XdrError;
use crate::config::{ASSET_CODE12_LENGTH, ASSET_CODE4_LENGTH, MAX_MEMO_TEXT_LENGTH, PUBLIC_KEY_LENGTH};
use crate::crypto::keys::PublicKey;
use crate::crypto::strkey::{self, KeyError};

// ---------------------------------------------------------------------------
// Accounts
// ---------------------------------------------------------------------------

pub fn account_id_from_bytes(key: [u8; PUBLIC_KEY_LENGTH]) -> AccountId {
    AccountId(XdrPublicKey::PublicKeyTypeEd25519(Uint256(key)))
}

/// Parse a `G...` address. Only the strkey framing is checked; whether
/// the key is a valid curve point is the ledger's problem, not ours.
pub fn account_id(address: &str) -> Result<AccountId, KeyError> {
    Ok(account_id_from_bytes(strkey::decode_account_id(address)?))
}

pub fn account_key(account: &AccountId) -> &[u8; PUBLIC_KEY_LENGTH] {
    let AccountId(XdrPublicKey::PublicKeyTypeEd25519(Uint256(key))) = account;
    key
}

pub fn account_address(account: &AccountId) -> String {
    strkey::encode_account_id(account_key(account))
}

/// Parse a payment destination: `G...` or multiplexed `M...`.
pub fn muxed_account(address: &str) -> Result<MuxedAccount, KeyError> {
    Ok(match strkey::decode_muxed(address)? {
        (key, None) => MuxedAccount::Ed25519(Uint256(key)),
        (key, Some(id)) => MuxedAccount::MuxedEd25519(MuxedAccountMed25519 {
            id,
            ed25519: Uint256(key),
        }),
    })
}

/// The underlying key, with any multiplexing id dropped.
pub fn muxed_key(account: &MuxedAccount) -> &[u8; PUBLIC_KEY_LENGTH] {
    match account {
        MuxedAccount::Ed25519(Uint256(key)) => key,
        MuxedAccount::MuxedEd25519(MuxedAccountMed25519 {
            ed25519: Uint256(key),
            ..
        }) => key,
    }
}

pub fn muxed_address(account: &MuxedAccount) -> String {
    match account {
        MuxedAccount::Ed25519(Uint256(key)) => strkey::encode_account_id(key),
        MuxedAccount::MuxedEd25519(MuxedAccountMed25519 {
            id,
            ed25519: Uint256(key),
        }) => strkey::encode_muxed(key, *id),
    }
}

impl From<PublicKey> for AccountId {
    fn from(pk: PublicKey) -> Self {
        account_id_from_bytes(*pk.as_bytes())
    }
}

impl From<PublicKey> for MuxedAccount {
    fn from(pk: PublicKey) -> Self {
        MuxedAccount::Ed25519(Uint256(*pk.as_bytes()))
    }
}

// ---------------------------------------------------------------------------
// Assets
// ---------------------------------------------------------------------------

/// An issued asset. Codes of 1-4 characters become alphanum4, 5-12
/// become alphanum12. Only ASCII letters and digits are allowed.
pub fn credit_asset(code: &str, issuer: AccountId) -> Result<Asset, XdrError> {
    let valid_chars = code.bytes().all(|b| b.is_ascii_alphanumeric());
    if code.is_empty() || !valid_chars {
        return Err(XdrError::InvalidAssetCode(code.to_string()));
    }

    match code.len() {
        1..=ASSET_CODE4_LENGTH => {
            let mut padded = [0u8; ASSET_CODE4_LENGTH];
            padded[..code.len()].copy_from_slice(code.as_bytes());
            Ok(Asset::CreditAlphanum4(AlphaNum4 {
                asset_code: AssetCode4(padded),
                issuer,
            }))
        }
        len if len <= ASSET_CODE12_LENGTH => {
            let mut padded = [0u8; ASSET_CODE12_LENGTH];
            padded[..len].copy_from_slice(code.as_bytes());
            Ok(Asset::CreditAlphanum12(AlphaNum12 {
                asset_code: AssetCode12(padded),
                issuer,
            }))
        }
        _ => Err(XdrError::InvalidAssetCode(code.to_string())),
    }
}

fn raw_code(asset: &Asset) -> Option<&[u8]> {
    match asset {
        Asset::Native => None,
        Asset::CreditAlphanum4(AlphaNum4 { asset_code, .. }) => Some(&asset_code.0),
        Asset::CreditAlphanum12(AlphaNum12 { asset_code, .. }) => Some(&asset_code.0),
    }
}

/// The asset code with padding stripped, or `None` for native.
pub fn asset_code(asset: &Asset) -> Option<String> {
    let raw = raw_code(asset)?;
    let end = raw.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    Some(String::from_utf8_lossy(&raw[..end]).into_owned())
}

pub fn asset_issuer(asset: &Asset) -> Option<&AccountId> {
    match asset {
        Asset::Native => None,
        Asset::CreditAlphanum4(AlphaNum4 { issuer, .. })
        | Asset::CreditAlphanum12(AlphaNum12 { issuer, .. }) => Some(issuer),
    }
}

/// Holds a decoded asset to the same rules as [`credit_asset`]: letters
/// and digits, then only zero padding, and a length that matches the
/// variant (1-4 for alphanum4, 5-12 for alphanum12).
///
/// The schema itself accepts any bytes in the code field, so this runs
/// wherever assets enter from the wire.
pub fn check_asset(asset: &Asset) -> Result<(), XdrError> {
    let (raw, min) = match asset {
        Asset::Native => return Ok(()),
        Asset::CreditAlphanum4(AlphaNum4 { asset_code, .. }) => (&asset_code.0[..], 1),
        Asset::CreditAlphanum12(AlphaNum12 { asset_code, .. }) => {
            (&asset_code.0[..], ASSET_CODE4_LENGTH + 1)
        }
    };

    let len = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
    let body_ok = raw[..len].iter().all(|b| b.is_ascii_alphanumeric());
    let padding_ok = raw[len..].iter().all(|&b| b == 0);
    if len < min || !body_ok || !padding_ok {
        return Err(XdrError::InvalidAssetCode(
            String::from_utf8_lossy(raw).into_owned(),
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Memo & time bounds
// ---------------------------------------------------------------------------

/// A text memo of at most 28 bytes. The field is `string<28>` on the wire,
/// which is raw bytes: UTF-8 is conventional, not required.
pub fn memo_text(text: impl Into<Vec<u8>>) -> Result<Memo, XdrError> {
    let bytes = text.into();
    let actual = bytes.len();
    let text: StringM<28> = bytes.try_into().map_err(|_| XdrError::LengthExceeded {
        max: MAX_MEMO_TEXT_LENGTH,
        actual,
    })?;
    Ok(Memo::Text(text))
}

/// Validity window in Unix seconds. `max_time == 0` means no upper bound.
/// Not checked here; the ledger enforces it at apply time.
pub fn time_bounds(min_time: u64, max_time: u64) -> TimeBounds {
    TimeBounds {
        min_time: TimePoint(min_time),
        max_time: TimePoint(max_time),
    }
}
