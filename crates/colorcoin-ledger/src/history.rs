//! Transaction history reconstruction.
//!
//! Turns raw multi-input/multi-output transaction records into signed
//! per-asset balance changes seen from one address. The work is split in
//! two so the accounting stays free of I/O:
//!
//! 1. [`accumulate`] computes a [`TransactionEffect`] per record.
//! 2. [`TransactionEffect::into_transactions`] emits the entries, given a
//!    way to look up asset definitions.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use indexmap::IndexMap;
use num_bigint::BigInt;
use num_traits::Zero;

use crate::balance::parse_quantity;
use crate::error::LedgerError;
use crate::models::{AssetDefinition, NetBalances, SingleAssetTransaction};
use crate::types::{TransactionEndpoint, TransactionRecord};

/// Block times are cut to this many characters before parsing.
pub const BLOCK_TIME_PREFIX_LEN: usize = 21;

/// Layout of the leading part of a block time.
pub const BLOCK_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Net effect of one transaction on one address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionEffect {
    /// Transaction hash.
    pub transaction_id: String,
    /// Parsed block time, `None` while unconfirmed.
    pub confirmed_at: Option<DateTime<Utc>>,
    /// Native change in satoshis.
    pub native: BigInt,
    /// Asset changes keyed by asset address, in first-seen order.
    pub assets: IndexMap<String, BigInt>,
}

impl TransactionEffect {
    /// Emit the history entries for this effect.
    ///
    /// A native entry is produced only for a non-zero change; every touched
    /// asset produces an entry, zero included.
    pub fn into_transactions<F>(self, mut definition: F) -> Vec<SingleAssetTransaction>
    where
        F: FnMut(&str) -> AssetDefinition,
    {
        let mut entries = Vec::with_capacity(self.assets.len() + 1);

        if !self.native.is_zero() {
            entries.push(SingleAssetTransaction {
                transaction_id: self.transaction_id.clone(),
                confirmed_at: self.confirmed_at,
                asset: None,
                delta: self.native,
            });
        }

        for (asset_address, delta) in self.assets {
            entries.push(SingleAssetTransaction {
                transaction_id: self.transaction_id.clone(),
                confirmed_at: self.confirmed_at,
                asset: Some(definition(&asset_address)),
                delta,
            });
        }

        entries
    }
}

/// Parse a block time as sent by the ledger API.
///
/// The string is cut to its first [`BLOCK_TIME_PREFIX_LEN`] characters and
/// the leading `yyyy-MM-ddTHH:mm:ss` is read as UTC; whatever follows the
/// seconds within the cut (a fraction, a zone marker) is ignored. Strings
/// shorter than the cut are rejected.
pub fn parse_block_time(raw: &str) -> Result<DateTime<Utc>, LedgerError> {
    let truncated = raw
        .get(..BLOCK_TIME_PREFIX_LEN)
        .ok_or_else(|| LedgerError::InvalidData(format!("block time too short: {raw:?}")))?;

    let (naive, _) = NaiveDateTime::parse_and_remainder(truncated, BLOCK_TIME_FORMAT)
        .map_err(|e| LedgerError::InvalidData(format!("invalid block time {raw:?}: {e}")))?;

    Ok(Utc.from_utc_datetime(&naive))
}

/// Whether `endpoint` belongs to `address` alone.
///
/// Endpoints shared between several addresses are never attributed.
pub fn is_sole_address(endpoint: &TransactionEndpoint, address: &str) -> bool {
    matches!(endpoint.addresses.as_slice(), [only] if only == address)
}

/// Compute the effect of `record` on `address`.
///
/// Matching inputs are debited and matching outputs credited, for the
/// native value and for the carried asset quantity.
pub fn accumulate(address: &str, record: &TransactionRecord) -> Result<TransactionEffect, LedgerError> {
    let confirmed_at = record
        .block_time
        .as_deref()
        .map(parse_block_time)
        .transpose()?;

    let mut native = BigInt::zero();
    let mut assets: IndexMap<String, BigInt> = IndexMap::new();

    let debits = record.inputs.iter().map(|e| (e, false));
    let credits = record.outputs.iter().map(|e| (e, true));

    for (endpoint, credit) in debits.chain(credits) {
        if !is_sole_address(endpoint, address) {
            continue;
        }

        let value = BigInt::from(endpoint.value);
        let asset = endpoint
            .asset_address
            .as_deref()
            .map(|asset_address| {
                let raw = endpoint.asset_quantity.as_deref().ok_or_else(|| {
                    LedgerError::InvalidData(format!(
                        "transaction {}: asset {asset_address} without quantity",
                        record.hash
                    ))
                })?;
                Ok::<_, LedgerError>((asset_address, parse_quantity(raw)?))
            })
            .transpose()?;

        if credit {
            native += value;
        } else {
            native -= value;
        }

        if let Some((asset_address, quantity)) = asset {
            let total = assets.entry(asset_address.to_string()).or_insert_with(BigInt::zero);
            if credit {
                *total += quantity;
            } else {
                *total -= quantity;
            }
        }
    }

    Ok(TransactionEffect {
        transaction_id: record.hash.clone(),
        confirmed_at,
        native,
        assets,
    })
}

/// Compute the effects of every record, failing on the first malformed one.
pub fn accumulate_all(
    address: &str,
    records: &[TransactionRecord],
) -> Result<Vec<TransactionEffect>, LedgerError> {
    records.iter().map(|r| accumulate(address, r)).collect()
}

/// Sum a reconstructed history per asset.
pub fn net_balances(entries: &[SingleAssetTransaction]) -> NetBalances {
    let mut totals = NetBalances::default();
    for entry in entries {
        match &entry.asset {
            None => totals.native += &entry.delta,
            Some(asset) => {
                *totals
                    .assets
                    .entry(asset.asset_address.clone())
                    .or_insert_with(BigInt::zero) += &entry.delta;
            }
        }
    }
    totals
}
