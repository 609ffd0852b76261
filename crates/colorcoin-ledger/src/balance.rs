//! Balance aggregation for one address.
//!
//! Sums confirmed and unconfirmed amounts from an [`AddressResponse`].
//! Asset definitions are attached afterwards by the client.

use std::str::FromStr;

use num_bigint::BigInt;

use crate::error::LedgerError;
use crate::types::AddressResponse;

/// Confirmed + unconfirmed totals of one address, before asset resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressTotals {
    /// Native total in satoshis.
    pub native: i64,
    /// `(asset address, quantity)` in wire order.
    pub assets: Vec<(String, BigInt)>,
}

/// Combine the confirmed and unconfirmed parts of an address state.
///
/// Fails on a native overflow or a quantity that is not a decimal integer.
pub fn aggregate(resp: &AddressResponse) -> Result<AddressTotals, LedgerError> {
    let native = resp
        .balance
        .checked_add(resp.unconfirmed_balance)
        .ok_or_else(|| {
            LedgerError::InvalidData(format!(
                "native balance overflow: {} + {}",
                resp.balance, resp.unconfirmed_balance
            ))
        })?;

    let assets = resp
        .assets
        .iter()
        .map(|entry| {
            let confirmed = parse_quantity(&entry.balance)?;
            let unconfirmed = parse_quantity(&entry.unconfirmed_balance)?;
            Ok((entry.address.clone(), confirmed + unconfirmed))
        })
        .collect::<Result<Vec<_>, LedgerError>>()?;

    Ok(AddressTotals { native, assets })
}

/// Parse a decimal-string asset quantity.
///
/// Accepts an optional sign followed by ASCII digits only; digit
/// separators and whitespace are rejected.
pub fn parse_quantity(raw: &str) -> Result<BigInt, LedgerError> {
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LedgerError::InvalidData(format!(
            "invalid asset quantity {raw:?}"
        )));
    }
    BigInt::from_str(raw)
        .map_err(|e| LedgerError::InvalidData(format!("invalid asset quantity {raw:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AddressAssetEntry;

    fn entry(address: &str, balance: &str, unconfirmed: &str) -> AddressAssetEntry {
        AddressAssetEntry {
            address: address.to_string(),
            balance: balance.to_string(),
            unconfirmed_balance: unconfirmed.to_string(),
        }
    }

    #[test]
    fn test_native_sums_confirmed_and_unconfirmed() {
        let resp = AddressResponse {
            balance: 100,
            unconfirmed_balance: 50,
            assets: vec![],
        };
        let totals = aggregate(&resp).unwrap();
        assert_eq!(totals.native, 150);
        assert!(totals.assets.is_empty());
    }

    #[test]
    fn test_negative_unconfirmed_reduces_native() {
        let resp = AddressResponse {
            balance: 100,
            unconfirmed_balance: -30,
            assets: vec![],
        };
        assert_eq!(aggregate(&resp).unwrap().native, 70);
    }

    #[test]
    fn test_asset_quantities_beyond_u64() {
        let resp = AddressResponse {
            balance: 0,
            unconfirmed_balance: 0,
            assets: vec![
                entry("AX1", "18446744073709551615", "1"),
                entry("AX2", "10", "-4"),
            ],
        };
        let totals = aggregate(&resp).unwrap();
        assert_eq!(
            totals.assets[0],
            ("AX1".to_string(), BigInt::from_str("18446744073709551616").unwrap())
        );
        assert_eq!(totals.assets[1], ("AX2".to_string(), BigInt::from(6)));
    }

    #[test]
    fn test_bad_quantity_fails_whole_aggregate() {
        let resp = AddressResponse {
            balance: 0,
            unconfirmed_balance: 0,
            assets: vec![entry("AX1", "5", "5"), entry("AX2", "1.5", "0")],
        };
        let err = aggregate(&resp).unwrap_err();
        assert!(err.to_string().contains("1.5"));
    }

    #[test]
    fn test_parse_quantity_strict_decimal() {
        assert_eq!(parse_quantity("+7").unwrap(), BigInt::from(7));
        assert_eq!(parse_quantity("-12").unwrap(), BigInt::from(-12));
        assert_eq!(parse_quantity("007").unwrap(), BigInt::from(7));

        for raw in ["1_000", "", "-", "+", " 5", "5 ", "1e3", "0x10", "--1", "+-1"] {
            assert!(
                matches!(parse_quantity(raw), Err(LedgerError::InvalidData(_))),
                "accepted {raw:?}"
            );
        }
    }

    #[test]
    fn test_separator_in_balance_fails_aggregate() {
        let resp = AddressResponse {
            balance: 0,
            unconfirmed_balance: 0,
            assets: vec![entry("AX1", "1_000", "0")],
        };
        assert!(matches!(aggregate(&resp), Err(LedgerError::InvalidData(_))));
    }

    #[test]
    fn test_native_overflow() {
        let resp = AddressResponse {
            balance: i64::MAX,
            unconfirmed_balance: 1,
            assets: vec![],
        };
        assert!(matches!(aggregate(&resp), Err(LedgerError::InvalidData(_))));
    }
}
