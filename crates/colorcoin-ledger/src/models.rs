//! Domain models: asset definitions, balances, and per-asset history entries.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use num_bigint::BigInt;
use num_traits::Zero;

use crate::types::AssetDefinitionResponse;

/// Display metadata of a colored asset, keyed by its asset address.
///
/// A stub carries only the address: names and icon are unset and
/// divisibility is zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetDefinition {
    /// Asset address (identity).
    pub asset_address: String,
    /// Display name.
    pub name: Option<String>,
    /// Short display name (ticker).
    pub name_short: Option<String>,
    /// Number of decimal places used when displaying quantities.
    pub divisibility: u32,
    /// Icon reference.
    pub icon_url: Option<String>,
}

impl AssetDefinition {
    /// Build a stub definition containing only the address.
    pub fn stub(asset_address: impl Into<String>) -> Self {
        AssetDefinition {
            asset_address: asset_address.into(),
            name: None,
            name_short: None,
            divisibility: 0,
            icon_url: None,
        }
    }
}

impl From<AssetDefinitionResponse> for AssetDefinition {
    fn from(resp: AssetDefinitionResponse) -> Self {
        AssetDefinition {
            asset_address: resp.asset_address,
            name: Some(resp.name),
            name_short: Some(resp.name_short),
            divisibility: resp.divisibility,
            icon_url: Some(resp.icon_url),
        }
    }
}

/// Outcome of resolving an asset address through the metadata cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Metadata was fetched successfully.
    Resolved(AssetDefinition),
    /// The lookup failed; a stub stands in for the definition.
    Stub(AssetDefinition),
}

impl Resolution {
    /// Borrow the definition, resolved or stub.
    pub fn definition(&self) -> &AssetDefinition {
        match self {
            Resolution::Resolved(def) | Resolution::Stub(def) => def,
        }
    }

    /// Take the definition, resolved or stub.
    pub fn into_definition(self) -> AssetDefinition {
        match self {
            Resolution::Resolved(def) | Resolution::Stub(def) => def,
        }
    }

    /// Whether this is a stub.
    pub fn is_stub(&self) -> bool {
        matches!(self, Resolution::Stub(_))
    }
}

/// Quantity of one asset held by an address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetBalance {
    /// The asset.
    pub asset: AssetDefinition,
    /// Confirmed plus unconfirmed quantity.
    pub quantity: BigInt,
}

/// Native and per-asset balance of one address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressBalance {
    /// Confirmed plus unconfirmed native balance in satoshis.
    pub native: i64,
    /// Asset balances in the order the service listed them.
    pub assets: Vec<AssetBalance>,
}

impl AddressBalance {
    /// Find the balance of one asset by its address.
    pub fn asset(&self, asset_address: &str) -> Option<&AssetBalance> {
        self.assets
            .iter()
            .find(|b| b.asset.asset_address == asset_address)
    }
}

/// The effect of one transaction on one address for one asset.
///
/// A transaction moving several assets produces several entries sharing
/// the same `transaction_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleAssetTransaction {
    /// Transaction hash.
    pub transaction_id: String,
    /// Block time; `None` while unconfirmed.
    pub confirmed_at: Option<DateTime<Utc>>,
    /// The asset moved; `None` for the native currency.
    pub asset: Option<AssetDefinition>,
    /// Signed net change.
    pub delta: BigInt,
}

/// Per-asset totals of a reconstructed history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetBalances {
    /// Native total in satoshis.
    pub native: BigInt,
    /// Asset totals keyed by asset address, in first-seen order.
    pub assets: IndexMap<String, BigInt>,
}

impl NetBalances {
    /// Total for one asset, zero if it never appeared.
    pub fn asset(&self, asset_address: &str) -> BigInt {
        self.assets
            .get(asset_address)
            .cloned()
            .unwrap_or_else(BigInt::zero)
    }
}
