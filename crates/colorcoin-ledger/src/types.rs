//! Ledger API configuration and wire models.
//!
//! The wire structs mirror the JSON bodies exactly; conversion into the
//! domain types in [`crate::models`] happens in the client.

use serde::{Deserialize, Serialize};

/// Client identifier used when none (or an invalid one) is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("colorcoin-ledger/", env!("CARGO_PKG_VERSION"));

/// Configuration for a [`LedgerClient`](crate::LedgerClient).
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// Base URL of the ledger API, without the `/v1` prefix.
    pub server_url: String,
    /// Client identifier sent as `User-Agent` on every request.
    pub user_agent: String,
}

impl LedgerConfig {
    /// Join an API path onto the configured base URL.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.server_url.trim_end_matches('/'), path)
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            server_url: "https://api.coinprism.com".to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// `GET /v1/assets/{address}` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetDefinitionResponse {
    /// Asset address.
    pub asset_address: String,
    /// Display name.
    pub name: String,
    /// Short display name (ticker).
    pub name_short: String,
    /// Number of decimal places.
    pub divisibility: u32,
    /// Icon reference.
    pub icon_url: String,
}

/// `GET /v1/addresses/{address}` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressResponse {
    /// Confirmed native balance in satoshis.
    pub balance: i64,
    /// Unconfirmed native balance in satoshis.
    pub unconfirmed_balance: i64,
    /// Per-asset balances.
    pub assets: Vec<AddressAssetEntry>,
}

/// One asset entry of an [`AddressResponse`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressAssetEntry {
    /// Asset address.
    pub address: String,
    /// Confirmed quantity, decimal string.
    pub balance: String,
    /// Unconfirmed quantity, decimal string.
    pub unconfirmed_balance: String,
}

/// One element of `GET /v1/addresses/{address}/transactions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Transaction hash.
    pub hash: String,
    /// Block time; absent or null while unconfirmed.
    #[serde(default)]
    pub block_time: Option<String>,
    /// Ordered inputs.
    pub inputs: Vec<TransactionEndpoint>,
    /// Ordered outputs.
    pub outputs: Vec<TransactionEndpoint>,
}

/// An input or output of a [`TransactionRecord`]; both share one shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionEndpoint {
    /// Addresses the script pays to or spends from.
    pub addresses: Vec<String>,
    /// Native value in satoshis.
    pub value: i64,
    /// Asset carried by this endpoint, if colored.
    #[serde(default)]
    pub asset_address: Option<String>,
    /// Asset quantity, decimal string; present when `asset_address` is.
    #[serde(default)]
    pub asset_quantity: Option<String>,
}

/// Request body for `POST /v1/sendbitcoin` and `POST /v1/sendasset`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SendRequest {
    /// Fee in satoshis.
    pub fees: u64,
    /// Source address.
    pub from: String,
    /// Recipients; this client always sends exactly one.
    pub to: Vec<SendRecipient>,
}

/// A recipient of a [`SendRequest`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SendRecipient {
    /// Destination address.
    pub address: String,
    /// Amount as a decimal string (satoshis or asset units).
    pub amount: String,
    /// Asset to send; omitted for native transfers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_address: Option<String>,
}

/// Response of the construction endpoints with `format=raw`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTransactionResponse {
    /// Hex-encoded unsigned transaction.
    pub raw: String,
}

/// Body of an error response (HTTP status 400 and above).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Primary error code.
    #[serde(rename = "ErrorCode")]
    pub error_code: String,
    /// Optional detail code.
    #[serde(rename = "SubCode", default)]
    pub sub_code: Option<String>,
}
