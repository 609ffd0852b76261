//! Ledger API client: balances, history, asset metadata, construction and
//! broadcast.

use std::collections::HashMap;

use colorcoin_primitives::encoding;
use colorcoin_transaction::Transaction;
use num_bigint::BigUint;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::balance;
use crate::cache::{AssetCache, DefinitionSource};
use crate::error::LedgerError;
use crate::history;
use crate::models::{
    AddressBalance, AssetBalance, AssetDefinition, Resolution, SingleAssetTransaction,
};
use crate::transport::HttpTransport;
use crate::types::{
    AddressResponse, AssetDefinitionResponse, LedgerConfig, RawTransactionResponse,
    SendRecipient, SendRequest, TransactionRecord,
};

/// Client for the ledger API.
///
/// Owns the asset metadata cache; definitions resolved through one client
/// are never fetched again by it. Share a client behind an `Arc` to share
/// its cache.
#[derive(Debug)]
pub struct LedgerClient {
    /// HTTP transport.
    transport: HttpTransport,
    /// Asset definitions resolved so far.
    assets: AssetCache,
}

impl LedgerClient {
    /// Create a new client with the given configuration and an empty cache.
    pub fn new(config: LedgerConfig) -> Self {
        Self {
            transport: HttpTransport::new(config),
            assets: AssetCache::new(),
        }
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &LedgerConfig {
        self.transport.config()
    }

    // -----------------------------------------------------------------
    // Asset metadata
    // -----------------------------------------------------------------

    /// Resolve an asset address to its definition, fetching it on first use.
    ///
    /// Never fails; an unavailable definition is cached as a stub.
    pub async fn resolve_asset(&self, asset_address: &str) -> Resolution {
        self.assets.resolve(&self.transport, asset_address).await
    }

    /// Return a definition only if it is already cached.
    pub async fn cached_asset(&self, asset_address: &str) -> Option<AssetDefinition> {
        self.assets.lookup_cached(asset_address).await
    }

    /// Every definition cached so far, stubs included.
    pub async fn asset_definitions(&self) -> Vec<AssetDefinition> {
        self.assets.all_definitions().await
    }

    // -----------------------------------------------------------------
    // Balances and history
    // -----------------------------------------------------------------

    /// Get the native and per-asset balance of `address`, confirmed and
    /// unconfirmed combined.
    pub async fn get_address_balance(&self, address: &str) -> Result<AddressBalance, LedgerError> {
        let resp: AddressResponse = self.get_json(&format!("v1/addresses/{}", address)).await?;
        let totals = balance::aggregate(&resp)?;

        let mut assets = Vec::with_capacity(totals.assets.len());
        for (asset_address, quantity) in totals.assets {
            let asset = self.resolve_asset(&asset_address).await.into_definition();
            assets.push(AssetBalance { asset, quantity });
        }

        Ok(AddressBalance {
            native: totals.native,
            assets,
        })
    }

    /// Reconstruct the per-asset history of `address`.
    ///
    /// Entries follow the order of the service's response. Every record is
    /// validated before any asset metadata is fetched, so a malformed record
    /// fails the call without side effects on the cache.
    pub async fn get_transactions(
        &self,
        address: &str,
    ) -> Result<Vec<SingleAssetTransaction>, LedgerError> {
        let records: Vec<TransactionRecord> = self
            .get_json(&format!("v1/addresses/{}/transactions", address))
            .await?;
        let effects = history::accumulate_all(address, &records)?;

        let mut definitions: HashMap<String, AssetDefinition> = HashMap::new();
        for asset_address in effects.iter().flat_map(|e| e.assets.keys()) {
            if !definitions.contains_key(asset_address) {
                let def = self.resolve_asset(asset_address).await.into_definition();
                definitions.insert(asset_address.clone(), def);
            }
        }

        debug!(
            address,
            records = records.len(),
            assets = definitions.len(),
            "reconstructed history"
        );

        Ok(effects
            .into_iter()
            .flat_map(|effect| {
                effect.into_transactions(|asset_address| {
                    definitions
                        .get(asset_address)
                        .cloned()
                        .unwrap_or_else(|| AssetDefinition::stub(asset_address))
                })
            })
            .collect())
    }

    // -----------------------------------------------------------------
    // Construction and broadcast
    // -----------------------------------------------------------------

    /// Ask the service to build an unsigned transaction sending `amount`
    /// from `from` to `to`.
    ///
    /// With `asset_address` the amount is in asset units and the asset
    /// endpoint is used; without it the amount is in satoshis.
    pub async fn build_transaction(
        &self,
        from: &str,
        to: &str,
        amount: &BigUint,
        asset_address: Option<&str>,
        fees: u64,
    ) -> Result<Transaction, LedgerError> {
        let request = SendRequest {
            fees,
            from: from.to_string(),
            to: vec![SendRecipient {
                address: to.to_string(),
                amount: amount.to_string(),
                asset_address: asset_address.map(str::to_string),
            }],
        };

        let path = match asset_address {
            Some(_) => "v1/sendasset?format=raw",
            None => "v1/sendbitcoin?format=raw",
        };

        let body = self.transport.post(path, serde_json::to_string(&request)?).await?;
        let resp: RawTransactionResponse = serde_json::from_str(&body)?;
        let tx = Transaction::from_hex(&resp.raw)?;
        debug!(
            txid = %tx.tx_id_hex(),
            inputs = tx.inputs.len(),
            unsigned = tx.is_unsigned(),
            "built transaction"
        );
        Ok(tx)
    }

    /// Broadcast a signed transaction and return its id as reported by the
    /// service.
    pub async fn broadcast_transaction(&self, tx: &Transaction) -> Result<String, LedgerError> {
        let raw = encoding::encode_upper(&tx.to_bytes());
        let body = self
            .transport
            .post("v1/sendrawtransaction", serde_json::to_string(&raw)?)
            .await?;

        let txid: String = serde_json::from_str(body.trim())?;
        debug!(%txid, "broadcast accepted");
        Ok(txid)
    }

    /// GET `path` and deserialize the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, LedgerError> {
        let text = self.transport.get(path).await?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl DefinitionSource for HttpTransport {
    async fn fetch_definition(&self, asset_address: &str) -> Result<AssetDefinition, LedgerError> {
        let text = self.get(&format!("v1/assets/{}", asset_address)).await?;
        let resp: AssetDefinitionResponse = serde_json::from_str(&text)?;
        Ok(resp.into())
    }
}
