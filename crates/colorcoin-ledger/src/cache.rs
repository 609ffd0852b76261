//! Asset metadata cache.
//!
//! Definitions are fetched on first use and kept for the lifetime of the
//! cache. A failed fetch is remembered as a stub and never retried.

use std::future::Future;
use std::sync::Arc;

use indexmap::IndexMap;
use tokio::sync::{Mutex, OnceCell};
use tracing::{debug, warn};

use crate::error::LedgerError;
use crate::models::{AssetDefinition, Resolution};

/// Where the cache fetches definitions it has not seen yet.
pub trait DefinitionSource {
    /// Fetch the definition of `asset_address`.
    fn fetch_definition(
        &self,
        asset_address: &str,
    ) -> impl Future<Output = Result<AssetDefinition, LedgerError>> + Send;
}

type Slot = Arc<OnceCell<Resolution>>;

/// Memoizing address → definition map.
///
/// Each address owns a once-cell, so concurrent resolves of one address
/// share a single fetch. The map lock is only held to find or insert a
/// cell, never across a fetch.
#[derive(Debug, Default)]
pub struct AssetCache {
    entries: Mutex<IndexMap<String, Slot>>,
}

impl AssetCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `asset_address`, fetching from `source` on a miss.
    ///
    /// Never fails: any fetch error degrades to a cached stub.
    pub async fn resolve<S>(&self, source: &S, asset_address: &str) -> Resolution
    where
        S: DefinitionSource + Sync,
    {
        let slot = self
            .entries
            .lock()
            .await
            .entry(asset_address.to_string())
            .or_default()
            .clone();

        if let Some(hit) = slot.get() {
            debug!(asset_address, stub = hit.is_stub(), "asset cache hit");
            return hit.clone();
        }

        slot.get_or_init(|| async {
            match source.fetch_definition(asset_address).await {
                Ok(def) => Resolution::Resolved(def),
                Err(e) => {
                    warn!(asset_address, error = %e, "asset metadata unavailable, using stub");
                    Resolution::Stub(AssetDefinition::stub(asset_address))
                }
            }
        })
        .await
        .clone()
    }

    /// Return the cached definition without fetching.
    ///
    /// An address whose first fetch is still in flight reads as absent.
    pub async fn lookup_cached(&self, asset_address: &str) -> Option<AssetDefinition> {
        let slot = self.entries.lock().await.get(asset_address).cloned()?;
        slot.get().map(|r| r.definition().clone())
    }

    /// All settled definitions, stubs included, in the order first resolved.
    pub async fn all_definitions(&self) -> Vec<AssetDefinition> {
        self.entries
            .lock()
            .await
            .values()
            .filter_map(|slot| slot.get())
            .map(|r| r.definition().clone())
            .collect()
    }
}
