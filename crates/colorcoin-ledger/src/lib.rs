#![deny(missing_docs)]

//! # colorcoin-ledger
//!
//! Client for a colored-coin ledger indexing service. Fetches address
//! balances, reconstructs per-asset transaction histories, resolves asset
//! metadata, and submits transaction construction and broadcast requests.
//!
//! # Example
//!
//! ```no_run
//! use colorcoin_ledger::{LedgerClient, LedgerConfig};
//!
//! # async fn example() -> Result<(), colorcoin_ledger::LedgerError> {
//! let client = LedgerClient::new(LedgerConfig {
//!     server_url: "https://ledger.example.com".to_string(),
//!     ..Default::default()
//! });
//!
//! let balance = client.get_address_balance("1BvBMSEYstWetqTFn5Au4m4GFg7xJaNVN2").await?;
//! println!("native: {} satoshis", balance.native);
//!
//! for entry in client.get_transactions("1BvBMSEYstWetqTFn5Au4m4GFg7xJaNVN2").await? {
//!     println!("{} {:?} {}", entry.transaction_id, entry.asset, entry.delta);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # History reconstruction
//!
//! An input or output is attributed to an address only when its address
//! list is exactly that one address. Shared and multisig outputs are
//! ignored on both sides. Native-currency entries with a zero net change
//! are dropped; asset entries are always reported, even at zero.

pub mod balance;
pub mod cache;
pub mod client;
pub mod error;
pub mod history;
pub mod models;
pub mod transport;
pub mod types;


pub use cache::{AssetCache, DefinitionSource};
pub use client::LedgerClient;
pub use error::{ErrorKind, LedgerError};
pub use models::{
    AddressBalance, AssetBalance, AssetDefinition, NetBalances, Resolution,
    SingleAssetTransaction,
};
pub use types::LedgerConfig;
