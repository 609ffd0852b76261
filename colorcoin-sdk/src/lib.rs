#![deny(missing_docs)]

//! Colorcoin SDK - Complete SDK.
//!
//! Re-exports all colorcoin SDK components for convenient single-crate usage.

pub use colorcoin_ledger as ledger;
pub use colorcoin_primitives as primitives;
pub use colorcoin_transaction as transaction;

pub use colorcoin_ledger::{LedgerClient, LedgerConfig, LedgerError};
pub use colorcoin_transaction::Transaction;
