/// Colorcoin SDK - Transaction model and wire-format serialization.
///
/// Provides the `Transaction` type returned by the ledger API's construction
/// endpoints and accepted by its broadcast endpoint, with binary/hex
/// serialization and transaction ID computation.

pub mod transaction;
pub mod input;
pub mod output;

mod error;
pub use error::TransactionError;
pub use transaction::Transaction;
pub use input::TransactionInput;
pub use output::TransactionOutput;

#[cfg(test)]
mod tests;
