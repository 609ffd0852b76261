/// Error types for transaction operations.
#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    /// An error occurred during binary/hex serialization or deserialization.
    #[error("serialization error: {0}")]
    SerializationError(String),
    /// An underlying primitives error (forwarded from `colorcoin-primitives`).
    #[error("primitives error: {0}")]
    Primitives(#[from] colorcoin_primitives::PrimitivesError),
}
