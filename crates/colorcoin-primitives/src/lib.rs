/// Colorcoin SDK - Encoding, hashing, and binary serialization primitives.
///
/// This crate provides the leaf building blocks shared by the other crates:
/// - Hex encoding/decoding as used on the ledger API wire
/// - SHA-256 and double SHA-256 for transaction identifiers
/// - Variable-length integer encoding
/// - Little-endian binary reader and writer for the transaction wire format

pub mod encoding;
pub mod hash;
pub mod util;

mod error;
pub use error::PrimitivesError;
