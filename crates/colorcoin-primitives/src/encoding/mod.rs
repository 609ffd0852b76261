//! Hex encoding for ledger API payloads.
//!
//! The ledger API accepts raw transactions as uppercase hex and returns
//! constructed transactions as hex of either case.

use crate::PrimitivesError;

/// Encode bytes as an uppercase hex string, two characters per byte.
///
/// # Arguments
/// * `bytes` - The bytes to encode.
///
/// # Returns
/// An uppercase hex string of length `2 * bytes.len()`.
pub fn encode_upper(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

/// Decode a hex string into bytes.
///
/// Both upper and lower case digits are accepted.
///
/// # Arguments
/// * `hex_str` - The hex string to decode.
///
/// # Returns
/// The decoded bytes, or `PrimitivesError::InvalidHex` if the string has
/// an odd length or contains a non-hex character.
pub fn decode(hex_str: &str) -> Result<Vec<u8>, PrimitivesError> {
    Ok(hex::decode(hex_str)?)
}
