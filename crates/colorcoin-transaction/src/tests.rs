//! Tests for the colorcoin-transaction crate.

use crate::input::{TransactionInput, DEFAULT_SEQUENCE_NUMBER};
use crate::output::TransactionOutput;
use crate::transaction::Transaction;
use crate::TransactionError;

/// A signed single-input, two-output transaction.
const SIGNED_TX_HEX: &str = "010000000138c7c61c14ffb063c3bb2664041a3e29ea6ea0412a0c18ff725ba4e9e12afae2030000006a47304402203e9ab8e4c14addf3b4741540b556cfb0e0efb67dc1a7b5ce84c3ac56b3fd447802203c9f49f7bd893ebd7060176dfc36bcaff9d2c443d9a0dd6cd2d59b372c024d20412102798913bc057b344de675dac34faafe3dc2f312c758cd9068209f810877306d66ffffffff02dc050000000000002076a914eb0bd5edba389198e73f8efabddfc61666969ff788ac6a0568656c6c6faa0d0000000000001976a914eb0bd5edba389198e73f8efabddfc61666969ff788ac00000000";

/// The shape the construction endpoint returns: one input with an empty
/// script, a dust output, a marker output and a change output.
fn unsigned_asset_transfer() -> Transaction {
    let mut tx = Transaction::new();
    tx.inputs.push(TransactionInput::new([0x11; 32], 1));
    tx.outputs.push(TransactionOutput::new(600, vec![0x76, 0xa9, 0x14]));
    tx.outputs.push(TransactionOutput::new(
        0,
        vec![0x6a, 0x08, 0x4f, 0x41, 0x01, 0x00, 0x01, 0x64, 0x00, 0x00],
    ));
    tx.outputs.push(TransactionOutput::new(9_400, vec![0x76, 0xa9, 0x14]));
    tx
}

#[test]
fn test_signed_hex_roundtrip() {
    let tx = Transaction::from_hex(SIGNED_TX_HEX).expect("should parse signed tx");

    assert_eq!(tx.version, 1);
    assert_eq!(tx.inputs.len(), 1);
    assert_eq!(tx.outputs.len(), 2);
    assert_eq!(tx.lock_time, 0);
    assert!(!tx.is_unsigned());
    assert_eq!(tx.to_hex(), SIGNED_TX_HEX);
}

#[test]
fn test_uppercase_hex_parses() {
    let upper = SIGNED_TX_HEX.to_uppercase();
    let tx = Transaction::from_hex(&upper).expect("should parse uppercase hex");
    assert_eq!(tx.to_hex(), SIGNED_TX_HEX);
}

#[test]
fn test_unsigned_transaction_roundtrip() {
    let tx = unsigned_asset_transfer();
    assert!(tx.is_unsigned());

    let parsed = Transaction::from_bytes(&tx.to_bytes()).expect("should parse unsigned tx");
    assert_eq!(parsed, tx);
    assert_eq!(parsed.inputs[0].sequence_number, DEFAULT_SEQUENCE_NUMBER);
    assert_eq!(parsed.outputs.iter().map(|o| o.satoshis).sum::<u64>(), 10_000);
}

#[test]
fn test_trailing_bytes_error() {
    let extended_hex = format!("{}deadbeef", SIGNED_TX_HEX);
    let err = Transaction::from_hex(&extended_hex).unwrap_err();
    assert!(err.to_string().contains("4 unexpected bytes"));
}

#[test]
fn test_invalid_hex_error() {
    let err = Transaction::from_hex("not_valid_hex").unwrap_err();
    assert!(matches!(err, TransactionError::Primitives(_)));
}

#[test]
fn test_truncated_bytes_error() {
    assert!(Transaction::from_bytes(&[]).is_err());

    let bytes = hex::decode(SIGNED_TX_HEX).unwrap();
    let err = Transaction::from_bytes(&bytes[..bytes.len() - 2]).unwrap_err();
    assert!(matches!(err, TransactionError::SerializationError(_)));
}

#[test]
fn test_huge_input_count_does_not_preallocate() {
    // version, then a 9-byte varint claiming u64::MAX inputs, then nothing.
    let mut bytes = vec![0x01, 0x00, 0x00, 0x00, 0xff];
    bytes.extend_from_slice(&u64::MAX.to_le_bytes());
    assert!(Transaction::from_bytes(&bytes).is_err());
}

#[test]
fn test_empty_transaction_serialization() {
    let tx = Transaction::new();
    // version(4) + varint(0)(1) + varint(0)(1) + locktime(4)
    assert_eq!(tx.to_bytes().len(), 10);
    assert_eq!(Transaction::from_bytes(&tx.to_bytes()).unwrap(), tx);
}

#[test]
fn test_tx_id_is_reversed_sha256d() {
    let tx = Transaction::from_hex(SIGNED_TX_HEX).unwrap();

    let mut reversed = tx.tx_id();
    reversed.reverse();
    assert_eq!(tx.tx_id_hex(), hex::encode(reversed));
    assert_eq!(tx.tx_id_hex().len(), 64);
}

#[test]
fn test_outputs_of_parsed_transaction() {
    let tx = Transaction::from_hex(SIGNED_TX_HEX).unwrap();

    assert_eq!(tx.outputs[0].satoshis, 1500);
    assert_eq!(tx.outputs[1].satoshis, 3498);
    assert_eq!(
        hex::encode(&tx.outputs[1].locking_script),
        "76a914eb0bd5edba389198e73f8efabddfc61666969ff788ac"
    );
}

#[test]
fn test_input_source_txid_kept_in_wire_order() {
    let tx = Transaction::from_hex(SIGNED_TX_HEX).unwrap();
    let expected =
        hex::decode("38c7c61c14ffb063c3bb2664041a3e29ea6ea0412a0c18ff725ba4e9e12afae2").unwrap();
    assert_eq!(&tx.inputs[0].source_txid[..], &expected[..]);
    assert_eq!(tx.inputs[0].source_tx_out_index, 3);
}

#[test]
fn test_truncation_names_the_field() {
    let tx = unsigned_asset_transfer();
    let bytes = tx.to_bytes();
    // Cut inside the first output's value.
    let err = Transaction::from_bytes(&bytes[..4 + 1 + 41 + 1 + 3]).unwrap_err();
    assert!(err.to_string().contains("output value"), "{err}");
}
