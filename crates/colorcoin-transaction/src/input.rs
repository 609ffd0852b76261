//! Transaction input referencing a previous output.

use colorcoin_primitives::util::{WireReader, WireWriter};

use crate::transaction::field;
use crate::TransactionError;

/// Default sequence number indicating a finalized input.
pub const DEFAULT_SEQUENCE_NUMBER: u32 = 0xFFFF_FFFF;

/// A single input in a transaction.
///
/// Transactions returned by the construction endpoints are unsigned, so
/// `unlocking_script` is empty until the wallet signs them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionInput {
    /// The 32-byte ID of the transaction being spent, in internal
    /// (little-endian) byte order.
    pub source_txid: [u8; 32],

    /// Index of the output within the source transaction.
    pub source_tx_out_index: u32,

    /// Raw unlocking script (scriptSig). Empty when unsigned.
    pub unlocking_script: Vec<u8>,

    /// Sequence number. Defaults to `0xFFFFFFFF` (finalized).
    pub sequence_number: u32,
}

impl TransactionInput {
    /// Create an unsigned input spending `source_tx_out_index` of `source_txid`.
    pub fn new(source_txid: [u8; 32], source_tx_out_index: u32) -> Self {
        TransactionInput {
            source_txid,
            source_tx_out_index,
            unlocking_script: Vec::new(),
            sequence_number: DEFAULT_SEQUENCE_NUMBER,
        }
    }

    /// Read one input from `reader`.
    pub fn read_from(reader: &mut WireReader) -> Result<Self, TransactionError> {
        Ok(TransactionInput {
            source_txid: field(reader.read_array::<32>(), "source txid")?,
            source_tx_out_index: field(reader.read_u32_le(), "source output index")?,
            unlocking_script: field(reader.read_var_bytes(), "unlocking script")?.to_vec(),
            sequence_number: field(reader.read_u32_le(), "sequence number")?,
        })
    }

    /// Append this input to `writer`.
    pub fn write_to(&self, writer: &mut WireWriter) {
        writer.write_bytes(&self.source_txid);
        writer.write_u32_le(self.source_tx_out_index);
        writer.write_var_bytes(&self.unlocking_script);
        writer.write_u32_le(self.sequence_number);
    }

    /// Whether the input carries no unlocking script yet.
    pub fn is_unsigned(&self) -> bool {
        self.unlocking_script.is_empty()
    }
}
