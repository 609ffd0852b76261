//! The transaction object exchanged with the ledger API.
//!
//! Construction endpoints hand back unsigned transactions as hex; the wallet
//! signs them and the broadcast endpoint takes them back as hex. This module
//! only parses and re-serializes the wire format and derives the id.

use colorcoin_primitives::encoding;
use colorcoin_primitives::hash::sha256d;
use colorcoin_primitives::util::{VarInt, WireReader, WireWriter};
use colorcoin_primitives::PrimitivesError;

use crate::input::TransactionInput;
use crate::output::TransactionOutput;
use crate::TransactionError;

/// Smallest encoded input: txid, index, empty script prefix, sequence.
const MIN_INPUT_LEN: usize = 32 + 4 + 1 + 4;
/// Smallest encoded output: value and empty script prefix.
const MIN_OUTPUT_LEN: usize = 8 + 1;

/// A wire-format transaction.
///
/// Layout: 4-byte version, VarInt-counted inputs, VarInt-counted outputs,
/// 4-byte lock time, all integers little-endian.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    /// Format version.
    pub version: u32,
    /// Inputs in wire order.
    pub inputs: Vec<TransactionInput>,
    /// Outputs in wire order.
    pub outputs: Vec<TransactionOutput>,
    /// Lock time (block height or Unix timestamp, 0 for none).
    pub lock_time: u32,
}

impl Transaction {
    /// An empty version-1 transaction.
    pub fn new() -> Self {
        Transaction {
            version: 1,
            inputs: Vec::new(),
            outputs: Vec::new(),
            lock_time: 0,
        }
    }

    /// Parse a transaction from hex of either case.
    pub fn from_hex(hex_str: &str) -> Result<Self, TransactionError> {
        Self::from_bytes(&encoding::decode(hex_str)?)
    }

    /// Parse exactly one transaction from `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TransactionError> {
        let mut reader = WireReader::new(bytes);
        let tx = Self::read_from(&mut reader)?;
        match reader.remaining() {
            0 => Ok(tx),
            n => Err(TransactionError::SerializationError(format!(
                "{n} unexpected bytes after lock time"
            ))),
        }
    }

    /// Read one transaction from `reader`, leaving any following bytes.
    pub fn read_from(reader: &mut WireReader) -> Result<Self, TransactionError> {
        let version = field(reader.read_u32_le(), "version")?;

        let input_count = field(reader.read_varint(), "input count")?;
        let mut inputs =
            Vec::with_capacity(capacity_hint(input_count, reader.remaining() / MIN_INPUT_LEN));
        for _ in 0..input_count.value() {
            inputs.push(TransactionInput::read_from(reader)?);
        }

        let output_count = field(reader.read_varint(), "output count")?;
        let mut outputs =
            Vec::with_capacity(capacity_hint(output_count, reader.remaining() / MIN_OUTPUT_LEN));
        for _ in 0..output_count.value() {
            outputs.push(TransactionOutput::read_from(reader)?);
        }

        let lock_time = field(reader.read_u32_le(), "lock time")?;

        Ok(Transaction {
            version,
            inputs,
            outputs,
            lock_time,
        })
    }

    /// Serialize to wire-format bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = WireWriter::with_capacity(256);
        writer.write_u32_le(self.version);
        writer.write_varint(VarInt::from(self.inputs.len()));
        self.inputs.iter().for_each(|i| i.write_to(&mut writer));
        writer.write_varint(VarInt::from(self.outputs.len()));
        self.outputs.iter().for_each(|o| o.write_to(&mut writer));
        writer.write_u32_le(self.lock_time);
        writer.into_bytes()
    }

    /// Lowercase hex of [`to_bytes`](Self::to_bytes).
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Double SHA-256 of the serialized bytes, internal byte order.
    pub fn tx_id(&self) -> [u8; 32] {
        sha256d(&self.to_bytes())
    }

    /// The id as the ledger API prints it in `hash` fields (byte-reversed hex).
    pub fn tx_id_hex(&self) -> String {
        let mut id = self.tx_id();
        id.reverse();
        hex::encode(id)
    }

    /// Whether no input carries an unlocking script yet.
    pub fn is_unsigned(&self) -> bool {
        self.inputs.iter().all(TransactionInput::is_unsigned)
    }
}

impl Default for Transaction {
    fn default() -> Self {
        Self::new()
    }
}

/// Tag a primitive read failure with the field being read.
pub(crate) fn field<T>(res: Result<T, PrimitivesError>, name: &str) -> Result<T, TransactionError> {
    res.map_err(|e| TransactionError::SerializationError(format!("{name}: {e}")))
}

fn capacity_hint(count: VarInt, limit: usize) -> usize {
    usize::try_from(count.value()).unwrap_or(usize::MAX).min(limit)
}
