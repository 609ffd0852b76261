//! Transaction output with satoshi value and locking script.

use colorcoin_primitives::util::{WireReader, WireWriter};

use crate::transaction::field;
use crate::TransactionError;

/// A single output in a transaction.
///
/// Colored-asset quantities are not visible at this level: the ledger
/// service tracks them through a marker output, so an asset transfer looks
/// like ordinary dust outputs plus one data output here.
///
/// Encoded as an 8-byte little-endian value followed by the
/// length-prefixed locking script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionOutput {
    /// The number of satoshis locked by this output.
    pub satoshis: u64,

    /// Raw locking script (scriptPubKey).
    pub locking_script: Vec<u8>,
}

impl TransactionOutput {
    /// Create an output paying `satoshis` to `locking_script`.
    pub fn new(satoshis: u64, locking_script: Vec<u8>) -> Self {
        TransactionOutput { satoshis, locking_script }
    }

    /// Read one output from `reader`.
    pub fn read_from(reader: &mut WireReader) -> Result<Self, TransactionError> {
        let satoshis = field(reader.read_u64_le(), "output value")?;
        let locking_script = field(reader.read_var_bytes(), "locking script")?;

        Ok(TransactionOutput {
            satoshis,
            locking_script: locking_script.to_vec(),
        })
    }

    /// Append this output to `writer`.
    pub fn write_to(&self, writer: &mut WireWriter) {
        writer.write_u64_le(self.satoshis);
        writer.write_var_bytes(&self.locking_script);
    }
}
