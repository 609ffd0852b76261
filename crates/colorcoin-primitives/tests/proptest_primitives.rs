use proptest::prelude::*;

use colorcoin_primitives::encoding;
use colorcoin_primitives::util::{VarInt, WireReader, WireWriter};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn hex_upper_decodes_back(bytes in prop::collection::vec(any::<u8>(), 0..128)) {
        let encoded = encoding::encode_upper(&bytes);
        prop_assert!(!encoded.chars().any(|c| c.is_ascii_lowercase()));
        prop_assert_eq!(encoding::decode(&encoded).unwrap(), bytes);
    }

    #[test]
    fn varint_reads_back(value in any::<u64>()) {
        let mut writer = WireWriter::new();
        writer.write_varint(VarInt(value));
        let bytes = writer.into_bytes();
        prop_assert_eq!(bytes.len(), VarInt(value).length());

        let mut reader = WireReader::new(&bytes);
        prop_assert_eq!(reader.read_varint().unwrap(), VarInt(value));
        prop_assert_eq!(reader.remaining(), 0);
    }
}
