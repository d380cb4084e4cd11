use proptest::prelude::*;

use ont_io::{helper, BinaryWriter, MemoryReader};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn var_int_roundtrip(value in any::<u64>()) {
        let mut writer = BinaryWriter::new();
        writer.write_var_int(value).unwrap();
        let bytes = writer.into_bytes();
        prop_assert_eq!(bytes.len(), helper::get_var_size(value));

        let mut reader = MemoryReader::new(&bytes);
        prop_assert_eq!(reader.read_var_int(u64::MAX).unwrap(), value);
        prop_assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn var_bytes_roundtrip(data in prop::collection::vec(any::<u8>(), 0..1024)) {
        let mut writer = BinaryWriter::new();
        writer.write_var_bytes(&data).unwrap();
        let bytes = writer.into_bytes();

        let mut reader = MemoryReader::new(&bytes);
        prop_assert_eq!(reader.read_var_bytes(4096).unwrap(), data);
    }

    #[test]
    fn truncation_never_panics(data in prop::collection::vec(any::<u8>(), 0..64), cut in 0usize..64) {
        let cut = cut.min(data.len());
        let mut reader = MemoryReader::new(&data[..cut]);
        // Any outcome is fine as long as it is an Err or a value, not a panic.
        let _ = reader.read_var_bytes(1 << 20);
    }
}
