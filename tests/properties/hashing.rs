//! Property tests for content hashing.

use proptest::prelude::*;

use bucketsync::ContentHash;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: hashing is deterministic and always 64 lowercase hex chars.
    #[test]
    fn property_hash_is_stable(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        let first = ContentHash::from_bytes(&bytes);
        let second = ContentHash::from_bytes(&bytes);

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.as_str().len(), 64);
        prop_assert!(first.as_str().bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')));
    }

    /// PROPERTY: flipping any single byte changes the hash.
    #[test]
    fn property_single_byte_change_changes_hash(
        bytes in proptest::collection::vec(any::<u8>(), 1..512),
        index in any::<prop::sample::Index>(),
        delta in 1u8..=255
    ) {
        let mut changed = bytes.clone();
        let i = index.index(changed.len());
        changed[i] = changed[i].wrapping_add(delta);

        prop_assert_ne!(ContentHash::from_bytes(&bytes), ContentHash::from_bytes(&changed));
    }
}
