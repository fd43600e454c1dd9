//! Property tests for shellcode byte analysis.

use proptest::prelude::*;

use asmforge::domain::services::{analyze_bytes, escape_hex};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every reported offset holds a zero and every zero is reported.
    #[test]
    fn property_null_offsets_are_exact(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        let analysis = analyze_bytes(&bytes);

        prop_assert_eq!(analysis.size, bytes.len());
        prop_assert!(analysis.null_offsets.iter().all(|&i| bytes[i] == 0));
        prop_assert_eq!(
            analysis.null_count(),
            bytes.iter().filter(|b| **b == 0).count()
        );
        prop_assert!(analysis.null_offsets.windows(2).all(|w| w[0] < w[1]));
    }

    /// PROPERTY: the escaped form is four characters per byte.
    #[test]
    fn property_escape_width(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let escaped = escape_hex(&bytes);
        prop_assert_eq!(escaped.len(), bytes.len() * 4);
        prop_assert_eq!(escaped.matches("\\x").count(), bytes.len());
    }
}
