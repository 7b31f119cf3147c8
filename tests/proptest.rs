//! Property-based tests over the quantified invariants in `spec.md` §8.

use ens_normalize_core::{normalize, tokenize};
use proptest::prelude::*;

fn ascii_label() -> impl Strategy<Value = String> {
    "_{0,3}[0-9a-z][0-9a-z-]{0,15}".prop_filter("no double-hyphen extension", |s| {
        let b = s.as_bytes();
        !(b.len() >= 4 && b[2] == b'-' && b[3] == b'-')
    })
}

proptest! {
    #[test]
    fn ascii_labels_are_fixed_points(label in ascii_label()) {
        let out = normalize(&label).unwrap();
        prop_assert_eq!(out.as_ref(), label.as_str());
    }

    #[test]
    fn uppercase_ascii_folds_to_lowercase(label in "[A-Z]{1,12}") {
        let expected = label.to_lowercase();
        let out = normalize(&label).unwrap();
        prop_assert_eq!(out.as_ref(), expected.as_str());
    }

    #[test]
    fn normalize_is_idempotent(label in ascii_label()) {
        if let Ok(once) = normalize(&label) {
            let once = once.into_owned();
            let twice = normalize(&once).unwrap().into_owned();
            prop_assert_eq!(once, twice);
        }
    }

    #[test]
    fn tokenize_preserves_byte_coverage(label in ascii_label()) {
        let tokens = tokenize(&label);
        let covered: usize = tokens.iter().map(|t| t.input_len()).sum();
        prop_assert_eq!(covered, label.chars().count());
    }
}
