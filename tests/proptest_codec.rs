//! Property-based tests for the entity codec and helpers
//!
//! Uses `proptest` to check the round-trip and pass-through guarantees under
//! random inputs, plus the range guarantees of the numeric helpers.

use proptest::prelude::*;

use entkit::config::ENCODE_RULES;
use entkit::{constrain_to_range, decode, encode, wrapped_index};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

fn supported_char() -> impl Strategy<Value = char> {
    proptest::sample::select(ENCODE_RULES.iter().map(|r| r.literal).collect::<Vec<_>>())
}

fn supported_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(supported_char(), 0..64).prop_map(|chars| chars.into_iter().collect())
}

// Letters, digits and spaces: no encode literal, and no `%` or `&` to start a decode form.
fn plain_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,64}"
}

// Every decode form needs a `%` or a `;`, and neither can appear here outside an entity.
fn mixed_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![supported_char(), proptest::char::range('a', 'z'), Just(' ')],
        0..64,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn round_trip_over_supported_set(s in supported_text()) {
        prop_assert_eq!(decode(&encode(&s)), s);
    }

    #[test]
    fn round_trip_with_plain_text_mixed_in(s in mixed_text()) {
        prop_assert_eq!(decode(&encode(&s)), s);
    }

    #[test]
    fn plain_text_passes_through(s in plain_text()) {
        prop_assert_eq!(encode(&s), s.clone());
        prop_assert_eq!(decode(&s), s);
    }

    #[test]
    fn encode_output_has_no_raw_specials(s in supported_text()) {
        let encoded = encode(&s);
        for rule in ENCODE_RULES.iter().filter(|r| r.literal != '&') {
            prop_assert!(!encoded.contains(rule.literal));
        }
    }

    #[test]
    fn constrain_stays_in_range(v in -1e6f64..1e6, lo in -1e3f64..0.0, hi in 0.0f64..1e3) {
        let clamped = constrain_to_range(v, lo, hi).unwrap();
        prop_assert!(clamped >= lo && clamped <= hi);
    }

    #[test]
    fn wrapped_index_stays_in_bounds(len in 1usize..50, index in any::<i64>()) {
        let items = vec![0u8; len];
        let wrapped = wrapped_index(&items, index).unwrap();
        prop_assert!(wrapped < len);
    }
}
