//! equal / mismatch / lexicographical_compare and the small helpers.

use proptest::prelude::*;
use tola_algo::Error;
use tola_algo::algobase::*;

// ============================================================================
// equal
// ============================================================================

mod equal_tests {
    use super::*;

    #[test]
    fn equal_is_driven_by_the_first_range() {
        assert!(equal(&[1, 2, 3], &[1, 2, 3]));
        assert!(equal(&[1, 2], &[1, 2, 3, 4]));
        assert!(equal(&[] as &[i32], &[9]));
        assert!(!equal(&[1, 2, 3], &[1, 2, 4]));
    }

    #[test]
    fn equal_stops_at_the_first_difference() {
        // The second range is short, but the mismatch comes first.
        assert!(!equal(&[1, 2, 3], &[7]));
    }

    #[test]
    #[should_panic(expected = "second range ran out after 2 elements")]
    fn equal_with_short_second_range_panics() {
        equal(&[1, 2, 3], &[1, 2]);
    }

    #[test]
    fn equal_by_uses_the_predicate() {
        let a = ["Alpha", "beta"];
        let b = ["ALPHA", "BETA"];
        assert!(equal_by(&a, &b, |x, y| x.eq_ignore_ascii_case(y)));
        assert!(!equal_by(&a, &b, |x, y| x == y));
    }

    #[test]
    fn equal_across_element_types() {
        let words = [String::from("a"), String::from("b")];
        assert!(equal(words.iter().map(String::as_str), ["a", "b"]));
    }

    #[test]
    fn try_equal_reports_length_mismatch() {
        assert_eq!(try_equal(&[1, 2, 3], &[1, 2, 3, 4]), Ok(true));
        assert_eq!(try_equal(&[1, 2, 3], &[1, 0, 3]), Ok(false));
        assert_eq!(
            try_equal(&[1, 2, 3], &[1, 2]),
            Err(Error::LengthMismatch { required: 3, available: 2 })
        );
        assert_eq!(
            try_equal_by(&[1, 2], &[2, 3], |a, b| a + 1 == *b),
            Ok(true)
        );
    }

    #[test]
    fn error_display_names_lengths() {
        let err = Error::LengthMismatch { required: 3, available: 2 };
        assert_eq!(err.to_string(), "Second range too short: need 3 elements, got 2");
    }
}

// ============================================================================
// mismatch
// ============================================================================

mod mismatch_tests {
    use super::*;

    #[test]
    fn identical_ranges_reach_the_end() {
        let a = [1, 2, 3];
        let b = [1, 2, 3, 4, 5];
        let (rest_a, rest_b) = mismatch(&a, &b);
        assert_eq!(rest_a.len(), 0);
        assert_eq!(rest_b.as_slice(), &[4, 5]);
    }

    #[test]
    fn empty_first_range() {
        let (rest_a, rest_b) = mismatch(&[] as &[u8], &[1u8, 2]);
        assert_eq!((rest_a.len(), rest_b.len()), (0, 2));
    }

    #[test]
    fn mismatch_by_with_key() {
        let a = [(1, 'a'), (2, 'b'), (3, 'c')];
        let b = [(1, 'x'), (2, 'y'), (4, 'z')];
        let (mut ra, mut rb) = mismatch_by(&a, &b, |x, y| x.0 == y.0);
        assert_eq!(ra.next(), Some(&(3, 'c')));
        assert_eq!(rb.next(), Some(&(4, 'z')));
    }

    #[test]
    fn mismatch_on_bidirectional_ranges() {
        let (mut ra, mut rb) = mismatch("hello".chars(), "help".chars());
        assert_eq!((ra.next(), rb.next()), (Some('l'), Some('p')));
    }

    #[test]
    #[should_panic(expected = "second range ran out")]
    fn mismatch_with_short_second_range_panics() {
        let _positions = mismatch(&[1, 2, 3], &[1, 2]);
    }

    proptest! {
        #[test]
        fn divergence_is_reported_exactly(
            v in prop::collection::vec(any::<i16>(), 1..200),
            k in any::<prop::sample::Index>()
        ) {
            let k = k.index(v.len());
            let mut w = v.clone();
            w[k] = w[k].wrapping_add(1);

            let (ra, rb) = mismatch(&v, &w);
            prop_assert_eq!(v.len() - ra.len(), k);
            prop_assert_eq!(w.len() - rb.len(), k);

            let (ra, rb) = mismatch(&v, &v);
            prop_assert_eq!(ra.len(), 0);
            prop_assert_eq!(rb.len(), 0);
        }
    }
}

// ============================================================================
// lexicographical_compare
// ============================================================================

mod lexicographical_tests {
    use super::*;

    #[test]
    fn prefix_difference_and_equality() {
        assert!(lexicographical_compare(&[1, 2, 3], &[1, 2, 3, 4]));
        assert!(!lexicographical_compare(&[1, 2, 4], &[1, 2, 3]));
        assert!(!lexicographical_compare(&[1, 2, 3], &[1, 2, 3]));
        assert!(!lexicographical_compare(&[1, 2, 3, 4], &[1, 2, 3]));
        assert!(lexicographical_compare(&[] as &[i32], &[0]));
        assert!(!lexicographical_compare(&[] as &[i32], &[]));
    }

    #[test]
    fn custom_ordering() {
        let greater = |a: &&i32, b: &&i32| a > b;
        assert!(lexicographical_compare_by(&[3, 2], &[3, 1], greater));
        assert!(!lexicographical_compare_by(&[3, 1], &[3, 2], greater));
    }

    #[test]
    fn byte_compare_matches_generic() {
        let cases: [(&[u8], &[u8]); 6] = [
            (b"", b""),
            (b"", b"a"),
            (b"abc", b"abd"),
            (b"abd", b"abc"),
            (b"ab", b"abc"),
            (b"\xff", b"\x00\x00"),
        ];
        for (a, b) in cases {
            assert_eq!(
                lexicographical_compare_bytes(a, b),
                lexicographical_compare(a, b),
                "{a:?} vs {b:?}"
            );
        }
    }

    proptest! {
        #[test]
        fn agrees_with_slice_ordering(
            a in prop::collection::vec(0u8..4, 0..8),
            b in prop::collection::vec(0u8..4, 0..8)
        ) {
            prop_assert_eq!(lexicographical_compare(&a, &b), a < b);
            prop_assert_eq!(lexicographical_compare_bytes(&a, &b), a < b);
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

mod helpers {
    use super::*;

    #[test]
    fn min_max_prefer_first_on_ties() {
        let by_key = |a: &(i32, char), b: &(i32, char)| a.0 < b.0;
        assert_eq!(max_by((1, 'a'), (1, 'b'), by_key), (1, 'a'));
        assert_eq!(min_by((1, 'a'), (1, 'b'), by_key), (1, 'a'));
        assert_eq!(max_by((1, 'a'), (2, 'b'), by_key), (2, 'b'));
        assert_eq!(min_by((2, 'a'), (1, 'b'), by_key), (1, 'b'));
        assert_eq!(max(3, 7), 7);
        assert_eq!(min(3, 7), 3);
    }

    #[test]
    fn iter_swap_exchanges_pointees() {
        let mut v = [1, 2, 3];
        let (left, right) = v.split_at_mut(2);
        iter_swap(&mut left[0], &mut right[0]);
        assert_eq!(v, [3, 2, 1]);
    }
}
