//! Element facts: built-in registrations, the derive, the declarative
//! macro, and equivalence of the block and element-wise strategies.

use proptest::prelude::*;
use tola_algo::element::{is_one_byte, is_trivial};
use tola_algo::{Absent, ElementCaps, Fill, Present, Transfer, impl_element_caps};

// ============================================================================
// Type definitions
// ============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, ElementCaps)]
#[element(trivial)]
struct Point {
    x: i32,
    y: i32,
}

#[derive(Clone, Debug, Default, PartialEq, ElementCaps)]
struct Named(String);

#[derive(Clone, Copy, Debug, PartialEq, ElementCaps)]
#[element(trivial)]
struct Wrapper<T>(T);

#[derive(Clone, Debug, PartialEq, ElementCaps)]
enum Shape {
    Dot,
    Label(String),
}

#[derive(Clone, Copy)]
struct Celsius(f32);

#[derive(Clone)]
struct Tag(&'static str, Vec<u8>);

impl_element_caps!(trivial: Celsius; opaque: Tag);

// ============================================================================
// Built-in facts
// ============================================================================

mod builtin {
    use super::*;

    #[test]
    fn primitives_are_trivial() {
        assert!(is_trivial::<u8>());
        assert!(is_trivial::<i64>());
        assert!(is_trivial::<f64>());
        assert!(is_trivial::<bool>());
        assert!(is_trivial::<char>());
        assert!(is_trivial::<()>());
        assert!(is_trivial::<&str>());
        assert!(is_trivial::<*const u32>());
    }

    #[test]
    fn only_byte_integers_fill_by_memset() {
        assert!(is_one_byte::<u8>());
        assert!(is_one_byte::<i8>());
        assert!(!is_one_byte::<bool>());
        assert!(!is_one_byte::<u16>());
        assert!(!is_one_byte::<char>());
        assert!(!is_one_byte::<Point>());
    }

    #[test]
    fn owning_types_go_element_wise() {
        assert!(!String::IS_TRIVIAL);
        assert!(!Vec::<u8>::IS_TRIVIAL);
        assert!(!Box::<u8>::IS_TRIVIAL);
        assert!(!Option::<u8>::IS_TRIVIAL);
        assert!(!<(u8, u8)>::IS_TRIVIAL);
        assert!(!<[u8; 4]>::IS_TRIVIAL);
    }

    #[test]
    fn destructibility_tracks_drop_glue() {
        assert!(u32::IS_TRIVIALLY_DESTRUCTIBLE);
        assert!(Point::IS_TRIVIALLY_DESTRUCTIBLE);
        assert!(<[u8; 4]>::IS_TRIVIALLY_DESTRUCTIBLE);
        assert!(!String::IS_TRIVIALLY_DESTRUCTIBLE);
        assert!(!Named::IS_TRIVIALLY_DESTRUCTIBLE);
    }
}

// ============================================================================
// User registrations
// ============================================================================

mod registration {
    use super::*;

    #[test]
    fn derive_defaults_to_element_wise() {
        assert!(!Named::IS_TRIVIAL);
        assert!(!Shape::IS_TRIVIAL);
        assert!(!Named::IS_ONE_BYTE);
    }

    #[test]
    fn derive_trivial_opts_into_block_path() {
        assert!(Point::IS_TRIVIAL);
        assert!(!Point::IS_ONE_BYTE);
    }

    #[test]
    fn derive_trivial_on_generic_needs_copy_parameter() {
        assert!(Wrapper::<u8>::IS_TRIVIAL);
        assert!(Wrapper::<Point>::IS_TRIVIAL);
    }

    #[test]
    fn declarative_registration() {
        assert!(Celsius::IS_TRIVIAL);
        assert!(!Tag::IS_TRIVIAL);
        let _ = (Celsius(0.0).0, Tag("t", Vec::new()).1);
    }

    #[test]
    fn facts_are_types() {
        let _: <Point as ElementCaps>::Trivial = Present;
        let _: <Named as ElementCaps>::Trivial = Absent;
        let _: <u8 as ElementCaps>::OneByte = Present;
        let _: <u32 as ElementCaps>::OneByte = Absent;
    }
}

// ============================================================================
// Strategy equivalence
// ============================================================================

fn forward_args(len: usize, a: usize, b: usize, c: usize) -> (core::ops::Range<usize>, usize) {
    let start = a % (len + 1);
    let end = start + b % (len - start + 1);
    let n = end - start;
    let dest = if c % 2 == 1 && end <= len - n {
        end + c % (len - n - end + 1)
    } else {
        c % (start + 1)
    };
    (start..end, dest)
}

fn backward_args(len: usize, a: usize, b: usize, c: usize) -> (core::ops::Range<usize>, usize) {
    let start = a % (len + 1);
    let end = start + b % (len - start + 1);
    let n = end - start;
    let result = if c % 2 == 1 && start >= n {
        n + c % (start - n + 1)
    } else {
        end + c % (len - end + 1)
    };
    (start..end, result)
}

proptest! {
    #[test]
    fn block_copy_within_matches_element_wise(
        v in prop::collection::vec(any::<i32>(), 0..64),
        a in any::<usize>(), b in any::<usize>(), c in any::<usize>()
    ) {
        let (src, dest) = forward_args(v.len(), a, b, c);
        let mut block = v.clone();
        let mut each = v.clone();
        <Present as Transfer<i32>>::copy_within(&mut block, src.clone(), dest);
        <Absent as Transfer<i32>>::copy_within(&mut each, src, dest);
        prop_assert_eq!(block, each);
    }

    #[test]
    fn block_copy_backward_within_matches_element_wise(
        v in prop::collection::vec(any::<i32>(), 0..64),
        a in any::<usize>(), b in any::<usize>(), c in any::<usize>()
    ) {
        let (src, result) = backward_args(v.len(), a, b, c);
        let mut block = v.clone();
        let mut each = v.clone();
        <Present as Transfer<i32>>::copy_backward_within(&mut block, src.clone(), result);
        <Absent as Transfer<i32>>::copy_backward_within(&mut each, src, result);
        prop_assert_eq!(block, each);
    }

    #[test]
    fn memset_fill_matches_element_wise(
        len in 0usize..1024,
        value in any::<i8>()
    ) {
        let mut block = vec![0i8; len];
        let mut each = vec![0i8; len];
        <Present as Fill<i8>>::fill(&mut block, &value);
        <Absent as Fill<i8>>::fill(&mut each, &value);
        prop_assert_eq!(block, each);
    }
}

#[test]
fn block_move_is_a_copy() {
    let mut src = [1, 2, 3];
    let mut dst = [0; 3];
    <Present as Transfer<i32>>::take(&mut src, &mut dst);
    assert_eq!(dst, [1, 2, 3]);
    assert_eq!(src, [1, 2, 3]);

    let mut src = [String::from("a"), String::from("b")];
    let mut dst = [String::new(), String::new()];
    <Absent as Transfer<String>>::take(&mut src, &mut dst);
    assert_eq!(dst, ["a", "b"]);
    assert_eq!(src, ["", ""]);
}
