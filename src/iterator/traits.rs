//! Iterator trait extraction.
//!
//! `IteratorTraits` is the one place a type states what it is: its traversal
//! category and the element, distance, pointer and reference types it works
//! with. Nothing here runs; every fact is an associated type or const.

use crate::iterator::category::{
    BidirectionalTag, Category, ExactSizeFlag, ForwardTag, InputTag, RandomAccessTag, Refines,
};
use crate::primitives::Bool;

/// Capability facts for an iterator-like type.
///
/// `Reference` is the type actually handed out (for a real iterator, its
/// `Item`); `Value` is the element type behind it. Sinks that only accept
/// writes report `()` for every type except `Category`.
///
/// Claiming [`RandomAccessTag`] promises `ExactSizeIterator`,
/// `DoubleEndedIterator` and an O(1) `nth`. The O(1) dispatch paths rely on
/// the first two and fail to compile without them. Claiming
/// [`BidirectionalTag`] promises `DoubleEndedIterator`.
///
/// `IsExactSize = Present` promises `ExactSizeIterator`, and every
/// random-access type reports `Present`.
pub trait IteratorTraits {
    type Category: Category;
    type IsExactSize: ExactSizeFlag;
    type Value;
    type Difference;
    type Pointer;
    type Reference;
}

// =============================================================================
// Extraction aliases
// =============================================================================

pub type CategoryOf<I> = <I as IteratorTraits>::Category;
pub type ValueOf<I> = <I as IteratorTraits>::Value;
pub type DifferenceOf<I> = <I as IteratorTraits>::Difference;
pub type PointerOf<I> = <I as IteratorTraits>::Pointer;
pub type ReferenceOf<I> = <I as IteratorTraits>::Reference;

/// The category tag of `iter` as a value.
#[inline(always)]
pub fn category<I: IteratorTraits>(_iter: &I) -> I::Category {
    I::Category::default()
}

/// Human-readable name of the category of `I`.
pub const fn category_name<I: IteratorTraits>() -> &'static str {
    <I::Category as Category>::NAME
}

// =============================================================================
// Category queries (generated)
// =============================================================================

macro_rules! category_query {
    ($($Name:ident => $Flag:ident),* $(,)?) => {
        $(
            ::paste::paste! {
                #[doc = concat!(
                    "Whether `I` is classified as ", stringify!($Name),
                    " or a refinement of it."
                )]
                #[inline(always)]
                pub const fn [<is_ $Name:snake _iterator>]<I: IteratorTraits>() -> bool {
                    <<I::Category as Category>::$Flag as Bool>::VALUE
                }
            }
        )*
    };
}

category_query!(
    Input => IsInput,
    Output => IsOutput,
    Forward => IsForward,
    Bidirectional => IsBidirectional,
    RandomAccess => IsRandomAccess,
);

/// Whether `I` reports a known remaining length.
#[inline(always)]
pub const fn is_exact_size_iterator<I: IteratorTraits>() -> bool {
    <I::IsExactSize as Bool>::VALUE
}

// =============================================================================
// Concept traits
// =============================================================================

/// An iterator that can be read at least once.
pub trait InputIterator: Iterator + IteratorTraits<Category: Refines<InputTag>> {}

impl<I> InputIterator for I where I: Iterator + IteratorTraits<Category: Refines<InputTag>> {}

/// An input iterator whose positions can be revisited.
///
/// Multi-pass is only usable through `Clone`. Algorithms that return
/// positions add the `Clone` bound themselves; `slice::IterMut` is
/// random access but not `Clone`.
pub trait ForwardIterator: InputIterator + IteratorTraits<Category: Refines<ForwardTag>> {}

impl<I> ForwardIterator for I where I: InputIterator + IteratorTraits<Category: Refines<ForwardTag>> {}

pub trait BidirectionalIterator:
    ForwardIterator + DoubleEndedIterator + IteratorTraits<Category: Refines<BidirectionalTag>>
{
}

impl<I> BidirectionalIterator for I where
    I: ForwardIterator + DoubleEndedIterator + IteratorTraits<Category: Refines<BidirectionalTag>>
{
}

pub trait RandomAccessIterator:
    BidirectionalIterator + ExactSizeIterator + IteratorTraits<Category: Refines<RandomAccessTag>>
{
}

impl<I> RandomAccessIterator for I where
    I: BidirectionalIterator + ExactSizeIterator + IteratorTraits<Category: Refines<RandomAccessTag>>
{
}
