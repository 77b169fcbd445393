//! Traversal categories.
//!
//! Five zero-sized tags form the capability lattice:
//!
//! ```text
//! InputTag  <  ForwardTag  <  BidirectionalTag  <  RandomAccessTag
//!
//! OutputTag                       (incomparable, write-only)
//! ```
//!
//! A tag is never inspected at runtime. Algorithms name their minimum
//! capability as a bound (`C: Refines<ForwardTag>`) or dispatch by
//! implementing a helper trait once per tag.

use crate::primitives::{Absent, Bool, Present};

mod sealed {
    pub trait Sealed {}
}

/// Read-once, forward-only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct InputTag;

/// Write-only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OutputTag;

/// Multi-pass, forward-only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ForwardTag;

/// Multi-pass, traversable from both ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BidirectionalTag;

/// O(1) offset and O(1) length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RandomAccessTag;

// =============================================================================
// Category trait
// =============================================================================

/// A traversal capability tag.
///
/// The `Is*` flags answer "is this tag the named capability or a refinement
/// of it". The `Clamp*` types give the weaker of `Self` and the named
/// capability, which is what iterator adaptors need when they lose
/// abilities (a `Filter` can no longer jump, so it clamps to bidirectional).
pub trait Category: sealed::Sealed + Copy + Default + core::fmt::Debug + 'static {
    const NAME: &'static str;

    type IsInput: Bool;
    type IsOutput: Bool;
    type IsForward: Bool;
    type IsBidirectional: Bool;
    type IsRandomAccess: Bool;

    type ClampInput: Category;
    type ClampForward: Category;
    type ClampBidirectional: Category;

    /// Weakest capability shared by `Self` and `Other`.
    ///
    /// `OutputTag` has no order with the readable tags; any meet involving
    /// it stays `OutputTag`.
    type Min<Other: Category>: Category;
}

impl sealed::Sealed for InputTag {}
impl sealed::Sealed for OutputTag {}
impl sealed::Sealed for ForwardTag {}
impl sealed::Sealed for BidirectionalTag {}
impl sealed::Sealed for RandomAccessTag {}

impl Category for InputTag {
    const NAME: &'static str = "input";

    type IsInput = Present;
    type IsOutput = Absent;
    type IsForward = Absent;
    type IsBidirectional = Absent;
    type IsRandomAccess = Absent;

    type ClampInput = InputTag;
    type ClampForward = InputTag;
    type ClampBidirectional = InputTag;

    type Min<Other: Category> = Other::ClampInput;
}

impl Category for OutputTag {
    const NAME: &'static str = "output";

    type IsInput = Absent;
    type IsOutput = Present;
    type IsForward = Absent;
    type IsBidirectional = Absent;
    type IsRandomAccess = Absent;

    type ClampInput = OutputTag;
    type ClampForward = OutputTag;
    type ClampBidirectional = OutputTag;

    type Min<Other: Category> = OutputTag;
}

impl Category for ForwardTag {
    const NAME: &'static str = "forward";

    type IsInput = Present;
    type IsOutput = Absent;
    type IsForward = Present;
    type IsBidirectional = Absent;
    type IsRandomAccess = Absent;

    type ClampInput = InputTag;
    type ClampForward = ForwardTag;
    type ClampBidirectional = ForwardTag;

    type Min<Other: Category> = Other::ClampForward;
}

impl Category for BidirectionalTag {
    const NAME: &'static str = "bidirectional";

    type IsInput = Present;
    type IsOutput = Absent;
    type IsForward = Present;
    type IsBidirectional = Present;
    type IsRandomAccess = Absent;

    type ClampInput = InputTag;
    type ClampForward = ForwardTag;
    type ClampBidirectional = BidirectionalTag;

    type Min<Other: Category> = Other::ClampBidirectional;
}

impl Category for RandomAccessTag {
    const NAME: &'static str = "random access";

    type IsInput = Present;
    type IsOutput = Absent;
    type IsForward = Present;
    type IsBidirectional = Present;
    type IsRandomAccess = Present;

    type ClampInput = InputTag;
    type ClampForward = ForwardTag;
    type ClampBidirectional = BidirectionalTag;

    type Min<Other: Category> = Other;
}

// =============================================================================
// Refinement
// =============================================================================

/// `Self` is `Base` or a refinement of it.
///
/// Used as a bound: `where I::Category: Refines<BidirectionalTag>` accepts
/// bidirectional and random-access iterators and rejects everything else at
/// compile time.
pub trait Refines<Base: Category>: Category {}

impl Refines<InputTag> for InputTag {}

impl Refines<OutputTag> for OutputTag {}

impl Refines<InputTag> for ForwardTag {}
impl Refines<ForwardTag> for ForwardTag {}

impl Refines<InputTag> for BidirectionalTag {}
impl Refines<ForwardTag> for BidirectionalTag {}
impl Refines<BidirectionalTag> for BidirectionalTag {}

impl Refines<InputTag> for RandomAccessTag {}
impl Refines<ForwardTag> for RandomAccessTag {}
impl Refines<BidirectionalTag> for RandomAccessTag {}
impl Refines<RandomAccessTag> for RandomAccessTag {}

/// Weakest common capability of two tags, as a type.
pub type Meet<A, B> = <A as Category>::Min<B>;

// =============================================================================
// Exact-size fact
// =============================================================================

/// Whether an iterator's remaining length is known (`ExactSizeIterator`).
///
/// `Take`, `Skip`, `Enumerate` and `Zip` are only double-ended over
/// exact-size iterators, so they keep the inner category through
/// [`Clamp`](ExactSizeFlag::Clamp) instead of inheriting it outright.
pub trait ExactSizeFlag: Bool {
    /// `C` when the length is known, `C` clamped to forward otherwise.
    type Clamp<C: Category>: Category;

    /// The length of a pair is known when both lengths are.
    type Both<Other: ExactSizeFlag>: ExactSizeFlag;
}

impl ExactSizeFlag for Present {
    type Clamp<C: Category> = C;
    type Both<Other: ExactSizeFlag> = Other;
}

impl ExactSizeFlag for Absent {
    type Clamp<C: Category> = C::ClampForward;
    type Both<Other: ExactSizeFlag> = Absent;
}
