//! Per-type element facts.

use crate::element::strategy::{Fill, Transfer};
use crate::primitives::{Absent, Bool, Lift, Present};

/// Static facts about an element type that select the bulk paths of the
/// slice algorithms.
///
/// The facts never change results, only speed. Declaring `Trivial =
/// Present` requires `Self: Copy` (enforced through the `Transfer` bound),
/// and `OneByte = Present` is only possible for `u8` and `i8`.
///
/// ```
/// use tola_algo::{ElementCaps, Present};
///
/// #[derive(Clone, Copy, Default, PartialEq, Debug)]
/// struct Rgb(u8, u8, u8);
///
/// impl ElementCaps for Rgb {
///     type Trivial = Present;
///     type OneByte = tola_algo::Absent;
/// }
///
/// assert!(Rgb::IS_TRIVIAL);
/// assert!(!Rgb::IS_ONE_BYTE);
/// ```
pub trait ElementCaps: Sized {
    /// Bitwise copy is equivalent to clone, and a move is a copy.
    type Trivial: Bool + Transfer<Self>;

    /// One-byte integer; a fill reduces to a memset.
    type OneByte: Bool + Fill<Self>;

    const IS_TRIVIAL: bool = <Self::Trivial as Bool>::VALUE;
    const IS_ONE_BYTE: bool = <Self::OneByte as Bool>::VALUE;
    const IS_TRIVIALLY_DESTRUCTIBLE: bool = !core::mem::needs_drop::<Self>();
}

/// Whether `T` takes the bulk transfer path.
#[inline(always)]
pub const fn is_trivial<T: ElementCaps>() -> bool {
    T::IS_TRIVIAL
}

/// Whether filling a slice of `T` is a memset.
#[inline(always)]
pub const fn is_one_byte<T: ElementCaps>() -> bool {
    T::IS_ONE_BYTE
}

// =============================================================================
// Primitives
// =============================================================================

macro_rules! impl_integer_caps {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ElementCaps for $ty {
                type Trivial = Present;
                type OneByte = Lift<{ core::mem::size_of::<$ty>() == 1 }>;
            }
        )*
    };
}

impl_integer_caps!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

crate::impl_element_caps!(trivial: bool, char, f32, f64, ());

impl<'a, T: ?Sized> ElementCaps for &'a T {
    type Trivial = Present;
    type OneByte = Absent;
}

impl<T: ?Sized> ElementCaps for *const T {
    type Trivial = Present;
    type OneByte = Absent;
}

impl<T: ?Sized> ElementCaps for *mut T {
    type Trivial = Present;
    type OneByte = Absent;
}

// =============================================================================
// Owning and composite types (element-wise)
// =============================================================================

impl<T> ElementCaps for Option<T> {
    type Trivial = Absent;
    type OneByte = Absent;
}

impl<T, const N: usize> ElementCaps for [T; N] {
    type Trivial = Absent;
    type OneByte = Absent;
}

macro_rules! impl_tuple_caps {
    ($(($($T:ident),+)),* $(,)?) => {
        $(
            impl<$($T),+> ElementCaps for ($($T,)+) {
                type Trivial = Absent;
                type OneByte = Absent;
            }
        )*
    };
}

impl_tuple_caps!((A), (A, B), (A, B, C), (A, B, C, D));

#[cfg(feature = "alloc")]
mod alloc_impls {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::ElementCaps;
    use crate::primitives::Absent;

    crate::impl_element_caps!(opaque: String);

    impl<T> ElementCaps for Vec<T> {
        type Trivial = Absent;
        type OneByte = Absent;
    }

    impl<T: ?Sized> ElementCaps for Box<T> {
        type Trivial = Absent;
        type OneByte = Absent;
    }
}
