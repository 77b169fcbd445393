//! `IteratorTraits` for core, alloc and std iterators.
//!
//! Storage iterators state their own category. Adaptors inherit the inner
//! category, or clamp it when they give up an ability (`Filter` can no
//! longer jump, `Peekable` can no longer walk backwards, `Take` over
//! `Chars` can no longer walk backwards because its length is unknown).

use core::iter::{
    Chain, Cloned, Copied, Empty, Enumerate, Filter, FilterMap, FromFn, Inspect, Map, Once,
    Peekable, Repeat, Rev, Skip, StepBy, Take, Zip,
};
use core::ops::Range;
use core::slice;

use crate::iterator::category::{
    BidirectionalTag, Category, ExactSizeFlag, ForwardTag, InputTag, Meet, RandomAccessTag,
};
use crate::primitives::{Absent, Present};
use crate::iterator::traits::IteratorTraits;

// =============================================================================
// Contiguous storage
// =============================================================================

impl<'a, T> IteratorTraits for slice::Iter<'a, T> {
    type Category = RandomAccessTag;
    type IsExactSize = Present;
    type Value = T;
    type Difference = isize;
    type Pointer = *const T;
    type Reference = &'a T;
}

impl<'a, T> IteratorTraits for slice::IterMut<'a, T> {
    type Category = RandomAccessTag;
    type IsExactSize = Present;
    type Value = T;
    type Difference = isize;
    type Pointer = *mut T;
    type Reference = &'a mut T;
}

impl<'a, T> IteratorTraits for slice::Chunks<'a, T> {
    type Category = RandomAccessTag;
    type IsExactSize = Present;
    type Value = &'a [T];
    type Difference = isize;
    type Pointer = *const &'a [T];
    type Reference = &'a [T];
}

impl<'a, T> IteratorTraits for slice::Windows<'a, T> {
    type Category = RandomAccessTag;
    type IsExactSize = Present;
    type Value = &'a [T];
    type Difference = isize;
    type Pointer = *const &'a [T];
    type Reference = &'a [T];
}

impl<T, const N: usize> IteratorTraits for core::array::IntoIter<T, N> {
    type Category = RandomAccessTag;
    type IsExactSize = Present;
    type Value = T;
    type Difference = isize;
    type Pointer = *const T;
    type Reference = T;
}

impl<'a> IteratorTraits for core::str::Bytes<'a> {
    type Category = RandomAccessTag;
    type IsExactSize = Present;
    type Value = u8;
    type Difference = isize;
    type Pointer = *const u8;
    type Reference = u8;
}

impl<'a> IteratorTraits for core::str::Chars<'a> {
    type Category = BidirectionalTag;
    type IsExactSize = Absent;
    type Value = char;
    type Difference = isize;
    type Pointer = *const u8;
    type Reference = char;
}

impl<'a> IteratorTraits for core::str::CharIndices<'a> {
    type Category = BidirectionalTag;
    type IsExactSize = Absent;
    type Value = (usize, char);
    type Difference = isize;
    type Pointer = *const u8;
    type Reference = (usize, char);
}

// Only the integer ranges that are `ExactSizeIterator` qualify as random
// access; `Range<u64>` and friends stay bidirectional.
macro_rules! impl_range_traits {
    ($Tag:ty, $Exact:ty => $($t:ty),* $(,)?) => {
        $(
            impl IteratorTraits for Range<$t> {
                type Category = $Tag;
                type IsExactSize = $Exact;
                type Value = $t;
                type Difference = isize;
                type Pointer = *const $t;
                type Reference = $t;
            }
        )*
    };
}

impl_range_traits!(RandomAccessTag, Present => u8, u16, u32, usize, i8, i16, i32, isize);
impl_range_traits!(BidirectionalTag, Absent => u64, u128, i64, i128, char);

impl<T> IteratorTraits for Empty<T> {
    type Category = RandomAccessTag;
    type IsExactSize = Present;
    type Value = T;
    type Difference = isize;
    type Pointer = *const T;
    type Reference = T;
}

impl<T> IteratorTraits for Once<T> {
    type Category = RandomAccessTag;
    type IsExactSize = Present;
    type Value = T;
    type Difference = isize;
    type Pointer = *const T;
    type Reference = T;
}

impl<T: Clone> IteratorTraits for Repeat<T> {
    type Category = ForwardTag;
    type IsExactSize = Absent;
    type Value = T;
    type Difference = isize;
    type Pointer = *const T;
    type Reference = T;
}

/// Generator closures are read-once: nothing can be revisited.
impl<T, F: FnMut() -> Option<T>> IteratorTraits for FromFn<F> {
    type Category = InputTag;
    type IsExactSize = Absent;
    type Value = T;
    type Difference = isize;
    type Pointer = *const T;
    type Reference = T;
}

// =============================================================================
// Adaptors
// =============================================================================

impl<I: IteratorTraits + ?Sized> IteratorTraits for &mut I {
    type Category = I::Category;
    type IsExactSize = I::IsExactSize;
    type Value = I::Value;
    type Difference = I::Difference;
    type Pointer = I::Pointer;
    type Reference = I::Reference;
}

impl<I: IteratorTraits> IteratorTraits for Rev<I> {
    type Category = I::Category;
    type IsExactSize = I::IsExactSize;
    type Value = I::Value;
    type Difference = I::Difference;
    type Pointer = I::Pointer;
    type Reference = I::Reference;
}

// These are double-ended only when the inner iterator is also exact-size.
macro_rules! impl_sized_inherit_traits {
    ($($Adaptor:ident),* $(,)?) => {
        $(
            impl<I: IteratorTraits> IteratorTraits for $Adaptor<I> {
                type Category = <I::IsExactSize as ExactSizeFlag>::Clamp<I::Category>;
                type IsExactSize = I::IsExactSize;
                type Value = I::Value;
                type Difference = I::Difference;
                type Pointer = I::Pointer;
                type Reference = I::Reference;
            }
        )*
    };
}

impl_sized_inherit_traits!(Take, Skip);

impl<I: IteratorTraits> IteratorTraits for Cloned<I> {
    type Category = I::Category;
    type IsExactSize = I::IsExactSize;
    type Value = I::Value;
    type Difference = I::Difference;
    type Pointer = I::Pointer;
    type Reference = I::Value;
}

impl<I: IteratorTraits> IteratorTraits for Copied<I> {
    type Category = I::Category;
    type IsExactSize = I::IsExactSize;
    type Value = I::Value;
    type Difference = I::Difference;
    type Pointer = I::Pointer;
    type Reference = I::Value;
}

impl<I: IteratorTraits> IteratorTraits for Enumerate<I> {
    type Category = <I::IsExactSize as ExactSizeFlag>::Clamp<I::Category>;
    type IsExactSize = I::IsExactSize;
    type Value = (usize, I::Value);
    type Difference = I::Difference;
    type Pointer = I::Pointer;
    type Reference = (usize, I::Reference);
}

impl<I: IteratorTraits, F> IteratorTraits for Inspect<I, F> {
    type Category = I::Category;
    type IsExactSize = I::IsExactSize;
    type Value = I::Value;
    type Difference = I::Difference;
    type Pointer = I::Pointer;
    type Reference = I::Reference;
}

impl<B, I, F> IteratorTraits for Map<I, F>
where
    I: IteratorTraits + Iterator,
    F: FnMut(I::Item) -> B,
{
    type Category = I::Category;
    type IsExactSize = I::IsExactSize;
    type Value = B;
    type Difference = I::Difference;
    type Pointer = *const B;
    type Reference = B;
}

impl<I: IteratorTraits, P> IteratorTraits for Filter<I, P> {
    type Category = <I::Category as Category>::ClampBidirectional;
    type IsExactSize = Absent;
    type Value = I::Value;
    type Difference = I::Difference;
    type Pointer = I::Pointer;
    type Reference = I::Reference;
}

impl<B, I, F> IteratorTraits for FilterMap<I, F>
where
    I: IteratorTraits + Iterator,
    F: FnMut(I::Item) -> Option<B>,
{
    type Category = <I::Category as Category>::ClampBidirectional;
    type IsExactSize = Absent;
    type Value = B;
    type Difference = I::Difference;
    type Pointer = *const B;
    type Reference = B;
}

impl<A: IteratorTraits, B: IteratorTraits> IteratorTraits for Chain<A, B> {
    type Category = <Meet<A::Category, B::Category> as Category>::ClampBidirectional;
    type IsExactSize = Absent;
    type Value = A::Value;
    type Difference = A::Difference;
    type Pointer = A::Pointer;
    type Reference = A::Reference;
}

impl<A: IteratorTraits, B: IteratorTraits> IteratorTraits for Zip<A, B> {
    type Category = <<A::IsExactSize as ExactSizeFlag>::Both<B::IsExactSize> as ExactSizeFlag>::Clamp<
        Meet<A::Category, B::Category>,
    >;
    type IsExactSize = <A::IsExactSize as ExactSizeFlag>::Both<B::IsExactSize>;
    type Value = (A::Value, B::Value);
    type Difference = A::Difference;
    type Pointer = (A::Pointer, B::Pointer);
    type Reference = (A::Reference, B::Reference);
}

impl<I: IteratorTraits + Iterator> IteratorTraits for Peekable<I> {
    type Category = <I::Category as Category>::ClampForward;
    type IsExactSize = I::IsExactSize;
    type Value = I::Value;
    type Difference = I::Difference;
    type Pointer = I::Pointer;
    type Reference = I::Reference;
}

impl<I: IteratorTraits> IteratorTraits for StepBy<I> {
    type Category = <I::Category as Category>::ClampForward;
    type IsExactSize = I::IsExactSize;
    type Value = I::Value;
    type Difference = I::Difference;
    type Pointer = I::Pointer;
    type Reference = I::Reference;
}

// =============================================================================
// alloc collections
// =============================================================================

#[cfg(feature = "alloc")]
mod alloc_impls {
    use alloc::collections::{btree_map, btree_set, linked_list, vec_deque};

    use crate::iterator::category::{BidirectionalTag, RandomAccessTag};
    use crate::iterator::traits::IteratorTraits;
    use crate::primitives::Present;

    impl<T> IteratorTraits for alloc::vec::IntoIter<T> {
        type Category = RandomAccessTag;
        type IsExactSize = Present;
        type Value = T;
        type Difference = isize;
        type Pointer = *const T;
        type Reference = T;
    }

    impl<'a, T> IteratorTraits for vec_deque::Iter<'a, T> {
        type Category = RandomAccessTag;
        type IsExactSize = Present;
        type Value = T;
        type Difference = isize;
        type Pointer = *const T;
        type Reference = &'a T;
    }

    impl<'a, T> IteratorTraits for vec_deque::IterMut<'a, T> {
        type Category = RandomAccessTag;
        type IsExactSize = Present;
        type Value = T;
        type Difference = isize;
        type Pointer = *mut T;
        type Reference = &'a mut T;
    }

    impl<'a, T> IteratorTraits for linked_list::Iter<'a, T> {
        type Category = BidirectionalTag;
        type IsExactSize = Present;
        type Value = T;
        type Difference = isize;
        type Pointer = *const T;
        type Reference = &'a T;
    }

    impl<'a, T> IteratorTraits for linked_list::IterMut<'a, T> {
        type Category = BidirectionalTag;
        type IsExactSize = Present;
        type Value = T;
        type Difference = isize;
        type Pointer = *mut T;
        type Reference = &'a mut T;
    }

    impl<'a, K, V> IteratorTraits for btree_map::Iter<'a, K, V> {
        type Category = BidirectionalTag;
        type IsExactSize = Present;
        type Value = (K, V);
        type Difference = isize;
        type Pointer = *const (K, V);
        type Reference = (&'a K, &'a V);
    }

    impl<'a, K, V> IteratorTraits for btree_map::Keys<'a, K, V> {
        type Category = BidirectionalTag;
        type IsExactSize = Present;
        type Value = K;
        type Difference = isize;
        type Pointer = *const K;
        type Reference = &'a K;
    }

    impl<'a, K, V> IteratorTraits for btree_map::Values<'a, K, V> {
        type Category = BidirectionalTag;
        type IsExactSize = Present;
        type Value = V;
        type Difference = isize;
        type Pointer = *const V;
        type Reference = &'a V;
    }

    impl<'a, T> IteratorTraits for btree_set::Iter<'a, T> {
        type Category = BidirectionalTag;
        type IsExactSize = Present;
        type Value = T;
        type Difference = isize;
        type Pointer = *const T;
        type Reference = &'a T;
    }
}

// =============================================================================
// std-only iterators
// =============================================================================

#[cfg(feature = "std")]
mod std_impls {
    use std::collections::{hash_map, hash_set};

    use crate::iterator::category::{ForwardTag, InputTag};
    use crate::iterator::traits::IteratorTraits;
    use crate::primitives::{Absent, Present};

    impl<'a, K, V> IteratorTraits for hash_map::Iter<'a, K, V> {
        type Category = ForwardTag;
        type IsExactSize = Present;
        type Value = (K, V);
        type Difference = isize;
        type Pointer = *const (K, V);
        type Reference = (&'a K, &'a V);
    }

    impl<'a, K, V> IteratorTraits for hash_map::Keys<'a, K, V> {
        type Category = ForwardTag;
        type IsExactSize = Present;
        type Value = K;
        type Difference = isize;
        type Pointer = *const K;
        type Reference = &'a K;
    }

    impl<'a, K, V> IteratorTraits for hash_map::Values<'a, K, V> {
        type Category = ForwardTag;
        type IsExactSize = Present;
        type Value = V;
        type Difference = isize;
        type Pointer = *const V;
        type Reference = &'a V;
    }

    impl<'a, T> IteratorTraits for hash_set::Iter<'a, T> {
        type Category = ForwardTag;
        type IsExactSize = Present;
        type Value = T;
        type Difference = isize;
        type Pointer = *const T;
        type Reference = &'a T;
    }

    /// Bytes pulled from a reader cannot be read twice.
    impl<R> IteratorTraits for std::io::Bytes<R> {
        type Category = InputTag;
        type IsExactSize = Absent;
        type Value = std::io::Result<u8>;
        type Difference = isize;
        type Pointer = *const u8;
        type Reference = std::io::Result<u8>;
    }
}
