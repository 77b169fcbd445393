//! Declarative registration and detection macros.

// =============================================================================
// impl_element_caps! - Bulk ElementCaps registration
// =============================================================================

/// Implement [`ElementCaps`](crate::ElementCaps) for a list of concrete
/// types.
///
/// `trivial:` types take the bulk copy path and must be `Copy`; `opaque:`
/// types always go element by element. Both lists are optional and may
/// appear in either order.
///
/// ```
/// use tola_algo::{impl_element_caps, ElementCaps};
///
/// #[derive(Clone, Copy)]
/// struct Meters(f64);
/// #[derive(Clone)]
/// struct Label(String);
///
/// impl_element_caps!(trivial: Meters; opaque: Label);
///
/// assert!(Meters::IS_TRIVIAL);
/// assert!(!Label::IS_TRIVIAL);
/// ```
#[macro_export]
macro_rules! impl_element_caps {
    () => {};
    (trivial: $($ty:ty),+ $(; $($rest:tt)*)?) => {
        $(
            impl $crate::ElementCaps for $ty {
                type Trivial = $crate::Present;
                type OneByte = $crate::Absent;
            }
        )+
        $($crate::impl_element_caps!($($rest)*);)?
    };
    (opaque: $($ty:ty),+ $(; $($rest:tt)*)?) => {
        $(
            impl $crate::ElementCaps for $ty {
                type Trivial = $crate::Absent;
                type OneByte = $crate::Absent;
            }
        )+
        $($crate::impl_element_caps!($($rest)*);)?
    };
}

// =============================================================================
// has_iterator_traits! - Capability-fact detection (concrete types only)
// =============================================================================

/// Whether a concrete type carries iterator capability facts at all.
///
/// Uses the inherent const fallback: the inherent `VAL` exists only when
/// the probed type implements [`IteratorTraits`](crate::iterator::IteratorTraits)
/// and then shadows the trait default.
///
/// ```
/// use tola_algo::has_iterator_traits;
///
/// assert!(has_iterator_traits!(core::slice::Iter<'static, u8>));
/// assert!(!has_iterator_traits!(Vec<u8>));
/// ```
#[macro_export]
macro_rules! has_iterator_traits {
    ($T:ty) => {{
        struct __Probe<T: ?Sized>(core::marker::PhantomData<T>);

        trait __Fallback {
            const VAL: bool = false;
        }
        impl<T: ?Sized> __Fallback for __Probe<T> {}

        impl<T: ?Sized + $crate::iterator::IteratorTraits> __Probe<T> {
            #[allow(dead_code)]
            const VAL: bool = true;
        }

        __Probe::<$T>::VAL
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn detects_storage_and_adaptor_iterators() {
        assert!(has_iterator_traits!(core::slice::Iter<'static, i32>));
        assert!(has_iterator_traits!(core::iter::Rev<core::slice::Iter<'static, i32>>));
        assert!(has_iterator_traits!(core::ops::Range<usize>));
    }

    #[test]
    fn rejects_non_iterators() {
        assert!(!has_iterator_traits!(i32));
        assert!(!has_iterator_traits!(str));
        assert!(!has_iterator_traits!(core::ops::RangeInclusive<usize>));
    }
}
