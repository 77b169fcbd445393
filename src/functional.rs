//! Comparison predicates usable with every `*_by` overload.
//!
//! ```
//! use tola_algo::functional::greater;
//! use tola_algo::heap::{make_heap_by, pop_heap_by};
//!
//! let mut v = [5, 1, 4, 2, 3];
//! make_heap_by(&mut v, greater);
//! pop_heap_by(&mut v, greater);
//! assert_eq!(v[4], 1);
//! ```

macro_rules! define_predicates {
    ($($(#[$meta:meta])* $name:ident: $Trait:ident => $op:tt;)*) => {
        $(
            $(#[$meta])*
            #[inline(always)]
            pub fn $name<T: $Trait + ?Sized>(a: &T, b: &T) -> bool {
                a $op b
            }
        )*
    };
}

define_predicates! {
    /// `a < b`: the default ordering of every sorted or heap algorithm.
    less: PartialOrd => <;
    /// `a > b`: turns max-heaps into min-heaps.
    greater: PartialOrd => >;
    less_equal: PartialOrd => <=;
    greater_equal: PartialOrd => >=;
    equal_to: PartialEq => ==;
    not_equal_to: PartialEq => !=;
}
