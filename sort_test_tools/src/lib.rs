//! Shared harness for the quicksort variants: input patterns, a generic test suite and the trait
//! both are written against.

use std::cmp::Ordering;

pub mod patterns;
pub mod tests;

/// A sort that can be driven by [`instantiate_sort_tests!`] and the benches.
///
/// Functional sorts build a new sequence and clone it back into `arr`, hence the `Clone` bounds.
pub trait Sort {
    /// Equal elements keep their input order.
    const STABLE: bool;

    /// The same input always produces the same sequence of comparisons. False for unseeded random
    /// pivots, which rules out tests that replay a comparison count.
    const DETERMINISTIC: bool;

    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Clone;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering;
}
