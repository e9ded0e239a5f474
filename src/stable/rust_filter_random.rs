//! Functional quicksort with a uniformly random pivot.
//!
//! Expected *O*(*n* \* log(*n*)) comparisons on every input, including adversarial ones.
//! Comparison sequences differ between runs unless a seeded rng is passed to
//! [`sort_new_with_rng`].

use std::cmp::Ordering;

use rand::Rng;

use crate::pivot::PivotPolicy;
use crate::stable::filter::filter_sort;

sort_impl!(
    "rust_filter_random_pivot_stable",
    stable = true,
    deterministic = false
);

pub fn sort_new<T>(v: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    sort_new_with_rng(v, &mut rand::thread_rng())
}

pub fn sort_new_by<T, F>(v: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    sort_new_by_with_rng(v, compare, &mut rand::thread_rng())
}

/// Draws pivots from `rng`. The same seed and input produce the same sequence of comparisons.
pub fn sort_new_with_rng<T, R>(v: &[T], rng: &mut R) -> Vec<T>
where
    T: Ord + Clone,
    R: Rng,
{
    filter_sort(v.to_vec(), PivotPolicy::Random, &mut |a: &T, b: &T| a.lt(b), &mut Some(rng))
}

pub fn sort_new_by_with_rng<T, F, R>(v: &[T], mut compare: F, rng: &mut R) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
    R: Rng,
{
    let mut is_less = |a: &T, b: &T| compare(a, b) == Ordering::Less;
    filter_sort(v.to_vec(), PivotPolicy::Random, &mut is_less, &mut Some(rng))
}

pub fn into_sorted<T>(v: Vec<T>) -> Vec<T>
where
    T: Ord,
{
    filter_sort(
        v,
        PivotPolicy::Random,
        &mut |a: &T, b: &T| a.lt(b),
        &mut Some(rand::thread_rng()),
    )
}

pub fn sort<T>(v: &mut [T])
where
    T: Ord + Clone,
{
    let sorted = sort_new(v);
    v.clone_from_slice(&sorted);
}

pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let sorted = sort_new_by(v, compare);
    v.clone_from_slice(&sorted);
}
