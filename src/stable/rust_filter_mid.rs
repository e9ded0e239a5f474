//! Functional quicksort with the middle element as pivot.

use std::cmp::Ordering;

use rand::rngs::ThreadRng;

use crate::pivot::PivotPolicy;
use crate::stable::filter::filter_sort;

sort_impl!("rust_filter_mid_stable", stable = true, deterministic = true);

/// Returns a sorted copy of `v`. `v` itself is not modified.
///
/// Equal elements keep their relative order. Sorted and reverse sorted input partition evenly,
/// the worst case needs a crafted input.
pub fn sort_new<T>(v: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    into_sorted(v.to_vec())
}

pub fn sort_new_by<T, F>(v: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    into_sorted_by(v.to_vec(), compare)
}

/// Like [`sort_new`] but takes ownership of `v`, no clones needed.
pub fn into_sorted<T>(v: Vec<T>) -> Vec<T>
where
    T: Ord,
{
    stable_sort(v, |a, b| a.lt(b))
}

pub fn into_sorted_by<T, F>(v: Vec<T>, mut compare: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    stable_sort(v, |a, b| compare(a, b) == Ordering::Less)
}

/// Sorts `v` through a temporary copy, for callers that hold a slice.
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

#[inline]
fn stable_sort<T, F>(v: Vec<T>, mut is_less: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    filter_sort(v, PivotPolicy::Middle, &mut is_less, &mut None::<ThreadRng>)
}
