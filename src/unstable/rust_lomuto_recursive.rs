//! Basic recursive quicksort.
//!
//! Recursion depth is *O*(*n*) in the worst case, e.g. ascending input with the last element as
//! pivot. Large adversarial inputs can exhaust the native stack, see
//! [`rust_lomuto_stack`](super::rust_lomuto_stack) for the explicit work list version.

use std::cmp::Ordering;
use std::mem;

use rand::rngs::ThreadRng;
use rand::Rng;

use crate::error::{check_range, Result};
use crate::partition::partition_at;
use crate::pivot::PivotPolicy;

sort_impl!(
    "rust_lomuto_recursive_unstable",
    stable = false,
    deterministic = true
);

/// Sorts `v` ascending in place, using the last element of each range as pivot.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    unstable_sort(v, |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    unstable_sort(v, |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts the inclusive range `v[low..=high]` and leaves the rest of `v` alone.
///
/// `low > high` is an empty range and does nothing. `high >= v.len()` returns
/// [`SortError::OutOfBounds`](crate::SortError::OutOfBounds) without touching `v`.
pub fn sort_range<T>(v: &mut [T], low: usize, high: usize) -> Result<()>
where
    T: Ord,
{
    sort_range_by(v, low, high, |a, b| a.cmp(b))
}

pub fn sort_range_by<T, F>(v: &mut [T], low: usize, high: usize, compare: F) -> Result<()>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if let Some(range) = check_range(low, high, v.len())? {
        sort_by(&mut v[range], compare);
    }

    Ok(())
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

#[inline]
fn unstable_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if mem::size_of::<T>() == 0 {
        // Sorting has no meaningful behavior on zero-sized types. Do nothing.
        return;
    }

    quicksort(v, PivotPolicy::Last, &mut is_less, &mut None::<ThreadRng>);
}

pub(crate) fn quicksort<T, F, R>(
    mut v: &mut [T],
    pivot: PivotPolicy,
    is_less: &mut F,
    rng: &mut Option<R>,
)
where
    F: FnMut(&T, &T) -> bool,
    R: Rng,
{
    loop {
        let len = v.len();
        if len < 2 {
            return;
        }

        let pivot_pos = pivot.choose(v, is_less, rng);
        let mid = partition_at(v, pivot_pos, is_less);

        // Recurse into the left side.
        quicksort(&mut v[..mid], pivot, is_less, rng);

        // Continue with the right side.
        v = &mut v[(mid + 1)..];
    }
}
