//! Non-recursive quicksort, pending ranges live in a heap allocated work list.

use std::cmp::Ordering;
use std::mem;
use std::ops::Range;

use rand::rngs::ThreadRng;
use rand::Rng;

use crate::error::{check_range, Result};
use crate::partition::partition_at;
use crate::pivot::PivotPolicy;

sort_impl!("rust_lomuto_stack_unstable", stable = false, deterministic = true);

/// Sorts `v` ascending in place without native recursion.
///
/// Produces the same result as [`rust_lomuto_recursive::sort`](super::rust_lomuto_recursive::sort).
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

/// Sorts the inclusive range `v[low..=high]`, same contract as
/// [`rust_lomuto_recursive::sort_range`](super::rust_lomuto_recursive::sort_range).
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
    v_full: &mut [T],
    pivot: PivotPolicy,
    is_less: &mut F,
    rng: &mut Option<R>,
)
where
    F: FnMut(&T, &T) -> bool,
    R: Rng,
{
    let len = v_full.len();
    if len < 2 {
        return;
    }

    let mut work_list: Vec<Range<usize>> = vec![0..len];
    let mut peak_len = work_list.len();

    while let Some(range) = work_list.pop() {
        if range.len() < 2 {
            continue;
        }

        let (begin, end) = (range.start, range.end);
        let v = &mut v_full[range];

        let pivot_pos = pivot.choose(v, is_less, rng);
        let mid = begin + partition_at(v, pivot_pos, is_less);

        let left = begin..mid;
        let right = (mid + 1)..end;

        // Pop the smaller side first, that bounds the work list to O(log(n)) ranges.
        if left.len() < right.len() {
            work_list.push(right);
            work_list.push(left);
        } else {
            work_list.push(left);
            work_list.push(right);
        }

        peak_len = peak_len.max(work_list.len());
    }

    log::trace!("stack quicksort len: {len} peak work list len: {peak_len}");
}
