//! Lomuto partition.

use std::cmp::Ordering;

use crate::error::{check_range, Result, SortError};

/// Partitions `v[low..=high]` around the pivot `v[high]` and returns the pivot's final index `p`.
///
/// Afterwards every element in `low..p` is `<=` the pivot and every element in `p + 1..=high` is
/// `>` the pivot. Elements outside the range are not touched. Equal elements may be reordered.
///
/// `low == high` returns `low`. `low > high` is [`SortError::InvertedRange`] and `high` past the
/// end is [`SortError::OutOfBounds`]; in both cases `v` is unchanged.
pub fn partition<T>(v: &mut [T], low: usize, high: usize) -> Result<usize>
where
    T: Ord,
{
    partition_by(v, low, high, |a, b| a.cmp(b))
}

/// [`partition`] with a comparator function.
pub fn partition_by<T, F>(v: &mut [T], low: usize, high: usize, mut compare: F) -> Result<usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    match check_range(low, high, v.len())? {
        Some(range) => Ok(low
            + lomuto_partition(&mut v[range], &mut |a: &T, b: &T| {
                compare(a, b) == Ordering::Less
            })),
        None => {
            log::debug!("rejected inverted partition range [{low}, {high}]");
            Err(SortError::InvertedRange { low, high })
        }
    }
}

/// Moves `v[pivot_pos]` to the end of `v` and partitions around it.
#[inline]
pub(crate) fn partition_at<T, F>(v: &mut [T], pivot_pos: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let last = v.len() - 1;
    if pivot_pos != last {
        v.swap(pivot_pos, last);
    }

    lomuto_partition(v, is_less)
}

/// Partitions all of `v` around its last element, returns where the pivot ended up.
///
/// `v` must not be empty.
pub(crate) fn lomuto_partition<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(!v.is_empty());

    let high = v.len() - 1;
    let (rest, pivot) = v.split_at_mut(high);
    let pivot = &pivot[0];

    // `le_count` is the length of the `<= pivot` zone at the front of `rest`.
    let mut le_count = 0;
    for r in 0..high {
        if !is_less(pivot, &rest[r]) {
            rest.swap(le_count, r);
            le_count += 1;
        }
    }

    // Place the pivot between the two partitions.
    v.swap(le_count, high);

    le_count
}
