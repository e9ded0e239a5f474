use std::cmp::Ordering;

use rand::Rng;

use crate::pivot::PivotPolicy;

/// A group of elements on the filter sort work list.
enum Group<T> {
    /// Still needs to be split around a pivot.
    Unsorted(Vec<T>),
    /// In final order, only needs to be appended to the output.
    Sorted(Vec<T>),
}

/// Three-way filter quicksort. Splits `v` into the elements less than, equal to and greater than
/// the pivot, sorts the outer groups and concatenates.
///
/// Each group keeps the relative input order of its elements, which makes the sort stable. The
/// pivot element itself always lands in the equal group, so every split makes progress even if
/// `is_less` is not a strict weak ordering.
///
/// Pending groups live on a heap allocated work list and not on the native stack. A fixed pivot
/// on sorted input peels off one element per split, that costs *O*(*n*^2) comparisons but no
/// stack depth.
pub(crate) fn filter_sort<T, F, R>(
    v: Vec<T>,
    pivot: PivotPolicy,
    is_less: &mut F,
    rng: &mut Option<R>,
) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
    R: Rng,
{
    let len = v.len();
    if len < 2 {
        return v;
    }

    let mut sorted = Vec::with_capacity(len);

    // Popped in output order, so the `less` group of a split is pushed last.
    let mut work_list = vec![Group::Unsorted(v)];
    let mut peak_len = work_list.len();

    while let Some(group) = work_list.pop() {
        let mut v = match group {
            Group::Sorted(mut v) => {
                sorted.append(&mut v);
                continue;
            }
            Group::Unsorted(mut v) if v.len() < 2 => {
                sorted.append(&mut v);
                continue;
            }
            Group::Unsorted(v) => v,
        };

        let (less, equal, greater) = split_three_way(&mut v, pivot, is_less, rng);

        if !greater.is_empty() {
            work_list.push(Group::Unsorted(greater));
        }
        work_list.push(Group::Sorted(equal));
        if !less.is_empty() {
            work_list.push(Group::Unsorted(less));
        }

        peak_len = peak_len.max(work_list.len());
    }

    log::trace!("filter sort len: {len} peak work list len: {peak_len}");

    sorted
}

/// Drains `v` into the groups less than, equal to and greater than the chosen pivot.
fn split_three_way<T, F, R>(
    v: &mut Vec<T>,
    pivot: PivotPolicy,
    is_less: &mut F,
    rng: &mut Option<R>,
) -> (Vec<T>, Vec<T>, Vec<T>)
where
    F: FnMut(&T, &T) -> bool,
    R: Rng,
{
    let pivot_pos = pivot.choose(v, is_less, rng);

    let classes = {
        let pivot = &v[pivot_pos];
        v.iter()
            .enumerate()
            .map(|(i, elem)| {
                if i == pivot_pos {
                    Ordering::Equal
                } else if is_less(elem, pivot) {
                    Ordering::Less
                } else if is_less(pivot, elem) {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            })
            .collect::<Vec<_>>()
    };

    let mut less = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();

    for (elem, class) in v.drain(..).zip(classes) {
        match class {
            Ordering::Less => less.push(elem),
            Ordering::Equal => equal.push(elem),
            Ordering::Greater => greater.push(elem),
        }
    }

    (less, equal, greater)
}
