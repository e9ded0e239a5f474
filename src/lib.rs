//! Quicksort built around the Lomuto partition.
//!
//! In-place drivers live in [`unstable`], the allocating filter sorts in [`stable`]. The free
//! functions re-exported here are the intended entry points, [`Quicksort`] exposes the pivot
//! policy and execution mode as configuration.

macro_rules! sort_impl {
    ($name:expr, stable = $stable:expr, deterministic = $deterministic:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            const STABLE: bool = $stable;
            const DETERMINISTIC: bool = $deterministic;

            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord + Clone,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                T: Clone,
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod config;
pub mod error;
pub mod partition;
pub mod pivot;
pub mod stable;
pub mod unstable;

pub use config::{Execution, Quicksort};
pub use error::{Result, SortError};
pub use partition::{partition, partition_by};
pub use pivot::PivotPolicy;

pub use stable::rust_filter_mid::{into_sorted, sort_new, sort_new_by};
pub use stable::rust_filter_random::{
    into_sorted as into_sorted_randomized, sort_new as sort_new_randomized,
    sort_new_by as sort_new_randomized_by, sort_new_with_rng as sort_new_randomized_with_rng,
};
pub use unstable::rust_lomuto_recursive::{
    sort as sort_in_place, sort_by as sort_in_place_by, sort_range as sort_in_place_range,
    sort_range_by as sort_in_place_range_by,
};
pub use unstable::rust_lomuto_stack::{
    sort as sort_in_place_iterative, sort_by as sort_in_place_iterative_by,
    sort_range as sort_in_place_iterative_range,
    sort_range_by as sort_in_place_iterative_range_by,
};
