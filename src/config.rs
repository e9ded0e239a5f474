//! Configurable entry point combining a pivot policy with an execution mode.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::error::{check_range, Result, SortError};
use crate::pivot::PivotPolicy;
use crate::stable::filter::filter_sort;
use crate::unstable::{rust_lomuto_recursive, rust_lomuto_stack};

/// How the in-place sorts walk the pending sub-ranges.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Execution {
    /// Native recursion, depth grows linearly on worst case inputs.
    Recursive,
    /// Explicit work list on the heap.
    #[default]
    Iterative,
}

impl fmt::Display for Execution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Execution::Recursive => "recursive",
            Execution::Iterative => "iterative",
        })
    }
}

impl FromStr for Execution {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "recursive" => Ok(Execution::Recursive),
            "iterative" | "stack" => Ok(Execution::Iterative),
            _ => Err(SortError::UnknownExecution(s.to_owned())),
        }
    }
}

/// Sort configuration.
///
/// ```ignore
/// let mut v = vec![3, 1, 2];
/// Quicksort::new()
///     .pivot(PivotPolicy::MedianOfThree)
///     .execution(Execution::Recursive)
///     .sort(&mut v);
/// ```
///
/// Without a seed, [`PivotPolicy::Random`] draws from the thread local rng. With a seed, the same
/// input is always partitioned the same way.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Quicksort {
    pivot: PivotPolicy,
    execution: Execution,
    seed: Option<u64>,
}

impl Quicksort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pivot(mut self, pivot: PivotPolicy) -> Self {
        self.pivot = pivot;
        self
    }

    pub fn execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn pivot_policy(&self) -> PivotPolicy {
        self.pivot
    }

    pub fn execution_mode(&self) -> Execution {
        self.execution
    }

    pub fn rng_seed(&self) -> Option<u64> {
        self.seed
    }

    /// Sorts `v` in place. Not stable.
    pub fn sort<T>(&self, v: &mut [T])
    where
        T: Ord,
    {
        self.sort_by(v, |a, b| a.cmp(b));
    }

    pub fn sort_by<T, F>(&self, v: &mut [T], mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if std::mem::size_of::<T>() == 0 {
            return;
        }

        let mut is_less = |a: &T, b: &T| compare(a, b) == Ordering::Less;
        match (self.seed, self.pivot) {
            (Some(seed), _) => self.drive(v, &mut is_less, &mut Some(StdRng::seed_from_u64(seed))),
            (None, PivotPolicy::Random) => {
                self.drive(v, &mut is_less, &mut Some(rand::thread_rng()))
            }
            (None, _) => self.drive(v, &mut is_less, &mut None::<ThreadRng>),
        }
    }

    /// Sorts the inclusive range `v[low..=high]` in place.
    ///
    /// `low > high` does nothing, `high >= v.len()` is an error and leaves `v` unchanged.
    pub fn sort_range<T>(&self, v: &mut [T], low: usize, high: usize) -> Result<()>
    where
        T: Ord,
    {
        self.sort_range_by(v, low, high, |a, b| a.cmp(b))
    }

    pub fn sort_range_by<T, F>(&self, v: &mut [T], low: usize, high: usize, compare: F) -> Result<()>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if let Some(range) = check_range(low, high, v.len())? {
            self.sort_by(&mut v[range], compare);
        }

        Ok(())
    }

    /// Returns a stably sorted copy of `v` using the configured pivot policy.
    ///
    /// The execution mode does not apply. Pending groups are kept on a heap work list, so native
    /// stack use stays constant, but a fixed pivot on sorted input still costs *O*(*n*^2)
    /// comparisons.
    pub fn sort_new<T>(&self, v: &[T]) -> Vec<T>
    where
        T: Ord + Clone,
    {
        self.into_sorted_by(v.to_vec(), |a, b| a.cmp(b))
    }

    pub fn sort_new_by<T, F>(&self, v: &[T], compare: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        self.into_sorted_by(v.to_vec(), compare)
    }

    /// Like [`Quicksort::sort_new`] but takes ownership of `v`, no clones needed.
    pub fn into_sorted<T>(&self, v: Vec<T>) -> Vec<T>
    where
        T: Ord,
    {
        self.into_sorted_by(v, |a, b| a.cmp(b))
    }

    pub fn into_sorted_by<T, F>(&self, v: Vec<T>, mut compare: F) -> Vec<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut is_less = |a: &T, b: &T| compare(a, b) == Ordering::Less;
        match (self.seed, self.pivot) {
            (Some(seed), _) => filter_sort(
                v,
                self.pivot,
                &mut is_less,
                &mut Some(StdRng::seed_from_u64(seed)),
            ),
            (None, PivotPolicy::Random) => {
                filter_sort(v, self.pivot, &mut is_less, &mut Some(rand::thread_rng()))
            }
            (None, _) => filter_sort(v, self.pivot, &mut is_less, &mut None::<ThreadRng>),
        }
    }

    fn drive<T, F, R>(&self, v: &mut [T], is_less: &mut F, rng: &mut Option<R>)
    where
        F: FnMut(&T, &T) -> bool,
        R: Rng,
    {
        match self.execution {
            Execution::Recursive => rust_lomuto_recursive::quicksort(v, self.pivot, is_less, rng),
            Execution::Iterative => rust_lomuto_stack::quicksort(v, self.pivot, is_less, rng),
        }
    }
}
