//! Pivot selection policies.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::SortError;

/// How a driver picks the pivot of each sub-range.
///
/// | policy          | chosen index                 | degrades on                          |
/// |-----------------|------------------------------|--------------------------------------|
/// | `Last`          | `len - 1`                    | ascending, descending, few distinct  |
/// | `Middle`        | `len / 2`                    | crafted median killer inputs         |
/// | `Random`        | uniform in `0..len`          | nothing deterministic                |
/// | `MedianOfThree` | median of first, mid, last   | crafted inputs                       |
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PivotPolicy {
    #[default]
    Last,
    Middle,
    Random,
    MedianOfThree,
}

impl PivotPolicy {
    pub const ALL: [PivotPolicy; 4] = [
        PivotPolicy::Last,
        PivotPolicy::Middle,
        PivotPolicy::Random,
        PivotPolicy::MedianOfThree,
    ];

    /// Name as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            PivotPolicy::Last => "last",
            PivotPolicy::Middle => "middle",
            PivotPolicy::Random => "random",
            PivotPolicy::MedianOfThree => "median3",
        }
    }

    /// Returns the index of the pivot in `v`. `v` must not be empty.
    ///
    /// `rng` is only drawn from by [`PivotPolicy::Random`], fixed policies are driven with `None`.
    /// `Random` without an rng falls back to the thread local one.
    #[inline]
    pub(crate) fn choose<T, F, R>(self, v: &[T], is_less: &mut F, rng: &mut Option<R>) -> usize
    where
        F: FnMut(&T, &T) -> bool,
        R: Rng,
    {
        let len = v.len();
        debug_assert!(len > 0);

        match self {
            PivotPolicy::Last => len - 1,
            PivotPolicy::Middle => len / 2,
            PivotPolicy::Random => match rng {
                Some(rng) => rng.gen_range(0..len),
                None => rand::thread_rng().gen_range(0..len),
            },
            PivotPolicy::MedianOfThree => {
                if len < 3 {
                    len - 1
                } else {
                    median3(v, 0, len / 2, len - 1, is_less)
                }
            }
        }
    }
}

impl fmt::Display for PivotPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PivotPolicy {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "last" => Ok(PivotPolicy::Last),
            "middle" | "mid" => Ok(PivotPolicy::Middle),
            "random" => Ok(PivotPolicy::Random),
            "median3" | "median_of_three" | "median-of-three" => Ok(PivotPolicy::MedianOfThree),
            _ => Err(SortError::UnknownPivotPolicy(s.to_owned())),
        }
    }
}

/// Returns the index of the median of `v[a]`, `v[b]` and `v[c]`.
fn median3<T, F>(v: &[T], a: usize, b: usize, c: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    // If `v[a]` is not strictly between the other two it is either the minimum or the maximum, and
    // the median is whichever of `v[b]`, `v[c]` lies on the far side.
    let x = is_less(&v[a], &v[b]);
    let y = is_less(&v[a], &v[c]);
    if x == y {
        let z = is_less(&v[b], &v[c]);
        if z ^ x {
            c
        } else {
            b
        }
    } else {
        a
    }
}
