use std::error::Error;
use std::fmt;

/// Errors reported by the checked range entry points and by text configuration.
///
/// Range checks run before any element moves, so on `Err` the slice is unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// `index` is not a valid position in a slice of length `len`.
    OutOfBounds { index: usize, len: usize },
    /// `low > high` where a non-empty range is required.
    InvertedRange { low: usize, high: usize },
    UnknownPivotPolicy(String),
    UnknownExecution(String),
}

pub type Result<T> = std::result::Result<T, SortError>;

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortError::OutOfBounds { index, len } => {
                write!(f, "index {index} out of range for slice of length {len}")
            }
            SortError::InvertedRange { low, high } => {
                write!(f, "range start {low} is greater than range end {high}")
            }
            SortError::UnknownPivotPolicy(name) => write!(
                f,
                "unknown pivot policy '{name}', expected one of: last, middle, random, median3"
            ),
            SortError::UnknownExecution(name) => write!(
                f,
                "unknown execution mode '{name}', expected recursive or iterative"
            ),
        }
    }
}

impl Error for SortError {}

/// Validates the inclusive range `[low, high]` against `len`.
///
/// Returns `Ok(None)` for an empty range (`low > high`) and the equivalent half-open range
/// otherwise.
pub(crate) fn check_range(
    low: usize,
    high: usize,
    len: usize,
) -> Result<Option<std::ops::Range<usize>>> {
    if low > high {
        return Ok(None);
    }

    if high >= len {
        log::debug!("rejected range [{low}, {high}] for slice of length {len}");
        return Err(SortError::OutOfBounds { index: high, len });
    }

    Ok(Some(low..high + 1))
}
