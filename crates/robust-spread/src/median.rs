//! Sample median with explicit missing-value policies
//!
//! Two flavours are provided:
//!
//! - [`median`] propagates missing values: a window containing NaN has an
//!   undefined (NaN) median.
//! - [`nanmedian`] ignores missing values and only returns NaN when nothing
//!   defined is left.
//!
//! Both use selection (`select_nth_unstable_by`) instead of a full sort.

use robust_core::Numeric;
use std::cmp::Ordering;

/// How missing (NaN) samples inside a window are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingPolicy {
    /// Any missing sample makes the statistic undefined
    #[default]
    Propagate,
    /// Missing samples are skipped
    Ignore,
}

impl MissingPolicy {
    /// Median of `window` under this policy
    pub fn median<T: Numeric>(self, window: &[T]) -> T {
        match self {
            MissingPolicy::Propagate => median(window),
            MissingPolicy::Ignore => nanmedian(window),
        }
    }
}

/// Median of `window`, NaN if it is empty or contains a missing value
pub fn median<T: Numeric>(window: &[T]) -> T {
    if window.iter().any(|x| x.is_missing()) {
        return T::missing();
    }
    let mut buffer = window.to_vec();
    median_in_place(&mut buffer)
}

/// Median of the defined values in `window`, NaN if there are none
pub fn nanmedian<T: Numeric>(window: &[T]) -> T {
    let mut buffer: Vec<T> = window.iter().copied().filter(|x| !x.is_missing()).collect();
    median_in_place(&mut buffer)
}

/// Median of a slice, reordering it in place.
///
/// Even-sized slices average the two middle elements. Returns NaN for an
/// empty slice or one containing a missing value.
pub fn median_in_place<T: Numeric>(data: &mut [T]) -> T {
    let n = data.len();
    if n == 0 || data.iter().any(|x| x.is_missing()) {
        return T::missing();
    }

    let mid = n / 2;
    let (lower, upper, _) =
        data.select_nth_unstable_by(mid, |a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let upper = *upper;

    if n % 2 == 1 {
        upper
    } else {
        // The lower middle element is the maximum of the left partition
        let lower_middle = lower.iter().copied().fold(T::neg_infinity(), T::max);
        (lower_middle + upper) / T::from_f64(2.0)
    }
}
