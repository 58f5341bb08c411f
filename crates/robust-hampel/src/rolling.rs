//! Centered rolling statistics with boundary fill
//!
//! For a half width `w`, position `i` is summarised by the window
//! `[i - w, i + w)` (`2w` samples). A position is computable only when that
//! window lies entirely inside the series and contains no missing sample;
//! every other position starts out undefined and is then filled from its
//! neighbours: first backward (a gap takes the next later defined value),
//! then forward (remaining gaps take the nearest earlier defined value).

use robust_core::{ExecutionEngine, Numeric};
use robust_spread::SpreadEstimator;
use std::ops::Range;

/// Rolling location and scale, one value per input position
#[derive(Debug, Clone, PartialEq)]
pub struct RollingStats<T: Numeric> {
    /// Rolling median after boundary fill
    pub median: Vec<T>,
    /// Rolling scale after boundary fill
    pub scale: Vec<T>,
    /// Number of positions whose window was computed directly
    pub computed: usize,
}

/// Bounds of the centered window at `position`, if it fits inside `len`
pub fn centered_window(position: usize, half_width: usize, len: usize) -> Option<Range<usize>> {
    let start = position.checked_sub(half_width)?;
    let end = position.checked_add(half_width)?;
    (end <= len).then_some(start..end)
}

/// Propagate each defined value backward into the undefined slots before it
pub fn fill_backward<T: Numeric>(values: &mut [T]) {
    let mut next = None;
    for value in values.iter_mut().rev() {
        if value.is_missing() {
            if let Some(next) = next {
                *value = next;
            }
        } else {
            next = Some(*value);
        }
    }
}

/// Propagate each defined value forward into the undefined slots after it
pub fn fill_forward<T: Numeric>(values: &mut [T]) {
    let mut previous = None;
    for value in values.iter_mut() {
        if value.is_missing() {
            if let Some(previous) = previous {
                *value = previous;
            }
        } else {
            previous = Some(*value);
        }
    }
}

/// Backward fill followed by forward fill
pub fn fill_boundaries<T: Numeric>(values: &mut [T]) {
    fill_backward(values);
    fill_forward(values);
}

/// Rolling median and scale over centered windows of `2 * half_width` samples.
///
/// Per-position work is dispatched through `engine`; each position only
/// produces its own pair, so every engine yields the same result.
pub fn rolling_centered<T, S, E>(
    series: &[T],
    half_width: usize,
    estimator: &S,
    engine: &E,
) -> RollingStats<T>
where
    T: Numeric,
    S: SpreadEstimator<T> + Sync,
    E: ExecutionEngine,
{
    let len = series.len();
    let pairs = engine.execute_batch(len, |i| match centered_window(i, half_width, len) {
        Some(range) => estimator.location_and_scale(&series[range]),
        None => (T::missing(), T::missing()),
    });

    let (mut median, mut scale): (Vec<T>, Vec<T>) = pairs.into_iter().unzip();
    let computed = median.iter().filter(|m| !m.is_missing()).count();

    fill_boundaries(&mut median);
    fill_boundaries(&mut scale);

    RollingStats {
        median,
        scale,
        computed,
    }
}
