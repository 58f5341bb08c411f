//! High-level API for Hampel outlier filtering
//!
//! Free functions over plain slices for the common cases. They build a
//! [`ReferenceHampel`] or [`FastHampel`] with the given parameters and run it
//! on the sequential engine; construct the detectors directly to choose an
//! engine or reuse a configuration.

use crate::fast::FastHampel;
use crate::params::{HampelParameters, DEFAULT_THRESHOLD, DEFAULT_WINDOW_SIZE};
use crate::reference::ReferenceHampel;
use crate::types::{Detection, OutlierResult};
use num_traits::PrimInt;
use robust_core::{Numeric, Result};
use robust_spread::GAUSSIAN_SCALE_FACTOR;
use std::fmt::Display;

// Re-export the indexed entry points for convenience
pub use crate::indexed::{fast_detect_indexed, filter_indexed};
pub use crate::validation::validate_arguments;

fn reference<W>(window_size: W, threshold: f64, k: f64) -> Result<ReferenceHampel>
where
    W: PrimInt + Display,
{
    let window_size = validate_arguments(window_size, threshold)?;
    ReferenceHampel::new(HampelParameters::new(window_size, threshold).with_scale_factor(k))
}

/// Rolling median, scaled MAD and outlier mask of `series`.
///
/// # Arguments
/// * `series` - Samples to inspect; NaN marks a missing sample
/// * `window_size` - Half width; each window spans `2 * window_size` samples
/// * `threshold` - Non-negative multiple of the scaled MAD
/// * `k` - MAD consistency factor, usually [`GAUSSIAN_SCALE_FACTOR`]
///
/// # Example
/// ```rust
/// use robust_hampel::api::detect;
///
/// let mut series = vec![1.0; 21];
/// series[10] = 100.0;
///
/// let detection = detect(&series, 5, 3.0, 1.4826).unwrap();
/// assert_eq!(detection.outlier_indices(), &[10]);
/// assert_eq!(detection.rolling_median()[10], 1.0);
/// ```
pub fn detect<T, W>(series: &[T], window_size: W, threshold: f64, k: f64) -> Result<Detection<T>>
where
    T: Numeric,
    W: PrimInt + Display,
{
    Ok(reference(window_size, threshold, k)?.detect(series))
}

/// Detect outliers and replace each with its rolling median.
///
/// Arguments as for [`detect`]. The input is not modified.
pub fn filter<T, W>(series: &[T], window_size: W, threshold: f64, k: f64) -> Result<OutlierResult<T>>
where
    T: Numeric,
    W: PrimInt + Display,
{
    Ok(reference(window_size, threshold, k)?.filter(series))
}

/// [`filter`] with window size 5, threshold 3 and the Gaussian scale factor
pub fn filter_default<T: Numeric>(series: &[T]) -> Result<OutlierResult<T>> {
    filter(series, DEFAULT_WINDOW_SIZE, DEFAULT_THRESHOLD, GAUSSIAN_SCALE_FACTOR)
}

/// Single-pass filter that skips the first and last `window_size` positions.
///
/// Never fails; a zero window flags nothing.
///
/// # Example
/// ```rust
/// use robust_hampel::api::fast_detect;
///
/// let buffer: Vec<f64> = vec![0.0, 0.1, -0.1, 0.0, 9.0, 0.1, 0.0, -0.1, 0.0];
/// let result = fast_detect(&buffer, 3, 3.0, 1.4826);
/// assert_eq!(result.outlier_indices(), &[4]);
/// assert!(result.cleaned()[4].abs() < 0.1);
/// ```
pub fn fast_detect<T: Numeric>(buffer: &[T], window_size: usize, threshold: f64, k: f64) -> OutlierResult<T> {
    FastHampel::new(HampelParameters::new(window_size, threshold).with_scale_factor(k)).filter(buffer)
}
