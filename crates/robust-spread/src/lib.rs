//! Robust location and spread primitives for windowed analysis
//!
//! This crate provides the median and Median Absolute Deviation (MAD)
//! statistics that rolling outlier filters are built on.
//!
//! # Overview
//!
//! Spread (or scale) estimators measure the variability in data. The
//! standard deviation is sensitive to outliers; the MAD has a 50% breakdown
//! point, and scaled by [`GAUSSIAN_SCALE_FACTOR`] it estimates the standard
//! deviation of normally distributed data.
//!
//! Every function is total: empty windows and windows whose values are
//! undefined produce NaN rather than an error. [`MissingPolicy`] selects
//! whether missing samples poison a window (`median`) or are skipped
//! (`nanmedian`).
//!
//! # Example
//!
//! ```rust
//! use robust_spread::{median, nanmedian, scaled_mad, GAUSSIAN_SCALE_FACTOR};
//!
//! let window = vec![1.0, 2.0, 3.0, 4.0, 5.0, 100.0]; // Outlier!
//! assert_eq!(median(&window), 3.5);
//!
//! // MAD ignores the outlier: deviations are [2.5, 1.5, 0.5, 0.5, 1.5, 96.5]
//! let sigma = scaled_mad(&window, GAUSSIAN_SCALE_FACTOR);
//! assert!((sigma - 1.5 * 1.4826).abs() < 1e-12);
//!
//! assert_eq!(nanmedian(&[1.0, f64::NAN, 3.0]), 2.0);
//! ```

pub mod mad;
pub mod median;
pub mod traits;

// Re-exports
pub use mad::{
    gaussian_consistency_factor, mad, nan_scaled_mad, nanmad, scaled_mad, Mad, StandardizedMad,
    GAUSSIAN_SCALE_FACTOR,
};
pub use median::{median, median_in_place, nanmedian, MissingPolicy};
pub use traits::{SpreadEstimator, SpreadEstimatorProperties};
