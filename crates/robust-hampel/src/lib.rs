//! Hampel filter outlier detection for time series
//!
//! The Hampel filter flags a sample as an outlier when it lies too far from
//! the median of the samples around it, measured in units of the scaled
//! Median Absolute Deviation (MAD) of the same window, and replaces flagged
//! samples with that median.
//!
//! # Strategies
//!
//! Two strategies are provided. They agree in intent but not at the edges:
//!
//! | | [`ReferenceHampel`] | [`FastHampel`] |
//! |---|---|---|
//! | Window at `i` | `[i - w, i + w)` | `[i - w, i + w)` |
//! | Edge positions | filled from nearest computed window | never evaluated |
//! | Missing samples | poison the window | skipped |
//! | Decision | `deviation >= threshold * scale` | `deviation > threshold * scale` |
//! | Arguments | validated | unchecked |
//!
//! Both implement [`OutlierDetector`], so code written against the trait can
//! take either.
//!
//! # Example
//!
//! ```rust
//! use robust_hampel::{FastHampel, HampelParameters, OutlierDetector, ReferenceHampel};
//!
//! let mut series = vec![1.0; 21];
//! series[10] = 100.0;
//!
//! let params = HampelParameters::new(5, 3.0);
//! let reference = ReferenceHampel::new(params).unwrap();
//! let fast = FastHampel::new(params);
//!
//! for detector in [&reference as &dyn OutlierDetector<f64>, &fast] {
//!     let result = detector.detect_outliers(&series).unwrap();
//!     assert_eq!(result.outlier_indices(), &[10]);
//!     assert_eq!(result.cleaned()[10], 1.0);
//! }
//! ```
//!
//! # Missing values
//!
//! NaN marks a missing sample. Statistics of windows without usable samples
//! are NaN, and a comparison against NaN never flags, so missing data never
//! produces an error.

pub mod api;
pub mod fast;
pub mod indexed;
pub mod params;
pub mod reference;
pub mod rolling;
pub mod traits;
pub mod types;
pub mod validation;

// Re-export main types
pub use fast::{FastHampel, FAST_ALGORITHM};
pub use indexed::{
    fast_detect_indexed, filter_indexed, window_to_radius, IndexedOutliers, IndexedSeries,
};
pub use params::{
    HampelParameters, ThresholdRule, DEFAULT_INDEXED_WINDOW, DEFAULT_THRESHOLD,
    DEFAULT_WINDOW_SIZE,
};
pub use reference::{ReferenceHampel, REFERENCE_ALGORITHM};
pub use rolling::{fill_backward, fill_forward, rolling_centered, RollingStats};
pub use traits::{ConfigurableDetector, OutlierDetector, OutlierDetectorProperties};
pub use types::{BoundaryPolicy, Comparison, Detection, OutlierResult};
pub use validation::{validate_arguments, validate_scale_factor, validate_threshold, validate_window_size};

pub use robust_spread::GAUSSIAN_SCALE_FACTOR;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::api::{detect, fast_detect, filter, filter_default};
    pub use crate::{
        ConfigurableDetector, Detection, FastHampel, HampelParameters, IndexedSeries,
        OutlierDetector, OutlierDetectorProperties, OutlierResult, ReferenceHampel,
    };
    pub use robust_core::{Error, Result};
}
