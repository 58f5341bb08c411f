//! Robust outlier detection for time series
//!
//! This crate re-exports the workspace crates:
//!
//! - [`robust_core`]: error type, numeric abstraction and execution engines
//! - [`robust_spread`]: median and MAD primitives
//! - [`robust_hampel`]: the Hampel filter in its reference and fast forms
//!
//! # Example
//!
//! ```rust
//! use robust_anomaly::prelude::*;
//!
//! let mut series = vec![0.5; 30];
//! series[12] = 9.0;
//!
//! let result = filter(&series, 5, 3.0, GAUSSIAN_SCALE_FACTOR).unwrap();
//! assert_eq!(result.outlier_indices(), &[12]);
//! assert_eq!(result.cleaned()[12], 0.5);
//! ```

pub use robust_core;
pub use robust_hampel;
pub use robust_spread;

pub use robust_core::{Error, Numeric, Result};
pub use robust_hampel::{
    Detection, FastHampel, HampelParameters, IndexedSeries, OutlierDetector, OutlierResult,
    ReferenceHampel,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use robust_core::prelude::*;
    pub use robust_hampel::prelude::*;
    pub use robust_spread::{median, nanmedian, scaled_mad, GAUSSIAN_SCALE_FACTOR};
}
