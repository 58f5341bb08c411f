//! Core traits for outlier detection
//!
//! Both Hampel strategies implement [`OutlierDetector`], so callers that only
//! need "a mask aligned to the input plus a cleaned copy" can be written once
//! and handed either strategy. The strategies keep their own boundary and
//! comparison semantics, exposed through [`OutlierDetectorProperties`].

use crate::types::{BoundaryPolicy, Comparison, OutlierResult};
use robust_core::{Numeric, Result};

/// Properties of an outlier detector that don't depend on the data
pub trait OutlierDetectorProperties {
    /// Get the name of the detection algorithm
    fn algorithm_name(&self) -> &'static str;

    /// How edge positions are handled
    fn boundary_policy(&self) -> BoundaryPolicy;

    /// Decision rule used against `threshold * scale`
    fn comparison(&self) -> Comparison;

    /// Smallest series length for which at least one position has a full window
    fn minimum_sample_size(&self) -> usize;
}

/// Outlier detection over a one-dimensional ordered series
pub trait OutlierDetector<T: Numeric>: OutlierDetectorProperties {
    /// Flag outliers in `series` and return a cleaned copy
    fn detect_outliers(&self, series: &[T]) -> Result<OutlierResult<T>>;

    /// Process several independent series with the same detector
    ///
    /// Default implementation processes sequentially
    fn detect_outliers_batch(&self, series: &[&[T]]) -> Result<Vec<OutlierResult<T>>> {
        series
            .iter()
            .map(|s| self.detect_outliers(s))
            .collect()
    }
}

/// Detectors whose parameters can be inspected and replaced
pub trait ConfigurableDetector {
    type Parameters;

    fn parameters(&self) -> &Self::Parameters;

    /// Replace the parameters, rejecting invalid ones
    fn set_parameters(&mut self, params: Self::Parameters) -> Result<()>;
}
