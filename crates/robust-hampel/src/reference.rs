//! Reference Hampel filter
//!
//! Every position is compared against the rolling median and rolling scaled
//! MAD of the `2 * window_size` samples centered on it. Positions whose
//! window does not fit inside the series borrow the nearest computed
//! statistics (backward fill, then forward fill), so the edges are evaluated
//! too. A sample is an outlier when
//!
//! ```text
//! |x[i] - median[i]| >= threshold * scaled_mad[i]
//! ```
//!
//! A sample that sits exactly on its rolling median is never an outlier,
//! even when the scaled MAD is zero.

use crate::params::HampelParameters;
use crate::rolling::rolling_centered;
use crate::traits::{ConfigurableDetector, OutlierDetector, OutlierDetectorProperties};
use crate::types::{BoundaryPolicy, Comparison, Detection, OutlierResult};
use robust_core::{ExecutionEngine, Numeric, Result, SequentialEngine};
use robust_spread::{MissingPolicy, StandardizedMad};
use tracing::{debug, instrument};

/// Algorithm name reported in results
pub const REFERENCE_ALGORITHM: &str = "Hampel (reference)";

/// Hampel filter with centered windows and boundary fill
#[derive(Debug, Clone)]
pub struct ReferenceHampel<E: ExecutionEngine = SequentialEngine> {
    params: HampelParameters,
    engine: E,
}

impl ReferenceHampel<SequentialEngine> {
    /// Create a sequential filter, validating `params`
    pub fn new(params: HampelParameters) -> Result<Self> {
        Self::with_engine(params, SequentialEngine)
    }
}

impl<E: ExecutionEngine> ReferenceHampel<E> {
    /// Create a filter that runs per-position work on `engine`
    pub fn with_engine(params: HampelParameters, engine: E) -> Result<Self> {
        params.validate()?;
        Ok(Self { params, engine })
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Rolling statistics and outlier mask for `series`
    #[instrument(skip(self, series), fields(len = series.len(), window_size = self.params.window_size, dtype = T::TYPE_NAME))]
    pub fn detect<T: Numeric>(&self, series: &[T]) -> Detection<T> {
        let half_width = self.params.window_size;
        let estimator = StandardizedMad::with_factor(T::from_f64(self.params.scale_factor))
            .with_missing_policy(MissingPolicy::Propagate);

        let stats = rolling_centered(series, half_width, &estimator, &self.engine);
        if stats.computed == 0 {
            debug!(
                "No complete window of {} samples in a series of length {}; nothing can be flagged",
                self.params.full_window(),
                series.len()
            );
        } else {
            debug!(
                "Computed {} of {} windows directly, remaining positions filled",
                stats.computed,
                series.len()
            );
        }

        let threshold = T::from_f64(self.params.threshold);
        let is_outlier: Vec<bool> = series
            .iter()
            .zip(stats.median.iter().zip(&stats.scale))
            .map(|(&x, (&center, &scale))| {
                let deviation = (x - center).abs();
                deviation > T::zero() && Comparison::Inclusive.exceeds(deviation, threshold * scale)
            })
            .collect();

        let detection = Detection::new(is_outlier, stats.median, stats.scale);
        debug!("Flagged {} outliers", detection.outlier_count());
        detection
    }

    /// Detect outliers and replace each with its rolling median
    pub fn filter<T: Numeric>(&self, series: &[T]) -> OutlierResult<T> {
        self.detect(series).into_filtered(series, REFERENCE_ALGORITHM)
    }
}

impl<E: ExecutionEngine> OutlierDetectorProperties for ReferenceHampel<E> {
    fn algorithm_name(&self) -> &'static str {
        REFERENCE_ALGORITHM
    }

    fn boundary_policy(&self) -> BoundaryPolicy {
        BoundaryPolicy::Fill
    }

    fn comparison(&self) -> Comparison {
        Comparison::Inclusive
    }

    fn minimum_sample_size(&self) -> usize {
        self.params.full_window()
    }
}

impl<T: Numeric, E: ExecutionEngine> OutlierDetector<T> for ReferenceHampel<E> {
    fn detect_outliers(&self, series: &[T]) -> Result<OutlierResult<T>> {
        Ok(self.filter(series))
    }
}

impl<E: ExecutionEngine> ConfigurableDetector for ReferenceHampel<E> {
    type Parameters = HampelParameters;

    fn parameters(&self) -> &HampelParameters {
        &self.params
    }

    fn set_parameters(&mut self, params: HampelParameters) -> Result<()> {
        params.validate()?;
        self.params = params;
        Ok(())
    }
}
