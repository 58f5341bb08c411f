//! Fast Hampel filter
//!
//! A single pass over the interior of the buffer. For each position `t` with
//! `w <= t < len - w` the window `buffer[t - w..t + w]` is summarised with
//! NaN-skipping median and MAD, and `t` is flagged when its deviation from
//! the window median is strictly greater than `threshold * k * MAD`.
//! The first and last `w` positions are never evaluated.
//!
//! Unlike [`ReferenceHampel`](crate::ReferenceHampel), nothing is validated:
//! a zero window produces empty windows, whose statistics are NaN, so nothing
//! is flagged.

use crate::params::HampelParameters;
use crate::traits::{ConfigurableDetector, OutlierDetector, OutlierDetectorProperties};
use crate::types::{BoundaryPolicy, Comparison, OutlierResult};
use robust_core::{ExecutionEngine, Numeric, Result, SequentialEngine};
use robust_spread::{MissingPolicy, SpreadEstimator, StandardizedMad};
use tracing::{debug, instrument, trace};

/// Algorithm name reported in results
pub const FAST_ALGORITHM: &str = "Hampel (fast)";

/// Hampel filter that skips the edges and ignores missing samples
#[derive(Debug, Clone)]
pub struct FastHampel<E: ExecutionEngine = SequentialEngine> {
    params: HampelParameters,
    engine: E,
}

impl FastHampel<SequentialEngine> {
    pub fn new(params: HampelParameters) -> Self {
        Self::with_engine(params, SequentialEngine)
    }
}

impl<E: ExecutionEngine> FastHampel<E> {
    pub fn with_engine(params: HampelParameters, engine: E) -> Self {
        Self { params, engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Range of positions that are evaluated for a buffer of `len` samples
    pub fn evaluated_positions(&self, len: usize) -> std::ops::Range<usize> {
        let w = self.params.window_size;
        w..len.saturating_sub(w).max(w)
    }

    /// Flag outliers in `buffer` and return a cleaned copy
    #[instrument(skip(self, buffer), fields(len = buffer.len(), window_size = self.params.window_size, dtype = T::TYPE_NAME))]
    pub fn filter<T: Numeric>(&self, buffer: &[T]) -> OutlierResult<T> {
        let w = self.params.window_size;
        let positions = self.evaluated_positions(buffer.len());
        let estimator = StandardizedMad::with_factor(T::from_f64(self.params.scale_factor))
            .with_missing_policy(MissingPolicy::Ignore);
        let threshold = T::from_f64(self.params.threshold);

        debug!("Evaluating {} interior positions", positions.len());

        let start = positions.start;
        let replacements = self.engine.execute_batch(positions.len(), |offset| {
            let t = start + offset;
            let window = &buffer[t - w..t + w];
            let (center, scale) = estimator.location_and_scale(window);
            let deviation = (buffer[t] - center).abs();
            Comparison::Strict
                .exceeds(deviation, threshold * scale)
                .then_some(center)
        });

        let mut is_outlier = vec![false; buffer.len()];
        let mut cleaned = buffer.to_vec();
        for (offset, replacement) in replacements.into_iter().enumerate() {
            if let Some(center) = replacement {
                let t = start + offset;
                trace!("Outlier at {}: {:?} -> {:?}", t, buffer[t], center);
                is_outlier[t] = true;
                cleaned[t] = center;
            }
        }

        let result = OutlierResult::new(is_outlier, cleaned, FAST_ALGORITHM);
        debug!("Flagged {} outliers", result.outlier_count());
        result
    }
}

impl<E: ExecutionEngine> OutlierDetectorProperties for FastHampel<E> {
    fn algorithm_name(&self) -> &'static str {
        FAST_ALGORITHM
    }

    fn boundary_policy(&self) -> BoundaryPolicy {
        BoundaryPolicy::Skip
    }

    fn comparison(&self) -> Comparison {
        Comparison::Strict
    }

    fn minimum_sample_size(&self) -> usize {
        self.params.full_window() + 1
    }
}

impl<T: Numeric, E: ExecutionEngine> OutlierDetector<T> for FastHampel<E> {
    fn detect_outliers(&self, series: &[T]) -> Result<OutlierResult<T>> {
        Ok(self.filter(series))
    }
}

impl<E: ExecutionEngine> ConfigurableDetector for FastHampel<E> {
    type Parameters = HampelParameters;

    fn parameters(&self) -> &HampelParameters {
        &self.params
    }

    fn set_parameters(&mut self, params: HampelParameters) -> Result<()> {
        self.params = params;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_evaluated_positions() {
        let filter = FastHampel::new(HampelParameters::new(3, 3.0));
        assert_eq!(filter.evaluated_positions(10), 3..7);
        assert_eq!(filter.evaluated_positions(6), 3..3);
        assert!(filter.evaluated_positions(2).is_empty());
    }

    #[test]
    fn test_single_spike() {
        let mut series = vec![1.0; 21];
        series[10] = 100.0;
        let result = FastHampel::new(HampelParameters::new(5, 3.0)).filter(&series);

        assert_eq!(result.outlier_indices(), &[10]);
        assert_relative_eq!(result.cleaned()[10], 1.0);
        assert_eq!(result.len(), series.len());
    }

    #[test]
    fn test_edges_are_never_flagged() {
        let mut series = vec![0.0; 12];
        series[0] = 50.0;
        series[11] = -50.0;
        let result = FastHampel::new(HampelParameters::new(2, 1.0)).filter(&series);

        assert!(!result.has_outliers());
        assert_eq!(result.cleaned(), series.as_slice());
    }

    #[test]
    fn test_zero_window_flags_nothing() {
        let series = vec![1.0, 50.0, 1.0, -20.0];
        let result = FastHampel::new(HampelParameters::new(0, 3.0)).filter(&series);
        assert!(!result.has_outliers());
        assert_eq!(result.cleaned(), series.as_slice());
    }

    #[test]
    fn test_properties() {
        let filter = FastHampel::new(HampelParameters::new(4, 3.0));
        assert_eq!(filter.algorithm_name(), FAST_ALGORITHM);
        assert_eq!(filter.boundary_policy(), BoundaryPolicy::Skip);
        assert_eq!(filter.comparison(), Comparison::Strict);
        assert_eq!(filter.minimum_sample_size(), 9);
    }
}
