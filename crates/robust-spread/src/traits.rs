//! Core traits for spread estimation

use crate::median::MissingPolicy;
use robust_core::Numeric;

/// Intrinsic properties of a spread estimator that don't depend on implementation details
pub trait SpreadEstimatorProperties {
    /// Get the name of this spread estimator
    fn name(&self) -> &str;

    /// Check if this estimator is robust to outliers
    fn is_robust(&self) -> bool;

    /// Get the asymptotic breakdown point (0.0 to 0.5)
    fn breakdown_point(&self) -> f64;

    /// Get the efficiency of this estimator relative to the standard deviation
    /// for normal distributions (0.0 to 1.0)
    fn gaussian_efficiency(&self) -> f64;
}

/// Spread/scale estimator over a window of samples
///
/// Estimators never fail: an empty or undefined window yields NaN.
pub trait SpreadEstimator<T: Numeric = f64>: SpreadEstimatorProperties {
    /// How missing samples are treated
    fn missing_policy(&self) -> MissingPolicy;

    /// Estimate spread about an already computed center
    ///
    /// Rolling algorithms compute the window median anyway, so they pass it
    /// in instead of having it recomputed.
    fn estimate_about(&self, window: &[T], center: T) -> T;

    /// Estimate spread about the window median
    fn estimate(&self, window: &[T]) -> T {
        let center = self.missing_policy().median(window);
        self.estimate_about(window, center)
    }

    /// Median and spread of a window in one call
    fn location_and_scale(&self, window: &[T]) -> (T, T) {
        let center = self.missing_policy().median(window);
        (center, self.estimate_about(window, center))
    }
}
