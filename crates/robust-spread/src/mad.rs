//! Median Absolute Deviation (MAD) estimators
//!
//! `MAD(x) = median(|x - median(x)|)`. Multiplying by the Gaussian
//! consistency factor turns it into an estimator of the standard deviation
//! for normally distributed data.

use crate::median::{median_in_place, MissingPolicy};
use crate::traits::{SpreadEstimator, SpreadEstimatorProperties};
use robust_core::Numeric;
use statrs::distribution::{ContinuousCDF, Normal};

/// Consistency factor `k ≈ 1 / Φ⁻¹(3/4)`.
///
/// With this factor `±k·MAD` covers the central 50% of a standard normal
/// distribution, making the scaled MAD comparable to a standard deviation.
pub const GAUSSIAN_SCALE_FACTOR: f64 = 1.4826;

/// Gaussian efficiency of the MAD relative to the standard deviation
const MAD_GAUSSIAN_EFFICIENCY: f64 = 0.3675;

/// Exact consistency factor `1 / Φ⁻¹(3/4)` derived from the normal quantile
/// function. [`GAUSSIAN_SCALE_FACTOR`] is this value rounded to four places.
pub fn gaussian_consistency_factor() -> f64 {
    Normal::new(0.0, 1.0)
        .map(|standard| 1.0 / standard.inverse_cdf(0.75))
        .unwrap_or(GAUSSIAN_SCALE_FACTOR)
}

/// MAD of `window` about a known `center`
fn mad_about<T: Numeric>(window: &[T], center: T, policy: MissingPolicy) -> T {
    if center.is_missing() {
        return T::missing();
    }
    let mut deviations: Vec<T> = match policy {
        MissingPolicy::Propagate => {
            if window.iter().any(|x| x.is_missing()) {
                return T::missing();
            }
            window.iter().map(|&x| (x - center).abs()).collect()
        }
        MissingPolicy::Ignore => window
            .iter()
            .filter(|x| !x.is_missing())
            .map(|&x| (x - center).abs())
            .collect(),
    };
    median_in_place(&mut deviations)
}

/// MAD of `window`, NaN if it is empty or contains a missing value
pub fn mad<T: Numeric>(window: &[T]) -> T {
    Mad::new().estimate(window)
}

/// MAD of the defined values in `window`, NaN if there are none
pub fn nanmad<T: Numeric>(window: &[T]) -> T {
    Mad::ignoring_missing().estimate(window)
}

/// `k * MAD(window)` with missing values propagated
pub fn scaled_mad<T: Numeric>(window: &[T], k: T) -> T {
    StandardizedMad::with_factor(k).estimate(window)
}

/// `k * MAD(window)` with missing values ignored
pub fn nan_scaled_mad<T: Numeric>(window: &[T], k: T) -> T {
    StandardizedMad::with_factor(k)
        .with_missing_policy(MissingPolicy::Ignore)
        .estimate(window)
}

/// Median Absolute Deviation (MAD) estimator
#[derive(Debug, Clone, Copy, Default)]
pub struct Mad {
    policy: MissingPolicy,
}

impl Mad {
    /// Create a MAD estimator that propagates missing values
    pub fn new() -> Self {
        Self {
            policy: MissingPolicy::Propagate,
        }
    }

    /// Create a MAD estimator that skips missing values
    pub fn ignoring_missing() -> Self {
        Self {
            policy: MissingPolicy::Ignore,
        }
    }
}

impl SpreadEstimatorProperties for Mad {
    fn name(&self) -> &str {
        "MAD"
    }

    fn is_robust(&self) -> bool {
        true
    }

    fn breakdown_point(&self) -> f64 {
        0.5
    }

    fn gaussian_efficiency(&self) -> f64 {
        MAD_GAUSSIAN_EFFICIENCY
    }
}

impl<T: Numeric> SpreadEstimator<T> for Mad {
    fn missing_policy(&self) -> MissingPolicy {
        self.policy
    }

    fn estimate_about(&self, window: &[T], center: T) -> T {
        mad_about(window, center, self.policy)
    }
}

/// Standardized MAD estimator (scaled by consistency factor)
///
/// The consistency factor (1.4826 by default) makes it comparable to
/// standard deviation for normally distributed data.
#[derive(Debug, Clone, Copy)]
pub struct StandardizedMad<T: Numeric = f64> {
    factor: T,
    policy: MissingPolicy,
}

impl<T: Numeric> Default for StandardizedMad<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Numeric> StandardizedMad<T> {
    /// Create with default consistency factor
    pub fn new() -> Self {
        Self::with_factor(T::from_f64(GAUSSIAN_SCALE_FACTOR))
    }

    /// Create with custom consistency factor
    pub fn with_factor(factor: T) -> Self {
        Self {
            factor,
            policy: MissingPolicy::Propagate,
        }
    }

    /// Choose how missing values inside a window are handled
    pub fn with_missing_policy(mut self, policy: MissingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The consistency factor applied to the raw MAD
    pub fn factor(&self) -> T {
        self.factor
    }
}

impl<T: Numeric> SpreadEstimatorProperties for StandardizedMad<T> {
    fn name(&self) -> &str {
        "Standardized MAD"
    }

    fn is_robust(&self) -> bool {
        true
    }

    fn breakdown_point(&self) -> f64 {
        0.5
    }

    fn gaussian_efficiency(&self) -> f64 {
        MAD_GAUSSIAN_EFFICIENCY
    }
}

impl<T: Numeric> SpreadEstimator<T> for StandardizedMad<T> {
    fn missing_policy(&self) -> MissingPolicy {
        self.policy
    }

    fn estimate_about(&self, window: &[T], center: T) -> T {
        self.factor * mad_about(window, center, self.policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::median::median;
    use approx::assert_relative_eq;

    #[test]
    fn test_mad_basic() {
        // median = 3, deviations = [2, 1, 0, 1, 2]
        assert_relative_eq!(mad(&[1.0, 2.0, 3.0, 4.0, 5.0]), 1.0);
    }

    #[test]
    fn test_mad_with_outlier() {
        // median = 3.5, deviations = [2.5, 1.5, 0.5, 0.5, 1.5, 96.5]
        let result = mad(&[1.0, 2.0, 3.0, 4.0, 5.0, 100.0]);
        assert_relative_eq!(result, 1.5);
    }

    #[test]
    fn test_standardized_mad() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(scaled_mad(&data, GAUSSIAN_SCALE_FACTOR), 1.4826);
        assert_relative_eq!(StandardizedMad::new().estimate(&data), 1.4826);
        assert_relative_eq!(scaled_mad(&data, 2.0), 2.0);
    }

    #[test]
    fn test_constant_window_has_zero_mad() {
        assert_eq!(mad(&[5.0; 10]), 0.0);
        assert_eq!(nan_scaled_mad(&[5.0, f64::NAN, 5.0], 1.4826), 0.0);
    }

    #[test]
    fn test_missing_values() {
        let data = [1.0, f64::NAN, 3.0, 5.0];
        assert!(mad(&data).is_nan());
        assert!(scaled_mad(&data, 1.4826).is_nan());
        // defined values [1, 3, 5]: median 3, deviations [2, 0, 2]
        assert_relative_eq!(nanmad(&data), 2.0);
        assert!(nanmad(&[f64::NAN; 4]).is_nan());
        assert!(mad::<f64>(&[]).is_nan());
    }

    #[test]
    fn test_estimate_about_matches_estimate() {
        let data = [2.0, 9.0, 4.0, 4.0, 7.0, 1.0];
        let estimator = StandardizedMad::with_factor(1.4826);
        let center = median(&data);
        assert_relative_eq!(
            estimator.estimate_about(&data, center),
            estimator.estimate(&data)
        );
    }

    #[test]
    fn test_gaussian_consistency_factor() {
        assert_relative_eq!(gaussian_consistency_factor(), 1.482602218505602, epsilon = 1e-9);
        assert_relative_eq!(
            gaussian_consistency_factor(),
            GAUSSIAN_SCALE_FACTOR,
            epsilon = 1e-4
        );
    }

    #[test]
    fn test_properties() {
        let smad = StandardizedMad::<f64>::new();
        assert_eq!(smad.name(), "Standardized MAD");
        assert!(smad.is_robust());
        assert_eq!(smad.breakdown_point(), 0.5);
        assert_relative_eq!(smad.factor(), GAUSSIAN_SCALE_FACTOR);
        assert_eq!(Mad::new().name(), "MAD");
    }
}
