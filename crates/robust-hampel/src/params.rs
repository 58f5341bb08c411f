//! Hampel filter parameters

use crate::validation;
use robust_core::Result;
use robust_spread::GAUSSIAN_SCALE_FACTOR;
use serde::{Deserialize, Serialize};

/// Default half window for the reference filter
pub const DEFAULT_WINDOW_SIZE: usize = 5;

/// Default threshold (Pearson's rule: three standard deviations)
pub const DEFAULT_THRESHOLD: f64 = 3.0;

/// Default caller-facing total window for the indexed adapter
/// (the sample plus three neighbours on either side)
pub const DEFAULT_INDEXED_WINDOW: usize = 7;

/// Which thresholds are accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdRule {
    /// Any finite, non-negative real number
    #[default]
    NonNegative,
    /// Finite, non-negative and integral (legacy behaviour)
    NonNegativeInteger,
}

/// Parameters shared by both Hampel strategies
///
/// `window_size` is a half width: the reference filter looks at
/// `2 * window_size` samples centered on each position, the fast filter at
/// `[t - window_size, t + window_size)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HampelParameters {
    /// Half width of the window in samples
    pub window_size: usize,
    /// Multiple of the scaled MAD beyond which a sample is an outlier
    pub threshold: f64,
    /// Consistency factor applied to the MAD
    pub scale_factor: f64,
    /// Validation rule for `threshold`
    pub threshold_rule: ThresholdRule,
}

impl Default for HampelParameters {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            threshold: DEFAULT_THRESHOLD,
            scale_factor: GAUSSIAN_SCALE_FACTOR,
            threshold_rule: ThresholdRule::NonNegative,
        }
    }
}

impl HampelParameters {
    /// Create parameters with the default scale factor
    pub fn new(window_size: usize, threshold: f64) -> Self {
        Self {
            window_size,
            threshold,
            ..Self::default()
        }
    }

    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    pub fn with_threshold_rule(mut self, threshold_rule: ThresholdRule) -> Self {
        self.threshold_rule = threshold_rule;
        self
    }

    /// Number of samples in a full window
    pub fn full_window(&self) -> usize {
        self.window_size.saturating_mul(2)
    }

    /// Check every parameter, reporting the first one that is invalid
    pub fn validate(&self) -> Result<()> {
        validation::validate_window_size(self.window_size)?;
        validation::validate_threshold(self.threshold, self.threshold_rule)?;
        validation::validate_scale_factor(self.scale_factor)
    }
}
