//! Numeric trait for sample values
//!
//! Time-series samples are real-valued and may be missing, so the trait is
//! restricted to floating-point types where NaN represents a missing sample.

use num_traits::Float;
use std::fmt::Debug;

/// Base trait for sample types used in robust computations
pub trait Numeric: Float + Debug + Default + Send + Sync + 'static {
    /// Short type name, recorded on detection spans
    const TYPE_NAME: &'static str;

    /// Convert from f64 (for creating constants)
    fn from_f64(val: f64) -> Self;

    /// Whether this sample is missing
    fn is_missing(self) -> bool {
        self.is_nan()
    }

    /// The value used to represent a missing sample
    fn missing() -> Self {
        Self::nan()
    }
}

impl Numeric for f64 {
    const TYPE_NAME: &'static str = "f64";

    fn from_f64(val: f64) -> Self {
        val
    }
}

impl Numeric for f32 {
    const TYPE_NAME: &'static str = "f32";

    fn from_f64(val: f64) -> Self {
        val as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_trait() {
        assert_eq!(<f64 as Numeric>::from_f64(1.5), 1.5);
        assert_eq!(<f32 as Numeric>::from_f64(1.5), 1.5f32);
        assert_eq!(f64::TYPE_NAME, "f64");
        assert_eq!(f32::TYPE_NAME, "f32");

        assert!(f64::missing().is_missing());
        assert!(f32::missing().is_missing());
        assert!(!0.0f64.is_missing());
        // Infinity is a value, not a missing sample
        assert!(!f64::INFINITY.is_missing());
    }
}
