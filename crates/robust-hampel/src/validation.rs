//! Argument validation for the reference Hampel filter
//!
//! Validation runs before any computation; a failing argument is reported
//! by name together with the offending value.

use crate::params::ThresholdRule;
use num_traits::PrimInt;
use robust_core::{Error, Result};
use std::fmt::Display;

/// Check a window size given as any primitive integer.
///
/// Signed inputs are accepted so that zero and negative sizes are rejected
/// with a descriptive error instead of being unrepresentable. Returns the
/// window size as `usize`.
pub fn validate_window_size<W>(window_size: W) -> Result<usize>
where
    W: PrimInt + Display,
{
    if window_size <= W::zero() {
        return Err(Error::invalid_argument(
            "window_size",
            format!("window size must be a positive integer, got {window_size}"),
        ));
    }
    window_size.to_usize().ok_or_else(|| {
        Error::invalid_argument(
            "window_size",
            format!("window size {window_size} does not fit in usize"),
        )
    })
}

/// Check a threshold against the given rule
pub fn validate_threshold(threshold: f64, rule: ThresholdRule) -> Result<()> {
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(Error::invalid_argument(
            "threshold",
            format!("threshold must be a non-negative number, got {threshold}"),
        ));
    }
    if rule == ThresholdRule::NonNegativeInteger && threshold.fract() != 0.0 {
        return Err(Error::invalid_argument(
            "threshold",
            format!("threshold must be an integer, got {threshold}"),
        ));
    }
    Ok(())
}

/// Check the MAD consistency factor
pub fn validate_scale_factor(k: f64) -> Result<()> {
    if !k.is_finite() || k <= 0.0 {
        return Err(Error::invalid_argument(
            "k",
            format!("scale factor must be a positive finite number, got {k}"),
        ));
    }
    Ok(())
}

/// Validate the reference filter's window size and threshold.
///
/// Returns the window size as `usize` on success.
///
/// # Example
///
/// ```rust
/// use robust_hampel::validate_arguments;
///
/// assert_eq!(validate_arguments(5, 3.0).unwrap(), 5);
/// assert!(validate_arguments(0, 3.0).is_err());
/// assert!(validate_arguments(-1, 3.0).is_err());
/// assert!(validate_arguments(5, -0.5).is_err());
/// ```
pub fn validate_arguments<W>(window_size: W, threshold: f64) -> Result<usize>
where
    W: PrimInt + Display,
{
    let window_size = validate_window_size(window_size)?;
    validate_threshold(threshold, ThresholdRule::NonNegative)?;
    Ok(window_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_size_must_be_positive() {
        assert_eq!(validate_window_size(1u8).unwrap(), 1);
        assert_eq!(validate_window_size(12i64).unwrap(), 12);

        for err in [
            validate_window_size(0).unwrap_err(),
            validate_window_size(-1).unwrap_err(),
            validate_window_size(0usize).unwrap_err(),
        ] {
            assert_eq!(err.argument(), Some("window_size"));
            assert!(err.to_string().contains("window size must be a positive integer"));
        }
    }

    #[test]
    fn test_threshold_accepts_non_negative_reals() {
        assert!(validate_threshold(0.0, ThresholdRule::NonNegative).is_ok());
        assert!(validate_threshold(2.5, ThresholdRule::NonNegative).is_ok());
        assert!(validate_threshold(3.0, ThresholdRule::NonNegativeInteger).is_ok());

        assert!(validate_threshold(-0.1, ThresholdRule::NonNegative).is_err());
        assert!(validate_threshold(f64::NAN, ThresholdRule::NonNegative).is_err());
        assert!(validate_threshold(f64::INFINITY, ThresholdRule::NonNegative).is_err());

        let err = validate_threshold(2.5, ThresholdRule::NonNegativeInteger).unwrap_err();
        assert!(err.to_string().contains("threshold must be an integer"));
    }

    #[test]
    fn test_scale_factor() {
        assert!(validate_scale_factor(1.4826).is_ok());
        assert!(validate_scale_factor(0.0).is_err());
        assert!(validate_scale_factor(-1.4826).is_err());
        assert!(validate_scale_factor(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_arguments_checks_window_first() {
        let err = validate_arguments(0, -3.0).unwrap_err();
        assert_eq!(err.argument(), Some("window_size"));

        let err = validate_arguments(5, -3.0).unwrap_err();
        assert_eq!(err.argument(), Some("threshold"));
    }
}
