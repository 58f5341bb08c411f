//! Property-based tests for the median and MAD primitives

use proptest::prelude::*;
use robust_spread::{mad, median, nanmad, nanmedian, scaled_mad, GAUSSIAN_SCALE_FACTOR};

fn finite_window() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6..1.0e6f64, 1..64)
}

proptest! {
    #[test]
    fn prop_median_lies_within_range(window in finite_window()) {
        let m = median(&window);
        let min = window.iter().copied().fold(f64::INFINITY, f64::min);
        let max = window.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(m >= min && m <= max, "median {} outside [{}, {}]", m, min, max);
    }

    #[test]
    fn prop_median_is_order_independent(window in finite_window()) {
        let mut reversed = window.clone();
        reversed.reverse();
        prop_assert_eq!(median(&window), median(&reversed));
    }

    #[test]
    fn prop_nan_variants_agree_on_complete_windows(window in finite_window()) {
        prop_assert_eq!(median(&window), nanmedian(&window));
        prop_assert_eq!(mad(&window), nanmad(&window));
    }

    #[test]
    fn prop_nanmedian_skips_inserted_gaps(window in finite_window(), gap in 0usize..64) {
        let mut gapped = window.clone();
        gapped.insert(gap.min(window.len()), f64::NAN);
        prop_assert_eq!(nanmedian(&gapped), median(&window));
        prop_assert!(median(&gapped).is_nan());
    }

    #[test]
    fn prop_scaled_mad_is_non_negative_and_shift_invariant(
        window in finite_window(),
        shift in -1.0e3..1.0e3f64,
    ) {
        let sigma = scaled_mad(&window, GAUSSIAN_SCALE_FACTOR);
        prop_assert!(sigma >= 0.0);

        let shifted: Vec<f64> = window.iter().map(|x| x + shift).collect();
        let shifted_sigma = scaled_mad(&shifted, GAUSSIAN_SCALE_FACTOR);
        prop_assert!((sigma - shifted_sigma).abs() <= 1e-6 * (1.0 + sigma.abs()));
    }
}
