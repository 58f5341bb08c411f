//! Integration tests for the fast Hampel filter

mod common;

use common::*;
use robust_hampel::api::fast_detect;
use robust_hampel::{FastHampel, HampelParameters, OutlierDetector, GAUSSIAN_SCALE_FACTOR};

#[test]
fn test_single_spike() {
    let series = single_spike(21, 10);
    let result = fast_detect(&series, 5, 3.0, GAUSSIAN_SCALE_FACTOR);

    assert_eq!(result.outlier_indices(), &[10]);
    assert_relative_eq!(result.cleaned()[10], 1.0);
    assert_eq!(changed_positions(&series, result.cleaned()), vec![10]);
}

#[test]
fn test_constant_series_has_no_outliers() {
    let series = vec![7.0; 40];
    let result = fast_detect(&series, 4, 3.0, GAUSSIAN_SCALE_FACTOR);
    assert!(!result.has_outliers());
    assert_eq!(result.cleaned(), series.as_slice());
}

#[test]
fn test_spikes_inside_boundary_band_survive() {
    // spikes in the first and last w positions are never evaluated
    let mut series = vec![0.0; 20];
    for i in [0, 2, 17, 19] {
        series[i] = 500.0;
    }
    series[10] = 500.0;

    let result = fast_detect(&series, 3, 3.0, GAUSSIAN_SCALE_FACTOR);
    assert_eq!(result.outlier_indices(), &[10]);
    assert_eq!(result.cleaned()[0], 500.0);
    assert_eq!(result.cleaned()[19], 500.0);
}

#[test]
fn test_missing_samples_are_skipped() {
    let mut series = single_spike(21, 10);
    series[8] = f64::NAN;

    let result = fast_detect(&series, 5, 3.0, GAUSSIAN_SCALE_FACTOR);
    assert_eq!(result.outlier_indices(), &[10]);
    assert!(!result.is_outlier()[8]);
    assert!(result.cleaned()[8].is_nan());
    assert_relative_eq!(result.cleaned()[10], 1.0);
}

#[test]
fn test_all_missing_never_flags() {
    let series = vec![f64::NAN; 15];
    let result = fast_detect(&series, 3, 3.0, GAUSSIAN_SCALE_FACTOR);
    assert!(!result.has_outliers());
    assert!(result.cleaned().iter().all(|v| v.is_nan()));
}

#[test]
fn test_short_buffers() {
    for len in 0..=6 {
        let series: Vec<f64> = (0..len).map(|i| (i * i) as f64).collect();
        let result = fast_detect(&series, 3, 3.0, GAUSSIAN_SCALE_FACTOR);
        assert_eq!(result.len(), len);
        assert!(!result.has_outliers());
    }
}

#[test]
fn test_second_pass_over_cleaned_ramp_flags_nothing() {
    let series = ramp_with_spikes(40, &[10, 20, 30], 100.0);
    let first = fast_detect(&series, 5, 3.0, GAUSSIAN_SCALE_FACTOR);
    assert_eq!(first.outlier_indices(), &[10, 20, 30]);

    let second = fast_detect(first.cleaned(), 5, 3.0, GAUSSIAN_SCALE_FACTOR);
    assert!(!second.has_outliers());
}

#[test]
fn test_noisy_series_agrees_with_reference_on_spikes() {
    let spikes = [40, 90, 160];
    let series = noisy_with_spikes(200, &spikes, 30.0, 1234);
    let params = HampelParameters::new(5, 3.0);

    let fast = FastHampel::new(params).detect_outliers(&series).unwrap();
    let reference = robust_hampel::ReferenceHampel::new(params)
        .unwrap()
        .detect_outliers(&series)
        .unwrap();

    for &i in &spikes {
        assert!(fast.is_outlier()[i]);
        assert!(reference.is_outlier()[i]);
    }
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_engine_matches_sequential() {
    let series = noisy_with_spikes(400, &[25, 300], 15.0, 99);
    let params = HampelParameters::new(4, 2.5);

    let sequential = FastHampel::new(params).filter(&series);
    let parallel = FastHampel::with_engine(params, robust_core::parallel()).filter(&series);
    assert_eq!(sequential, parallel);
}
