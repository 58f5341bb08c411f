//! Shared series generators for integration tests

#![allow(dead_code, unused_imports)]

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

pub use approx::assert_relative_eq;

/// `len` ones with a single value of 100 at `at`
pub fn single_spike(len: usize, at: usize) -> Vec<f64> {
    let mut series = vec![1.0; len];
    series[at] = 100.0;
    series
}

/// `0, 1, 2, ...` with `height` added at each spike position
pub fn ramp_with_spikes(len: usize, spikes: &[usize], height: f64) -> Vec<f64> {
    let mut series: Vec<f64> = (0..len).map(|i| i as f64).collect();
    for &i in spikes {
        series[i] += height;
    }
    series
}

/// Seeded standard normal noise with `height` added at each spike position
pub fn noisy_with_spikes(len: usize, spikes: &[usize], height: f64, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 1.0).unwrap();
    let mut series: Vec<f64> = (0..len).map(|_| noise.sample(&mut rng)).collect();
    for &i in spikes {
        series[i] += height;
    }
    series
}

/// Positions where `cleaned` differs from `series`, NaN compared as equal
pub fn changed_positions(series: &[f64], cleaned: &[f64]) -> Vec<usize> {
    series
        .iter()
        .zip(cleaned)
        .enumerate()
        .filter(|(_, (a, b))| !(a == b || (a.is_nan() && b.is_nan())))
        .map(|(i, _)| i)
        .collect()
}
