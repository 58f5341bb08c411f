//! Spike cleaning with both Hampel strategies
//!
//! Run with `RUST_LOG=robust_hampel=debug` to see the per-call diagnostics.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use robust_hampel::prelude::*;
use robust_hampel::{fast_detect_indexed, DEFAULT_INDEXED_WINDOW};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "robust_hampel=info".into()),
        )
        .init();

    println!("=== Hampel Filter Examples ===\n");

    // Slow sine wave with measurement noise and a few glitches
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let noise = Normal::new(0.0, 0.05)?;
    let mut signal: Vec<f64> = (0..200)
        .map(|i| (i as f64 * 0.05).sin() + noise.sample(&mut rng))
        .collect();
    let glitches = [3, 37, 38, 120, 197];
    for &i in &glitches {
        signal[i] += 4.0;
    }

    // Example 1: reference strategy, edges filled from the nearest window
    println!("1. Reference strategy");
    let reference = ReferenceHampel::new(HampelParameters::default())?;
    let result = reference.filter(&signal);
    print!("{result}");
    println!("  Injected glitches at {glitches:?}\n");

    // Example 2: fast strategy, edges skipped
    println!("2. Fast strategy");
    let fast = FastHampel::new(HampelParameters::default());
    let result = fast.filter(&signal);
    print!("{result}");
    println!(
        "  Positions 0..{} and {}..{} are not evaluated\n",
        fast.parameters().window_size,
        signal.len() - fast.parameters().window_size,
        signal.len()
    );

    // Example 3: rolling statistics behind the decision
    println!("3. Rolling statistics around index 120");
    let detection = detect(&signal, 5, 3.0, 1.4826)?;
    for i in 118..=122 {
        println!(
            "  x[{i}] = {:>7.3}  median = {:>7.3}  scale = {:>6.3}  outlier = {}",
            signal[i],
            detection.rolling_median()[i],
            detection.rolling_scale()[i],
            detection.is_outlier()[i]
        );
    }

    // Example 4: timestamped series, window given as a total width
    println!("\n4. Indexed series");
    let timestamps: Vec<i64> = (0..signal.len() as i64).map(|i| 1_700_000_000 + i * 60).collect();
    let series = IndexedSeries::new(timestamps, signal)?;
    let indexed = fast_detect_indexed(&series, DEFAULT_INDEXED_WINDOW, 3.0);
    for (timestamp, value) in indexed.outliers.iter() {
        println!("  t = {timestamp}: {value:.3}");
    }

    Ok(())
}
