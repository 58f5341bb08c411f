//! Core types for robust time-series analysis
//!
//! This crate provides the pieces shared by every crate in the workspace:
//!
//! - [`Error`] / [`Result`]: the unified error type
//! - [`Numeric`]: the sample type abstraction (`f64`, `f32`), with NaN as the
//!   missing-value marker
//! - [`ExecutionEngine`]: sequential or rayon-backed execution of
//!   per-position work
//!
//! # Example
//!
//! ```rust
//! use robust_core::{sequential, ExecutionEngine};
//!
//! let engine = sequential();
//! let data = vec![1.0, 2.0, 3.0, 4.0];
//! let doubled = engine.execute_batch(data.len(), |i| data[i] * 2.0);
//! assert_eq!(doubled, vec![2.0, 4.0, 6.0, 8.0]);
//! ```

pub mod error;
pub mod execution;
pub mod numeric;

// Re-export core types
pub use error::{Error, Result};

pub use execution::{sequential, ExecutionEngine, ExecutionStrategy, SequentialEngine};
#[cfg(feature = "parallel")]
pub use execution::{parallel, ParallelEngine};

pub use numeric::Numeric;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::execution::{sequential, ExecutionStrategy, SequentialEngine};
    #[cfg(feature = "parallel")]
    pub use crate::execution::{parallel, ParallelEngine};
    pub use crate::{ExecutionEngine, Numeric, Result};
}
