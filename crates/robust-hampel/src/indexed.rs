//! Outlier filtering for series that carry their own index
//!
//! An [`IndexedSeries`] pairs values with a non-decreasing index such as
//! timestamps. The filters run on the values alone and the results are
//! mapped back onto the original index.

use crate::fast::FastHampel;
use crate::params::HampelParameters;
use crate::reference::ReferenceHampel;
use crate::validation::{validate_arguments, validate_scale_factor};
use num_traits::PrimInt;
use robust_core::{Error, Numeric, Result};
use std::fmt::Display;

/// Values paired with a non-decreasing index
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedSeries<I, T> {
    index: Vec<I>,
    values: Vec<T>,
}

impl<I: Clone + PartialOrd, T: Numeric> IndexedSeries<I, T> {
    /// Pair `index` with `values`.
    ///
    /// Fails when the lengths differ or the index ever decreases.
    pub fn new(index: Vec<I>, values: Vec<T>) -> Result<Self> {
        if index.len() != values.len() {
            return Err(Error::size_mismatch(
                index.len(),
                values.len(),
                "indexed series (index vs values)",
            ));
        }
        if let Some(position) = index.windows(2).position(|pair| pair[1] < pair[0]) {
            return Err(Error::InvalidInput(format!(
                "index must be non-decreasing, decreases at position {}",
                position + 1
            )));
        }
        Ok(Self { index, values })
    }

    pub fn index(&self) -> &[I] {
        &self.index
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Entry at position `i`
    pub fn get(&self, i: usize) -> Option<(&I, T)> {
        Some((self.index.get(i)?, *self.values.get(i)?))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&I, T)> + '_ {
        self.index.iter().zip(self.values.iter().copied())
    }

    /// Entries at the given ascending positions
    pub fn select(&self, positions: &[usize]) -> Self {
        let (index, values) = positions
            .iter()
            .filter_map(|&i| self.get(i).map(|(idx, v)| (idx.clone(), v)))
            .unzip();
        Self { index, values }
    }

    /// Same index with new values of the same length
    pub(crate) fn with_values(&self, values: Vec<T>) -> Self {
        debug_assert_eq!(values.len(), self.index.len());
        Self {
            index: self.index.clone(),
            values,
        }
    }

    pub fn into_parts(self) -> (Vec<I>, Vec<T>) {
        (self.index, self.values)
    }
}

impl<T: Numeric> IndexedSeries<usize, T> {
    /// Values indexed by their position
    pub fn from_values(values: Vec<T>) -> Self {
        Self {
            index: (0..values.len()).collect(),
            values,
        }
    }
}

/// Outliers and cleaned values, both on the original index
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedOutliers<I, T> {
    /// Original entries at the flagged positions
    pub outliers: IndexedSeries<I, T>,
    /// Full series with flagged values replaced
    pub cleaned: IndexedSeries<I, T>,
}

/// Convert a total window ("3 on either side" is 7) to a radius
pub fn window_to_radius(window_size: usize) -> usize {
    window_size / 2
}

/// Fast Hampel filter over an indexed series.
///
/// `window_size` is the total window; the filter runs with radius
/// `window_size / 2` and the default scale factor.
pub fn fast_detect_indexed<I, T>(
    series: &IndexedSeries<I, T>,
    window_size: usize,
    threshold: f64,
) -> IndexedOutliers<I, T>
where
    I: Clone + PartialOrd,
    T: Numeric,
{
    let params = HampelParameters::new(window_to_radius(window_size), threshold);
    let (_, outlier_indices, cleaned) = FastHampel::new(params).filter(series.values()).into_parts();

    IndexedOutliers {
        outliers: series.select(&outlier_indices),
        cleaned: series.with_values(cleaned),
    }
}

/// Reference Hampel filter over an indexed series.
///
/// `window_size` is the half width, as for [`ReferenceHampel`].
pub fn filter_indexed<I, T, W>(
    series: &IndexedSeries<I, T>,
    window_size: W,
    threshold: f64,
    k: f64,
) -> Result<IndexedOutliers<I, T>>
where
    I: Clone + PartialOrd,
    T: Numeric,
    W: PrimInt + Display,
{
    let window_size = validate_arguments(window_size, threshold)?;
    validate_scale_factor(k)?;

    let params = HampelParameters::new(window_size, threshold).with_scale_factor(k);
    let (_, outlier_indices, cleaned) = ReferenceHampel::new(params)?
        .filter(series.values())
        .into_parts();

    Ok(IndexedOutliers {
        outliers: series.select(&outlier_indices),
        cleaned: series.with_values(cleaned),
    })
}
