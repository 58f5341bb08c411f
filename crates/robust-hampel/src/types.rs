//! Types produced by outlier detection

use robust_core::Numeric;
use std::fmt;

/// How positions whose window does not fit inside the series are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryPolicy {
    /// Edge positions borrow the nearest computed statistic (backward fill,
    /// then forward fill) and are evaluated like any other position
    Fill,
    /// Edge positions are never evaluated and never flagged
    Skip,
}

/// Decision rule comparing a deviation with `threshold * scale`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// `deviation >= bound`
    Inclusive,
    /// `deviation > bound`
    Strict,
}

impl Comparison {
    /// Whether `deviation` lies beyond `bound`.
    ///
    /// Comparisons involving NaN are false, so an undefined statistic never
    /// produces a flag.
    pub fn exceeds<T: Numeric>(self, deviation: T, bound: T) -> bool {
        match self {
            Comparison::Inclusive => deviation >= bound,
            Comparison::Strict => deviation > bound,
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparison::Inclusive => write!(f, ">="),
            Comparison::Strict => write!(f, ">"),
        }
    }
}

/// Positions where `mask` is set, in ascending order
pub(crate) fn mask_to_indices(mask: &[bool]) -> Vec<usize> {
    mask.iter()
        .enumerate()
        .filter_map(|(i, &flagged)| flagged.then_some(i))
        .collect()
}

/// Rolling statistics and outlier decisions, before any replacement
#[derive(Debug, Clone, PartialEq)]
pub struct Detection<T: Numeric = f64> {
    is_outlier: Vec<bool>,
    outlier_indices: Vec<usize>,
    rolling_median: Vec<T>,
    rolling_scale: Vec<T>,
}

impl<T: Numeric> Detection<T> {
    pub(crate) fn new(is_outlier: Vec<bool>, rolling_median: Vec<T>, rolling_scale: Vec<T>) -> Self {
        let outlier_indices = mask_to_indices(&is_outlier);
        Self {
            is_outlier,
            outlier_indices,
            rolling_median,
            rolling_scale,
        }
    }

    /// Outlier mask aligned with the input series
    pub fn is_outlier(&self) -> &[bool] {
        &self.is_outlier
    }

    /// Ascending positions of the flagged samples
    pub fn outlier_indices(&self) -> &[usize] {
        &self.outlier_indices
    }

    /// Rolling median, one value per input position
    pub fn rolling_median(&self) -> &[T] {
        &self.rolling_median
    }

    /// Rolling scaled MAD, one value per input position
    pub fn rolling_scale(&self) -> &[T] {
        &self.rolling_scale
    }

    pub fn outlier_count(&self) -> usize {
        self.outlier_indices.len()
    }

    pub fn has_outliers(&self) -> bool {
        !self.outlier_indices.is_empty()
    }

    /// Copy of `series` with every flagged sample replaced by its rolling median
    pub fn clean(&self, series: &[T]) -> Vec<T> {
        let mut cleaned = series.to_vec();
        for &i in &self.outlier_indices {
            cleaned[i] = self.rolling_median[i];
        }
        cleaned
    }

    /// Apply the replacement step, producing a filter result
    pub fn into_filtered(self, series: &[T], algorithm: &'static str) -> OutlierResult<T> {
        let cleaned = self.clean(series);
        OutlierResult {
            is_outlier: self.is_outlier,
            outlier_indices: self.outlier_indices,
            cleaned,
            algorithm,
        }
    }

    /// `(is_outlier, outlier_indices, rolling_median)`
    pub fn into_parts(self) -> (Vec<bool>, Vec<usize>, Vec<T>) {
        (self.is_outlier, self.outlier_indices, self.rolling_median)
    }
}

/// Result of filtering a series: outlier mask, positions and cleaned copy
#[derive(Debug, Clone, PartialEq)]
pub struct OutlierResult<T: Numeric = f64> {
    is_outlier: Vec<bool>,
    outlier_indices: Vec<usize>,
    cleaned: Vec<T>,
    algorithm: &'static str,
}

impl<T: Numeric> OutlierResult<T> {
    pub(crate) fn new(is_outlier: Vec<bool>, cleaned: Vec<T>, algorithm: &'static str) -> Self {
        let outlier_indices = mask_to_indices(&is_outlier);
        Self {
            is_outlier,
            outlier_indices,
            cleaned,
            algorithm,
        }
    }

    /// Outlier mask aligned with the input series
    pub fn is_outlier(&self) -> &[bool] {
        &self.is_outlier
    }

    /// Ascending positions of the flagged samples
    pub fn outlier_indices(&self) -> &[usize] {
        &self.outlier_indices
    }

    /// Input series with flagged samples replaced by their window median
    pub fn cleaned(&self) -> &[T] {
        &self.cleaned
    }

    /// Name of the algorithm that produced this result
    pub fn algorithm(&self) -> &'static str {
        self.algorithm
    }

    pub fn len(&self) -> usize {
        self.is_outlier.len()
    }

    pub fn is_empty(&self) -> bool {
        self.is_outlier.is_empty()
    }

    pub fn outlier_count(&self) -> usize {
        self.outlier_indices.len()
    }

    pub fn has_outliers(&self) -> bool {
        !self.outlier_indices.is_empty()
    }

    /// Take ownership of the cleaned series
    pub fn into_cleaned(self) -> Vec<T> {
        self.cleaned
    }

    /// `(is_outlier, outlier_indices, cleaned)`
    pub fn into_parts(self) -> (Vec<bool>, Vec<usize>, Vec<T>) {
        (self.is_outlier, self.outlier_indices, self.cleaned)
    }
}

impl<T: Numeric> fmt::Display for OutlierResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Outlier Detection Result:")?;
        writeln!(f, "  Algorithm: {}", self.algorithm)?;
        writeln!(f, "  Sample size: {}", self.len())?;
        writeln!(f, "  Outliers detected: {}", self.outlier_count())?;

        if self.has_outliers() {
            writeln!(f, "  Outlier positions: {:?}", self.outlier_indices)?;
        }

        Ok(())
    }
}
