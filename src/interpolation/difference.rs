//! Memoized Divided Differences
//!
//! Implements Newton's
//! [divided differences](https://en.wikipedia.org/wiki/Divided_differences)
//! over arbitrary subsets of a known point set.
//!
//! ```text
//! f[x_i]            = y_i
//! f[x_i, ..., x_j]  = (f[x_{i+1}, ..., x_j] - f[x_i, ..., x_{j-1}]) / (x_j - x_i)
//! ```
//!
//! Every key is sorted before lookup, so permutations of the same knots share
//! one cache entry. Each computed entry is kept for the lifetime of the
//! table, which turns the exponential recursion into `O(n^2)` recurrence
//! evaluations for a full coefficient row. Keys hold their knots, so hashing
//! and storing them brings the row to `O(n^3)` time and memory.

use std::collections::HashMap;

use tracing::{debug, instrument, trace};

use crate::interpolation::config::sorted_points;
use crate::interpolation::errors::InterpolationError;

/// Sorted knot tuple, stored as bit patterns so it can be hashed.
/// `-0.0` and `0.0` map to the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct DifferenceKey(Vec<u64>);

impl DifferenceKey {
    fn from_sorted(xs: &[f64]) -> Self {
        Self(xs.iter().map(|&x| bits(x)).collect())
    }
}

#[inline]
fn bits(x: f64) -> u64 {
    // folds -0.0 onto 0.0
    (x + 0.0).to_bits()
}

/// Divided-difference table over a fixed set of known points.
///
/// # Construction
/// - [`DividedDifferenceTable::new`] or [`build_difference_table`].
///
/// # Ownership
/// The cache is owned by the table and [`DividedDifferenceTable::difference`]
/// takes `&mut self`; a table is only ever used by one caller at a time.
#[derive(Debug, Clone)]
pub struct DividedDifferenceTable {
    knots: Vec<f64>,
    cache: HashMap<DifferenceKey, f64>,
    computations: usize,
}

/// Builds a [`DividedDifferenceTable`] from `(x, y)` points in any order.
pub fn build_difference_table(
    points: &[(f64, f64)],
) -> Result<DividedDifferenceTable, InterpolationError> {
    DividedDifferenceTable::new(points)
}

impl DividedDifferenceTable {
    /// Validates `points`, sorts them by `x` and seeds the cache with
    /// `f[x_i] = y_i`.
    ///
    /// # Errors
    /// - [`InterpolationError::EmptyInput`] if `points` is empty.
    /// - [`InterpolationError::NonFiniteVec`] for NaN or infinite coordinates.
    /// - [`InterpolationError::DuplicateX`] if two x-values are equal.
    pub fn new(points: &[(f64, f64)]) -> Result<Self, InterpolationError> {
        Self::build(points, None)
    }

    /// As [`DividedDifferenceTable::new`], but knots closer than `x_tol` are
    /// also duplicates.
    ///
    /// # Errors
    /// - [`InterpolationError::InvalidXTol`] unless `x_tol` is finite and > 0.
    pub fn with_x_tol(points: &[(f64, f64)], x_tol: f64) -> Result<Self, InterpolationError> {
        if !x_tol.is_finite() || x_tol <= 0.0 {
            return Err(InterpolationError::InvalidXTol { got: x_tol });
        }
        Self::build(points, Some(x_tol))
    }

    #[instrument(skip_all, fields(n_points = points.len()))]
    pub(crate) fn build(
        points: &[(f64, f64)],
        x_min_spacing: Option<f64>,
    ) -> Result<Self, InterpolationError> {
        let sorted = sorted_points(points, x_min_spacing)?;

        let knots: Vec<f64> = sorted.iter().map(|&(x, _)| x).collect();
        let cache: HashMap<DifferenceKey, f64> = sorted
            .iter()
            .map(|&(x, y)| (DifferenceKey::from_sorted(&[x]), y))
            .collect();

        debug!(n_knots = knots.len(), "seeded divided-difference table");

        Ok(Self { knots, cache, computations: 0 })
    }

    /// Divided difference `f[xs]`, with `xs` given in any order.
    ///
    /// # Errors
    /// - [`InterpolationError::EmptyInput`] if `xs` is empty.
    /// - [`InterpolationError::UnknownKnot`] if any entry of `xs` is not one
    ///   of the table's knots.
    /// - [`InterpolationError::DuplicateX`] if `xs` repeats a knot.
    pub fn difference(&mut self, xs: &[f64]) -> Result<f64, InterpolationError> {
        if xs.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }

        let mut key = xs.to_vec();
        key.sort_by(f64::total_cmp);
        for &x in &key {
            if !self.is_knot(x) {
                return Err(InterpolationError::UnknownKnot { x });
            }
        }
        // a repeated knot would divide by zero
        if let Some(w) = key.windows(2).find(|w| bits(w[0]) == bits(w[1])) {
            return Err(InterpolationError::DuplicateX { x1: w[0], x2: w[1] });
        }

        Ok(self.resolve(&key))
    }

    /// Get-or-compute on a sorted key whose entries are all known knots.
    fn resolve(&mut self, key: &[f64]) -> f64 {
        let cache_key = DifferenceKey::from_sorted(key);
        if let Some(&value) = self.cache.get(&cache_key) {
            return value;
        }

        // length-1 keys are seeded, so key.len() >= 2 here
        let last = key.len() - 1;
        let upper = self.resolve(&key[1..]);
        let lower = self.resolve(&key[..last]);
        let value = (upper - lower) / (key[last] - key[0]);

        self.computations += 1;
        trace!(order = last, value, "computed divided difference");

        self.cache.insert(cache_key, value);
        value
    }

    #[inline]
    fn is_knot(&self, x: f64) -> bool {
        self.cache.contains_key(&DifferenceKey::from_sorted(&[x]))
    }

    /// Known x-values in ascending order.
    pub fn knots(&self) -> &[f64] { &self.knots }

    /// Number of known points.
    pub fn len(&self) -> usize { self.knots.len() }

    pub fn is_empty(&self) -> bool { self.knots.is_empty() }

    /// Number of entries in the cache, seeded ones included.
    pub fn cached_entries(&self) -> usize { self.cache.len() }

    /// Number of recurrence evaluations performed so far (cache misses).
    pub fn computations(&self) -> usize { self.computations }
}
