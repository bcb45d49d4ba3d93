//! Shared configuration and knot validation.
//!
//! Provides [`CommonCfg`]. By default two knots are duplicates only when they
//! are equal (`-0.0` and `0.0` included); an explicit minimum spacing can be
//! set to also reject knots closer than that.
//!
//! [`CommonCfg`] — universal fields
//! - `x`      : x values provided (any order)
//! - `y`      : y values provided, paired with `x` by index
//! - `x_eval` : x values to evaluate
//! - `x_min_spacing` : optional duplicate-knot tolerance
//! - `bounded` : reject eval points outside the knot range
//!
//! [`CommonCfg::new`] initializes configuration with empty `Vec<f64>`s.

use std::cmp::Ordering;

use crate::interpolation::errors::InterpolationError;

#[derive(Debug, Clone)]
pub struct CommonCfg {
    pub(crate) x: Vec<f64>,
    pub(crate) y: Vec<f64>,
    pub(crate) x_eval: Vec<f64>,
    pub(crate) x_min_spacing: Option<f64>,
    pub(crate) bounded: bool,
}

impl Default for CommonCfg {
    fn default() -> Self {
        Self::new()
    }
}

impl CommonCfg {
    pub fn new() -> Self {
        Self {
            x: Vec::new(),
            y: Vec::new(),
            x_eval: Vec::new(),
            x_min_spacing: None,
            bounded: false,
        }
    }

    /// Re-checks the whole configuration, including checks that depend on
    /// setter order (lengths, spacing against the final tolerance).
    pub fn validate(&self) -> Result<(), InterpolationError> {
        if self.x.is_empty() || self.y.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if self.x.len() != self.y.len() {
            return Err(InterpolationError::UnequalLength {
                x_len: self.x.len(),
                y_len: self.y.len(),
            });
        }
        sorted_points(&self.points(), self.x_min_spacing).map(|_| ())
    }

    /// Pairs `x` and `y` by index.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.x.iter().copied().zip(self.y.iter().copied()).collect()
    }

    pub(crate) fn x_eval(&self) -> &[f64] { &self.x_eval }
}

pub(crate) fn non_finite_idx(xs: &[f64]) -> Option<usize> {
    xs.iter().position(|x| !x.is_finite())
}

#[inline]
fn ascending(a: &f64, b: &f64) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

/// Validates knots and returns them in ascending order.
///
/// Without `x_min_spacing` only equal knots are duplicates (`-0.0 == 0.0`);
/// with it, adjacent knots closer than the spacing are too.
///
/// # Errors
/// - [`InterpolationError::EmptyInput`] if `xs` is empty.
/// - [`InterpolationError::NonFiniteVec`] with the index of the first NaN or
///   infinite knot.
/// - [`InterpolationError::DuplicateX`] for the first duplicate pair.
pub(crate) fn sorted_knots(
    xs: &[f64],
    x_min_spacing: Option<f64>,
) -> Result<Vec<f64>, InterpolationError> {
    if xs.is_empty() {
        return Err(InterpolationError::EmptyInput);
    }
    if let Some(idx) = non_finite_idx(xs) {
        return Err(InterpolationError::NonFiniteVec { idx });
    }

    let mut sorted = xs.to_vec();
    sorted.sort_by(ascending);

    let duplicate = sorted.windows(2).find(|w| match x_min_spacing {
        Some(tol) => (w[1] - w[0]).abs() < tol,
        None => w[0] == w[1],
    });
    if let Some(w) = duplicate {
        return Err(InterpolationError::DuplicateX { x1: w[0], x2: w[1] });
    }

    Ok(sorted)
}

/// Validates a known point set and returns it in ascending-x order.
///
/// # Errors
/// - Any error of [`sorted_knots`] on the x-values.
/// - [`InterpolationError::NonFiniteVec`] with the index of the first point
///   whose `y` is NaN or infinite.
pub(crate) fn sorted_points(
    points: &[(f64, f64)],
    x_min_spacing: Option<f64>,
) -> Result<Vec<(f64, f64)>, InterpolationError> {
    let xs: Vec<f64> = points.iter().map(|&(x, _)| x).collect();
    sorted_knots(&xs, x_min_spacing)?;

    if let Some(idx) = points.iter().position(|&(_, y)| !y.is_finite()) {
        return Err(InterpolationError::NonFiniteVec { idx });
    }

    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| ascending(&a.0, &b.0));
    Ok(sorted)
}
