//! Newton (Divided-Difference) Interpolation
//!
//! Implements global polynomial interpolation in the
//! [Newton basis](https://en.wikipedia.org/wiki/Newton_polynomial).
//!
//! Coefficients are the top row of a memoized
//! [`DividedDifferenceTable`]; evaluation runs the nested product
//!
//! ```text
//! P(xq) = c[0] + c[1](xq - x[0]) + c[2](xq - x[0])(xq - x[1]) + ...
//! ```
//!
//! keeping a running basis product, so each evaluation is `O(n)`.

use std::fmt;

use tracing::{debug, instrument};

use crate::interpolation::config::{non_finite_idx, sorted_knots, CommonCfg};
use crate::interpolation::difference::DividedDifferenceTable;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::format::format_polynomial;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::traits::Interpolator;

pub const ALGORITHM_NAME: &str = "newton";

/// Interpolation polynomial in the Newton basis.
///
/// Immutable once built: construct once, evaluate many times.
#[derive(Debug, Clone, PartialEq)]
pub struct NewtonPolynomial {
    coeffs: Vec<f64>,
    knots: Vec<f64>,
}

/// Builds the interpolation polynomial through `points`.
pub fn build_evaluator(points: &[(f64, f64)]) -> Result<NewtonPolynomial, InterpolationError> {
    NewtonPolynomial::new(points)
}

/// Builds the interpolation polynomial through `points` together with its
/// `"p(x) = ..."` description.
pub fn build_evaluator_with_description(
    points: &[(f64, f64)],
) -> Result<(NewtonPolynomial, String), InterpolationError> {
    let poly = NewtonPolynomial::new(points)?;
    let description = poly.describe();
    Ok((poly, description))
}

impl NewtonPolynomial {
    /// # Errors
    /// Same as [`DividedDifferenceTable::new`].
    pub fn new(points: &[(f64, f64)]) -> Result<Self, InterpolationError> {
        let mut table = DividedDifferenceTable::new(points)?;
        Self::from_table(&mut table)
    }

    /// Reads `c[i] = f[x0, ..., xi]` for every prefix of the table's knots.
    /// Entries computed here stay cached in `table`.
    #[instrument(skip_all, fields(n_knots = table.len()))]
    pub fn from_table(table: &mut DividedDifferenceTable) -> Result<Self, InterpolationError> {
        let knots = table.knots().to_vec();
        let coeffs = (1..=knots.len())
            .map(|i| table.difference(&knots[..i]))
            .collect::<Result<Vec<f64>, _>>()?;

        debug!(
            degree = knots.len() - 1,
            computations = table.computations(),
            "built newton polynomial"
        );

        Ok(Self { coeffs, knots })
    }

    /// Divided differences `f[x0], f[x0,x1], ..., f[x0..xn]`.
    pub fn coefficients(&self) -> &[f64] { &self.coeffs }

    /// Knots in ascending order; the last one is never a basis root.
    pub fn knots(&self) -> &[f64] { &self.knots }

    /// Formal degree (`n` for `n + 1` points); leading coefficients may be zero.
    pub fn degree(&self) -> usize { self.coeffs.len() - 1 }

    /// Canonical `"p(x) = ..."` form.
    pub fn describe(&self) -> String {
        format_polynomial(&self.coeffs, &self.knots)
    }
}

impl Interpolator for NewtonPolynomial {
    fn eval(&self, x: f64) -> f64 {
        let mut total = self.coeffs[0];
        let mut basis = 1.0;
        for (&c, &xk) in self.coeffs[1..].iter().zip(&self.knots) {
            basis *= x - xk;
            total += c * basis;
        }
        total
    }
}

impl fmt::Display for NewtonPolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}


/// Newton interpolation configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
///
/// # Construction
/// - Use [`NewtonCfg::new`] then setters; each setter validates its input.
///
/// # Defaults
/// - Only equal knots are duplicates; [`NewtonCfg::set_x_tol`] adds a
///   minimum spacing.
/// - Unbounded: evaluation points outside the knot range are extrapolated.
#[derive(Debug, Clone, Default)]
pub struct NewtonCfg {
    common: CommonCfg,
}

impl NewtonCfg {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }

    /// Sets `x` and `y` from `(x, y)` pairs in any order.
    pub fn set_points(self, points: &[(f64, f64)]) -> Result<Self, InterpolationError> {
        let x: Vec<f64> = points.iter().map(|&(x, _)| x).collect();
        let y: Vec<f64> = points.iter().map(|&(_, y)| y).collect();
        self.set_x(&x)?.set_y(&y)
    }

    pub fn set_x(mut self, v: &[f64]) -> Result<Self, InterpolationError> {
        sorted_knots(v, self.common.x_min_spacing)?;

        // length agreement check
        // symmetric with set_y
        let y_len = self.common.y.len();
        if y_len != 0 && y_len != v.len() {
            return Err(InterpolationError::UnequalLength { x_len: v.len(), y_len });
        }

        self.common.x = v.to_vec();
        Ok(self)
    }

    pub fn set_y(mut self, v: &[f64]) -> Result<Self, InterpolationError> {
        if v.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if let Some(idx) = non_finite_idx(v) {
            return Err(InterpolationError::NonFiniteVec { idx });
        }

        let x_len = self.common.x.len();
        let y_len = v.len();
        if x_len != 0 && y_len != x_len {
            return Err(InterpolationError::UnequalLength { x_len, y_len });
        }

        self.common.y = v.to_vec();
        Ok(self)
    }

    pub fn set_x_eval(mut self, v: &[f64]) -> Result<Self, InterpolationError> {
        if let Some(idx) = non_finite_idx(v) {
            return Err(InterpolationError::NonFiniteVec { idx });
        }

        self.common.x_eval = v.to_vec();
        Ok(self)
    }

    pub fn set_x_tol(mut self, v: f64) -> Result<Self, InterpolationError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(InterpolationError::InvalidXTol { got: v });
        }

        self.common.x_min_spacing = Some(v);
        Ok(self)
    }

    /// Rejects evaluation points outside `[min knot, max knot]` when `true`.
    pub fn set_bounded(mut self, bounded: bool) -> Self {
        self.common.bounded = bounded;
        self
    }
}


/// Performs Newton divided-difference interpolation.
///
/// # Behavior
/// - Builds a [`DividedDifferenceTable`] from the configured points and
///   reads the coefficient row `c[i] = f[x0, ..., xi]`.
/// - Evaluates the polynomial at every point of `cfg.common.x_eval()`.
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"newton"`
/// - `n_provided`     : number of (x, y) data points
/// - `n_evaluated`    : number of evaluation points
/// - `evaluated`      : polynomial values at each evaluation point
/// - `coefficients`, `knots`, `description` of the polynomial
///
/// # Errors
/// - Any configuration error re-checked by [`CommonCfg::validate`].
/// - [`InterpolationError::OutOfBounds`] if the configuration is bounded and
///   an evaluation point lies outside the knot range.
pub fn interpolate(cfg: NewtonCfg) -> Result<InterpolationReport, InterpolationError> {
    let common = &cfg.common;
    common.validate()?;

    let mut table = DividedDifferenceTable::build(&common.points(), common.x_min_spacing)?;
    let poly = NewtonPolynomial::from_table(&mut table)?;

    let evals = common.x_eval();
    let n_provided = poly.knots.len();
    let n_evaluated = evals.len();

    let mut report = InterpolationReport::new(ALGORITHM_NAME, n_provided, n_evaluated);
    report.evaluated.reserve(n_evaluated);

    let x_min = poly.knots[0];
    let x_max = poly.knots[n_provided - 1];
    for &xq in evals {
        if common.bounded && (xq < x_min || xq > x_max) {
            return Err(InterpolationError::OutOfBounds { got: xq, x_min, x_max });
        }
        report.evaluated.push(poly.eval(xq));
    }

    report.description = poly.describe();
    report.coefficients = poly.coeffs;
    report.knots = poly.knots;

    Ok(report)
}
