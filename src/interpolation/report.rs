//! Defines the struct returned by batch interpolation.
//!
//! [`InterpolationReport`] summarizes one [`crate::interpolation::newton::interpolate`]
//! run: input sizes, the Newton coefficients and knots, the canonical
//! string form and the evaluated values.

/// Summary of an interpolation run.
///
/// [`InterpolationReport`]
/// - `algorithm_name` : name of the interpolation method (`"newton"`)
/// - `n_provided`     : number of input data points `(x, y)`
/// - `n_evaluated`    : number of points at which the polynomial was evaluated
/// - `evaluated`      : polynomial values at each evaluation point
/// - `coefficients`   : divided differences `f[x0], f[x0,x1], ...`
/// - `knots`          : knots in ascending order
/// - `description`    : `"p(x) = ..."` Newton-basis form
#[derive(Debug, Clone)]
pub struct InterpolationReport {
    pub algorithm_name: &'static str,
    pub n_provided: usize,
    pub n_evaluated: usize,
    pub evaluated: Vec<f64>,
    pub coefficients: Vec<f64>,
    pub knots: Vec<f64>,
    pub description: String,
}

impl InterpolationReport {
    pub fn new(algorithm_name: &'static str, n_provided: usize, n_evaluated: usize) -> Self {
        Self {
            algorithm_name,
            n_provided,
            n_evaluated,
            evaluated: Vec::new(),
            coefficients: Vec::new(),
            knots: Vec::new(),
            description: String::new(),
        }
    }
}
