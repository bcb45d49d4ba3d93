//! Newton-form interpolation polynomials built from memoized divided differences.

pub mod interpolation;
