pub mod config;
pub mod errors;
pub mod report;
pub mod traits;
pub use traits::Interpolator;

pub mod difference;
pub mod format;
pub mod newton;

pub use difference::{build_difference_table, DividedDifferenceTable};
pub use format::format_polynomial;
pub use newton::{build_evaluator, build_evaluator_with_description, NewtonPolynomial};
