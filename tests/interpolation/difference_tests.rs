use newton_poly::interpolation::difference::{build_difference_table, DividedDifferenceTable};
use newton_poly::interpolation::errors::InterpolationError;

type NewtonResult = Result<(), InterpolationError>;

//    f       | div diff
// x0 = 1  0  |
//            |  2
// x1 = 2  2  |     1
//            |  5     0
// x2 = 4  12 |     1
//            |  8
// x3 = 5  20 |
const WORKED: [(f64, f64); 4] = [(1.0, 0.0), (2.0, 2.0), (4.0, 12.0), (5.0, 20.0)];

#[test]
fn worked_example() -> NewtonResult {
    let mut f = build_difference_table(&WORKED)?;
    assert_eq!(f.difference(&[4.0])?, 12.0);
    assert_eq!(f.difference(&[4.0, 5.0])?, 8.0);
    assert_eq!(f.difference(&[1.0, 2.0, 4.0, 5.0])?, 0.0);
    Ok(())
}

#[test]
fn full_table_entries() -> NewtonResult {
    let mut f = build_difference_table(&WORKED)?;
    assert_eq!(f.difference(&[1.0, 2.0])?, 2.0);
    assert_eq!(f.difference(&[2.0, 4.0])?, 5.0);
    assert_eq!(f.difference(&[1.0, 2.0, 4.0])?, 1.0);
    assert_eq!(f.difference(&[2.0, 4.0, 5.0])?, 1.0);
    Ok(())
}

#[test]
fn unordered_points_are_sorted() -> NewtonResult {
    let shuffled = [WORKED[2], WORKED[0], WORKED[3], WORKED[1]];
    let mut f = DividedDifferenceTable::new(&shuffled)?;
    assert_eq!(f.knots(), &[1.0, 2.0, 4.0, 5.0]);
    assert_eq!(f.difference(&[1.0, 2.0, 4.0])?, 1.0);
    Ok(())
}

#[test]
fn permutation_symmetry() -> NewtonResult {
    let mut f = build_difference_table(&WORKED)?;
    assert_eq!(f.difference(&[4.0, 5.0])?, f.difference(&[5.0, 4.0])?);
    let a = f.difference(&[5.0, 1.0, 4.0])?;
    let b = f.difference(&[1.0, 4.0, 5.0])?;
    assert_eq!(a, b);
    Ok(())
}

#[test]
fn cache_is_reused_for_permuted_keys() -> NewtonResult {
    let mut f = build_difference_table(&WORKED)?;
    assert_eq!(f.computations(), 0);
    assert_eq!(f.cached_entries(), 4);

    // f[1,2,4,5] needs 3 + 2 + 1 recurrence evaluations
    f.difference(&[1.0, 2.0, 4.0, 5.0])?;
    assert_eq!(f.computations(), 6);
    assert_eq!(f.cached_entries(), 10);

    f.difference(&[5.0, 4.0, 2.0, 1.0])?;
    f.difference(&[4.0, 2.0])?;
    f.difference(&[2.0])?;
    assert_eq!(f.computations(), 6);
    assert_eq!(f.cached_entries(), 10);
    Ok(())
}

#[test]
fn new_key_only_computes_missing_entries() -> NewtonResult {
    let mut f = build_difference_table(&WORKED)?;
    f.difference(&[1.0, 2.0, 4.0])?;
    assert_eq!(f.computations(), 3);

    // f[1,4] is not a sub-key of f[1,2,4]
    f.difference(&[1.0, 4.0])?;
    assert_eq!(f.computations(), 4);
    Ok(())
}

#[test]
fn non_adjacent_knots() -> NewtonResult {
    let mut f = build_difference_table(&WORKED)?;
    // (12 - 0) / (4 - 1)
    assert_eq!(f.difference(&[1.0, 4.0])?, 4.0);
    Ok(())
}

#[test]
fn unknown_knot_error() {
    let mut f = build_difference_table(&WORKED).unwrap();
    let err = f.difference(&[3.0]).unwrap_err();
    assert!(matches!(err, InterpolationError::UnknownKnot { x } if x == 3.0));

    let err = f.difference(&[1.0, 2.5]).unwrap_err();
    assert!(matches!(err, InterpolationError::UnknownKnot { x } if x == 2.5));
}

#[test]
fn empty_key_error() {
    let mut f = build_difference_table(&WORKED).unwrap();
    let err = f.difference(&[]).unwrap_err();
    assert!(matches!(err, InterpolationError::EmptyInput));
}

#[test]
fn repeated_knot_in_key_error() {
    let mut f = build_difference_table(&WORKED).unwrap();
    let err = f.difference(&[4.0, 4.0]).unwrap_err();
    assert!(matches!(err, InterpolationError::DuplicateX { .. }));
}

#[test]
fn negative_zero_knot() -> NewtonResult {
    let mut f = build_difference_table(&[(0.0, 3.0), (1.0, 5.0)])?;
    assert_eq!(f.difference(&[-0.0])?, 3.0);
    assert_eq!(f.difference(&[1.0, -0.0])?, 2.0);
    Ok(())
}

// Duplicate and empty point sets are rejected at construction instead of
// producing a division by zero or an evaluator with no coefficients.
#[test]
fn duplicate_points_rejected() {
    let err = build_difference_table(&[(1.0, 2.0), (3.0, 4.0), (1.0, 5.0)]).unwrap_err();
    assert!(matches!(err, InterpolationError::DuplicateX { x1, x2 } if x1 == 1.0 && x2 == 1.0));
}

#[test]
fn signed_zero_points_rejected() {
    let err = build_difference_table(&[(0.0, 1.0), (-0.0, 2.0)]).unwrap_err();
    assert!(matches!(err, InterpolationError::DuplicateX { x1, x2 } if x1 == 0.0 && x2 == 0.0));
}

#[test]
fn tiny_distinct_knots_accepted() -> NewtonResult {
    let mut f = build_difference_table(&[(1e-13, 1.0), (2e-13, 2.0), (3e-13, 3.0)])?;
    assert_eq!(f.knots(), &[1e-13, 2e-13, 3e-13]);
    assert_eq!(f.difference(&[2e-13])?, 2.0);
    assert!(f.difference(&[1e-13, 2e-13, 3e-13])?.is_finite());
    Ok(())
}

#[test]
fn custom_tolerance() -> NewtonResult {
    let points = [(0.0, 0.0), (0.05, 1.0)];
    let err = DividedDifferenceTable::with_x_tol(&points, 0.1).unwrap_err();
    assert!(matches!(err, InterpolationError::DuplicateX { .. }));

    let err = DividedDifferenceTable::with_x_tol(&points, 0.0).unwrap_err();
    assert!(matches!(err, InterpolationError::InvalidXTol { got } if got == 0.0));

    let f = DividedDifferenceTable::with_x_tol(&points, 0.01)?;
    assert_eq!(f.len(), 2);
    Ok(())
}

#[test]
fn empty_points_rejected() {
    let err = build_difference_table(&[]).unwrap_err();
    assert!(matches!(err, InterpolationError::EmptyInput));
}

#[test]
fn non_finite_points_rejected() {
    let err = build_difference_table(&[(0.0, 1.0), (1.0, f64::NAN)]).unwrap_err();
    assert!(matches!(err, InterpolationError::NonFiniteVec { idx: 1 }));

    let err = build_difference_table(&[(f64::INFINITY, 1.0)]).unwrap_err();
    assert!(matches!(err, InterpolationError::NonFiniteVec { idx: 0 }));
}
