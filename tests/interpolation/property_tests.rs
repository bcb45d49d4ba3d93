use std::collections::BTreeSet;

use newton_poly::interpolation::difference::build_difference_table;
use newton_poly::interpolation::newton::build_evaluator;
use newton_poly::interpolation::Interpolator;
use proptest::prelude::*;

fn close(a: f64, b: f64, scale: f64) -> bool {
    (a - b).abs() <= 1e-6 * (1.0 + scale)
}

/// Distinct integer knots in [-6, 6] paired with bounded y-values.
fn point_set() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::btree_set(-6i32..=6, 1..7).prop_flat_map(|xs: BTreeSet<i32>| {
        let n = xs.len();
        prop::collection::vec(-100.0f64..100.0, n).prop_map(move |ys| {
            xs.iter().map(|&x| x as f64).zip(ys).collect::<Vec<_>>()
        })
    })
}

proptest! {

    #[test]
    fn interpolation_property(points in point_set()) {
        let p = build_evaluator(&points).unwrap();
        let scale = points.iter().fold(0.0f64, |m, &(_, y)| m.max(y.abs()));
        for &(x, y) in &points {
            prop_assert!(close(p.eval(x), y, scale), "p({}) = {} != {}", x, p.eval(x), y);
        }
    }

    #[test]
    fn permutation_symmetry(points in point_set(), seed in any::<u64>()) {
        let mut f = build_difference_table(&points).unwrap();
        let xs: Vec<f64> = points.iter().map(|&(x, _)| x).collect();
        let mut permuted = xs.clone();
        permuted.rotate_left((seed as usize) % xs.len());
        permuted.reverse();

        let a = f.difference(&xs).unwrap();
        let computed = f.computations();
        let b = f.difference(&permuted).unwrap();
        prop_assert_eq!(a.to_bits(), b.to_bits());
        prop_assert_eq!(f.computations(), computed);
    }

    #[test]
    fn cubic_reproduced_everywhere(
        c in prop::array::uniform4(-5.0f64..5.0),
        xq in -3.0f64..3.0,
    ) {
        let f = |x: f64| c[0] + c[1] * x + c[2] * x * x + c[3] * x * x * x;
        let points: Vec<(f64, f64)> = [-2.0, -0.5, 1.0, 2.5].iter().map(|&x| (x, f(x))).collect();
        let p = build_evaluator(&points).unwrap();
        prop_assert!(close(p.eval(xq), f(xq), 100.0));
    }
}
