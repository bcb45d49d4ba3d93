//! Newton-basis string rendering.
//!
//! ```text
//! p(x) = c0 + c1(x - x0) + c2(x - x0)(x - x1) + ...
//! ```
//!
//! Numbers use the `Display` form of `f64`: integral values print without a
//! fractional part (`2.0` → `"2"`), others as the shortest round-tripping
//! decimal (`0.5` → `"0.5"`). Negative zero prints as `"0"`.

/// Renders `coeffs` over the Newton basis built from `knots`.
///
/// - term `i` (for `i >= 1`) uses the factors of `knots[0..i]`
/// - zero coefficients emit no term, but their factor still joins the basis
/// - coefficients of magnitude one are elided
///
/// Knots past `coeffs.len() - 1` are unused. An empty `coeffs` renders as
/// `"p(x) = 0"`.
pub fn format_polynomial(coeffs: &[f64], knots: &[f64]) -> String {
    let Some((&c0, rest)) = coeffs.split_first() else {
        return "p(x) = 0".to_string();
    };

    let mut basis = String::new();
    let mut poly = real(c0);

    for (&ci, &xi) in rest.iter().zip(knots) {
        // basis (x - x0)(x - x1)...(x - xi)
        basis.push_str(&factor(xi));

        if ci == 0.0 {
            continue;
        }
        poly.push_str(if ci >= 0.0 { " + " } else { " - " });
        if ci.abs() != 1.0 {
            poly.push_str(&real(ci.abs()));
        }
        poly.push_str(&basis);
    }

    format!("p(x) = {poly}")
}

#[inline]
fn factor(xi: f64) -> String {
    if xi < 0.0 {
        format!("(x + {})", real(-xi))
    } else if xi == 0.0 {
        "x".to_string()
    } else {
        format!("(x - {})", real(xi))
    }
}

#[inline]
fn real(v: f64) -> String {
    format!("{}", v + 0.0)
}
