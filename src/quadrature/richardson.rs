//! Richardson extrapolation over composite rules

use crate::quadrature::composite::CompositeRule;

/// Combine rule evaluations at spacings `h` and `h / 2` to cancel the
/// leading error term.
///
/// Accepts any [`CompositeRule`], so the same extrapolation applies to the
/// trapezoid rule, the Simpson rule, or any other rule with the
/// `(a, b, h, f)` contract.
pub fn richardson<R: CompositeRule, F: Fn(f64) -> f64>(
    rule: &R,
    a: f64,
    b: f64,
    h: f64,
    f: &F,
) -> f64 {
    let coarse = rule.estimate(a, b, h, f);
    let fine = rule.estimate(a, b, h / 2.0, f);
    (4.0 * fine - coarse) / 3.0
}
