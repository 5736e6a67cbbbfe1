//! Numerical approximations of integrals over a closed interval `[a, b]`.
//!
//! Every function splits the interval into `steps` slices of equal width and evaluates `f` at the
//! left edge of each slice. Larger step counts are more accurate, at a linear cost in time.
//! A step count of zero always produces `0.0`.

use std::f64::consts::PI;

/// A step count that gives accurate results for smooth functions over short intervals.
pub const DEFAULT_STEPS: u32 = 10_000_000;

/// Approximates the definite integral of `f` over `[a, b]` with a left Riemann sum.
///
/// # Examples
/// ```
/// # use basic_structures::algorithms::numeric::integral_approx;
/// let area = integral_approx(|x| x * x, 0.0, 3.0, 100_000);
/// assert!((area - 9.0).abs() < 1e-3);
/// ```
pub fn integral_approx<F: Fn(f64) -> f64>(f: F, a: f64, b: f64, steps: u32) -> f64 {
    riemann_sum(a, b, steps, |x, width| f(x) * width)
}

/// Approximates the volume of the solid formed by rotating `f` around the x axis over `[a, b]`,
/// by summing discs of radius `f(x)`.
pub fn volume_of_revolution<F: Fn(f64) -> f64>(f: F, a: f64, b: f64, steps: u32) -> f64 {
    riemann_sum(a, b, steps, |x, width| PI * f(x).powi(2) * width)
}

/// Approximates the length of the curve `f` over `[a, b]`, by summing the straight line segments
/// between consecutive sample points.
pub fn arc_length<F: Fn(f64) -> f64>(f: F, a: f64, b: f64, steps: u32) -> f64 {
    riemann_sum(a, b, steps, |x, width| width.hypot(f(x + width) - f(x)))
}

fn riemann_sum<F: Fn(f64, f64) -> f64>(a: f64, b: f64, steps: u32, slice: F) -> f64 {
    if steps == 0 {
        return 0.0;
    }

    let width = (b - a) / f64::from(steps);
    // Each sample point is computed from its index so that rounding errors don't accumulate.
    (0..steps)
        .map(|i| slice(a + width * f64::from(i), width))
        .sum()
}
