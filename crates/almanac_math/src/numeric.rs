//! Polynomials, summation and floor-based modular arithmetic.
//!
//! All modulo helpers use floor division, so the result takes the sign of
//! the divisor: `modulo(-1.0, 360.0) == 359.0`. This differs from Rust's `%`,
//! which truncates toward zero.

/// Evaluate `coeffs[0] + coeffs[1]·x + coeffs[2]·x² + …` by Horner's rule.
///
/// Coefficients are ordered lowest degree first. An empty slice evaluates
/// to `0.0`.
pub fn poly(x: f64, coeffs: &[f64]) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &a| acc * x + a)
}

/// Sum `f(lists[0][i], …, lists[N-1][i])` over the common index range.
///
/// The lists are meant to have equal length. If they do not, the sum is
/// truncated to the shortest list; no element past that index is visited.
pub fn sigma<T, const N: usize, F>(lists: [&[T]; N], mut f: F) -> f64
where
    T: Copy,
    F: FnMut([T; N]) -> f64,
{
    let len = lists.iter().map(|l| l.len()).min().unwrap_or(0);
    (0..len)
        .map(|i| f(std::array::from_fn(|j| lists[j][i])))
        .sum()
}

/// Floor modulo: `x - y·⌊x/y⌋`.
///
/// For `y > 0` the result lies in `[0, y)`.
pub fn modulo(x: f64, y: f64) -> f64 {
    let r = x - y * (x / y).floor();
    // Rounding can land exactly on y for tiny negative x.
    if r == y { 0.0 } else { r }
}

/// Adjusted modulo: like [`modulo`] but returns `y` instead of `0`.
///
/// For `y > 0` the result lies in `(0, y]`. Used for 1-based cycles.
pub fn amod(x: f64, y: f64) -> f64 {
    let r = modulo(x, y);
    if r == 0.0 { y } else { r }
}

/// Integer adjusted modulo, result in `1..=y` for `y > 0`.
pub fn amod_int(x: i64, y: i64) -> i64 {
    let r = x.rem_euclid(y);
    if r == 0 { y } else { r }
}

/// Shift `x` into the half-open range `[a, b)` by a multiple of `b - a`.
///
/// When `a == b` the value is returned unchanged.
pub fn mod3(x: f64, a: f64, b: f64) -> f64 {
    if a == b {
        x
    } else {
        a + modulo(x - a, b - a)
    }
}

/// Floor division `⌊x/y⌋`.
pub fn quotient(x: f64, y: f64) -> f64 {
    (x / y).floor()
}
