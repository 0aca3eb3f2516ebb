//! Root finding and integer search.
//!
//! Every loop here is bounded. Exhausting a bound is reported as
//! [`MathError::NoConvergence`]; callers treat it as fatal rather than as a
//! missing event.

use tracing::trace;

use crate::error::MathError;
use crate::numeric::modulo;

/// Upper bound on halvings in [`binary_search`].
///
/// 200 halvings shrink any finite f64 interval below its representable
/// spacing, so a well-formed stop predicate always fires first.
pub const MAX_BISECTIONS: usize = 200;

/// Upper bound on steps in [`next_of`], [`final_of`] and [`try_next_of`].
pub const MAX_LINEAR_STEPS: usize = 10_000;

/// Default interval width at which [`invert_angular`] stops, in the
/// function's argument units (days for all callers here).
pub const ANGULAR_PRECISION: f64 = 1e-5;

/// Bisection over `[lo, hi]`.
///
/// On each step the midpoint `x` is computed. If `stop(lo, hi)` holds, `x`
/// is returned. Otherwise the search keeps `[lo, x]` when `go_left(x)` is
/// true, and `[x, hi]` when it is false.
pub fn binary_search<S, L>(
    lo: f64,
    hi: f64,
    mut stop: S,
    mut go_left: L,
) -> Result<f64, MathError>
where
    S: FnMut(f64, f64) -> bool,
    L: FnMut(f64) -> bool,
{
    let (mut lo, mut hi) = (lo, hi);
    for _ in 0..MAX_BISECTIONS {
        let x = 0.5 * (lo + hi);
        if stop(lo, hi) {
            return Ok(x);
        }
        if go_left(x) {
            hi = x;
        } else {
            lo = x;
        }
    }
    trace!(lo, hi, "binary_search exhausted");
    Err(MathError::NoConvergence {
        routine: "binary_search",
        iterations: MAX_BISECTIONS,
    })
}

/// Find `x` in `[a, b]` with `f(x) == y` (mod 360), to [`ANGULAR_PRECISION`].
///
/// `f` must increase monotonically (mod 360) across the interval and cover
/// less than a full turn. The result is unspecified if `y` is not reached.
pub fn invert_angular<F>(f: F, y: f64, a: f64, b: f64) -> Result<f64, MathError>
where
    F: FnMut(f64) -> f64,
{
    invert_angular_with_precision(f, y, a, b, ANGULAR_PRECISION)
}

/// [`invert_angular`] with an explicit stopping width.
pub fn invert_angular_with_precision<F>(
    mut f: F,
    y: f64,
    a: f64,
    b: f64,
    precision: f64,
) -> Result<f64, MathError>
where
    F: FnMut(f64) -> f64,
{
    binary_search(
        a,
        b,
        |l, u| u - l < precision,
        |x| modulo(f(x) - y, 360.0) < 180.0,
    )
}

/// Smallest `k >= start` with `p(k)`.
pub fn next_of<P>(start: i64, mut p: P) -> Result<i64, MathError>
where
    P: FnMut(i64) -> bool,
{
    try_next_of(start, |k| Ok::<bool, MathError>(p(k)))
}

/// [`next_of`] with a fallible predicate; the first error is returned.
pub fn try_next_of<P, E>(start: i64, mut p: P) -> Result<i64, E>
where
    P: FnMut(i64) -> Result<bool, E>,
    E: From<MathError>,
{
    let mut k = start;
    for _ in 0..MAX_LINEAR_STEPS {
        if p(k)? {
            return Ok(k);
        }
        k += 1;
    }
    Err(MathError::NoConvergence {
        routine: "next_of",
        iterations: MAX_LINEAR_STEPS,
    }
    .into())
}

/// Last `k >= start - 1` such that `p` holds on every integer in
/// `start..=k`.
///
/// Returns `start - 1` when `p(start)` is false.
pub fn final_of<P>(start: i64, mut p: P) -> Result<i64, MathError>
where
    P: FnMut(i64) -> bool,
{
    let mut k = start;
    for _ in 0..MAX_LINEAR_STEPS {
        if !p(k) {
            return Ok(k - 1);
        }
        k += 1;
    }
    Err(MathError::NoConvergence {
        routine: "final_of",
        iterations: MAX_LINEAR_STEPS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn bisection_finds_sqrt2() {
        let r = binary_search(0.0, 2.0, |l, u| u - l < 1e-10, |x| x * x >= 2.0).unwrap();
        assert!((r - std::f64::consts::SQRT_2).abs() < 1e-9, "got {r}");
    }

    #[test]
    fn bisection_never_stopping_is_reported() {
        let err = binary_search(0.0, 1.0, |_, _| false, |_| true).unwrap_err();
        assert_eq!(
            err,
            MathError::NoConvergence {
                routine: "binary_search",
                iterations: MAX_BISECTIONS
            }
        );
    }

    #[test]
    fn invert_across_the_wrap() {
        // f crosses 360 -> 0 at x = 10.
        let f = |x: f64| modulo(350.0 + x, 360.0);
        let r = invert_angular(f, 5.0, 0.0, 30.0).unwrap();
        assert!((r - 15.0).abs() < 1e-4, "got {r}");
    }

    #[test]
    fn next_of_first_match() {
        assert_eq!(next_of(3, |k| k * k > 50).unwrap(), 8);
        assert_eq!(next_of(10, |k| k * k > 50).unwrap(), 10);
    }

    #[test]
    fn final_of_last_match() {
        assert_eq!(final_of(0, |k| k < 7).unwrap(), 6);
        assert_eq!(final_of(5, |_| false).unwrap(), 4);
    }

    #[test]
    fn linear_guard_fires() {
        assert!(next_of(0, |_| false).is_err());
        assert!(final_of(0, |_| true).is_err());
    }

    #[derive(Debug, PartialEq)]
    enum TestError {
        Math(MathError),
        Bad(i64),
    }

    impl From<MathError> for TestError {
        fn from(e: MathError) -> Self {
            TestError::Math(e)
        }
    }

    #[test]
    fn try_next_of_propagates_predicate_error() {
        let r = try_next_of(0, |k| if k == 3 { Err(TestError::Bad(k)) } else { Ok(false) });
        assert_eq!(r, Err(TestError::Bad(3)));
        let ok = try_next_of(0, |k| Ok::<_, TestError>(k == 2));
        assert_eq!(ok, Ok(2));
    }

    proptest! {
        #[test]
        fn bisection_brackets_linear_root(root in -1000.0f64..1000.0) {
            let r = binary_search(-2000.0, 2000.0, |l, u| u - l < 1e-6, |x| x >= root).unwrap();
            prop_assert!((r - root).abs() < 1e-6);
        }

        #[test]
        fn invert_recovers_target(target in 0.0f64..360.0, start in 0.0f64..360.0) {
            // One full turn over 400 units, starting at `start` degrees.
            let f = |x: f64| modulo(start + x * 0.9, 360.0);
            let dist = modulo(target - start, 360.0) / 0.9;
            let r = invert_angular(f, target, 0.0, 399.0).unwrap();
            prop_assume!(dist > 1e-3 && dist < 398.0);
            prop_assert!((r - dist).abs() < 1e-4, "r {} dist {}", r, dist);
        }
    }
}
