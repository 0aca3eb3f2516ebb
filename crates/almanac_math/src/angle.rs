//! Trigonometry on angles measured in degrees.

use crate::numeric::modulo;

/// Build a degree value from degrees, arcminutes and arcseconds.
///
/// Components are combined without sign handling, so a negative angle
/// needs every component negated: `angle(0.0, 0.0, -46.815)`.
pub fn angle(d: f64, m: f64, s: f64) -> f64 {
    d + (m + s / 60.0) / 60.0
}

/// Normalize an angle to `[0, 360)`.
pub fn normalize_360(deg: f64) -> f64 {
    modulo(deg, 360.0)
}

pub fn sin_degrees(theta: f64) -> f64 {
    theta.to_radians().sin()
}

pub fn cosine_degrees(theta: f64) -> f64 {
    theta.to_radians().cos()
}

pub fn tangent_degrees(theta: f64) -> f64 {
    theta.to_radians().tan()
}

/// Arcsine in degrees. Out-of-domain input yields NaN.
pub fn arcsin_degrees(x: f64) -> f64 {
    x.asin().to_degrees()
}

/// Arccosine in degrees. Out-of-domain input yields NaN.
pub fn arccos_degrees(x: f64) -> f64 {
    x.acos().to_degrees()
}

/// Full-quadrant arctangent of `y/x`, in `[0, 360)`.
///
/// When `x == 0` the result is 90 or 270 by the sign of `y`. The undefined
/// case `(0, 0)` returns 0.
pub fn arctan_degrees(y: f64, x: f64) -> f64 {
    if x == 0.0 {
        if y == 0.0 {
            return 0.0;
        }
        return if y > 0.0 { 90.0 } else { 270.0 };
    }
    let alpha = (y / x).atan().to_degrees();
    let alpha = if x >= 0.0 { alpha } else { alpha + 180.0 };
    normalize_360(alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn angle_composes_sexagesimal() {
        assert!((angle(23.0, 26.0, 21.448) - 23.439_291_111_111).abs() < 1e-9);
        assert!((angle(0.0, 0.0, -46.815) + 0.013_004_166_666).abs() < 1e-9);
    }

    #[test]
    fn arctan_covers_all_quadrants() {
        assert!((arctan_degrees(1.0, 1.0) - 45.0).abs() < EPS);
        assert!((arctan_degrees(1.0, -1.0) - 135.0).abs() < EPS);
        assert!((arctan_degrees(-1.0, -1.0) - 225.0).abs() < EPS);
        assert!((arctan_degrees(-1.0, 1.0) - 315.0).abs() < EPS);
    }

    #[test]
    fn arctan_on_the_axes() {
        assert_eq!(arctan_degrees(2.0, 0.0), 90.0);
        assert_eq!(arctan_degrees(-2.0, 0.0), 270.0);
        assert_eq!(arctan_degrees(0.0, 0.0), 0.0);
        assert!((arctan_degrees(0.0, -3.0) - 180.0).abs() < EPS);
    }

    #[test]
    fn trig_in_degrees() {
        assert!((sin_degrees(30.0) - 0.5).abs() < EPS);
        assert!((cosine_degrees(60.0) - 0.5).abs() < EPS);
        assert!((tangent_degrees(45.0) - 1.0).abs() < EPS);
        assert!((arcsin_degrees(0.5) - 30.0).abs() < 1e-10);
        assert!((arccos_degrees(0.5) - 60.0).abs() < 1e-10);
    }

    #[test]
    fn arcsin_out_of_domain_is_nan() {
        assert!(arcsin_degrees(1.5).is_nan());
    }

    #[test]
    fn normalize_wraps_negative() {
        assert!((normalize_360(-30.0) - 330.0).abs() < EPS);
        assert!((normalize_360(720.5) - 0.5).abs() < EPS);
    }
}
