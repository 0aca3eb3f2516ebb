//! Mean sidereal time.
//!
//! Sidereal time here is measured in degrees, not hours, because every
//! caller feeds it straight into an hour-angle computation.
//!
//! Source: IAU 1982 GMST expression, Meeus, *Astronomical Algorithms*,
//! 2nd ed., eq. 12.4.

use almanac_math::{normalize_360, poly};

use crate::location::Location;
use crate::scales::{DAYS_PER_CENTURY, J2000};
use crate::Moment;

/// Greenwich mean sidereal time at universal moment `t`, in `[0, 360)`.
///
/// The century argument is taken from universal time directly, without
/// the ephemeris correction.
pub fn sidereal_from_moment(t: Moment) -> f64 {
    let c = (t - J2000) / DAYS_PER_CENTURY;
    normalize_360(poly(
        c,
        &[
            280.46061837,
            360.98564736629 * DAYS_PER_CENTURY,
            0.000387933,
            -1.0 / 38_710_000.0,
        ],
    ))
}

/// Local mean sidereal time in degrees, east longitude positive.
pub fn local_sidereal_from_moment(t: Moment, loc: &Location) -> f64 {
    normalize_360(sidereal_from_moment(t) + loc.longitude_deg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::JERUSALEM;

    #[test]
    fn gmst_at_j2000() {
        let theta = sidereal_from_moment(J2000);
        assert!((theta - 280.46061837).abs() < 1e-8, "got {theta}");
    }

    #[test]
    fn meeus_example_12a() {
        // 1987 April 10, 0h UT: GMST = 13h10m46.3668s = 197.693195°.
        let t = crate::gregorian::fixed_from_gregorian(1987, 4, 10) as f64;
        let theta = sidereal_from_moment(t);
        assert!((theta - 197.693_195).abs() < 1e-4, "got {theta}");
    }

    #[test]
    fn sidereal_day_is_shorter() {
        // One solar day advances sidereal time by ~0.9856°.
        let a = sidereal_from_moment(J2000);
        let b = sidereal_from_moment(J2000 + 1.0);
        let step = normalize_360(b - a);
        assert!((step - 0.985_647).abs() < 1e-5, "step {step}");
    }

    #[test]
    fn local_adds_longitude() {
        let t = J2000 + 100.25;
        let local = local_sidereal_from_moment(t, &JERUSALEM);
        let diff = normalize_360(local - sidereal_from_moment(t));
        assert!((diff - 35.24).abs() < 1e-9);
    }
}
