//! Conversions among universal, standard, local and dynamical time.
//!
//! Universal time is the pivot: every other scale is defined as an offset
//! from it. Apparent (sundial) time needs the equation of time and lives in
//! the ephemeris crate.
//!
//! Sources:
//! - Ephemeris correction: Espenak & Meeus polynomial fits as tabulated in
//!   Reingold & Dershowitz, *Calendrical Calculations*, 3rd ed., §14.3.

use almanac_math::{modulo, poly};

use crate::gregorian::{JANUARY, JULY, fixed_from_gregorian, gregorian_year_from_fixed};
use crate::location::Location;
use crate::{FixedDate, Moment};

/// Days in a Julian century.
pub const DAYS_PER_CENTURY: f64 = 36525.0;

pub const SECONDS_PER_DAY: f64 = 86400.0;

/// Noon, January 1, 2000 (Gregorian) as a moment.
pub const J2000: Moment = 730_120.5;

/// Largest magnitude of a moment that day arithmetic accepts, about 2.7
/// billion years either side of the epoch.
pub const MOMENT_LIMIT: Moment = 1.0e12;

/// Fixed day containing `t`. Moments beyond [`MOMENT_LIMIT`] are clamped to
/// it, so the result is always safe for calendar arithmetic.
pub fn fixed_from_moment(t: Moment) -> FixedDate {
    t.clamp(-MOMENT_LIMIT, MOMENT_LIMIT).floor() as FixedDate
}

/// Fraction of the day elapsed at `t`, in `[0, 1)`.
pub fn time_from_moment(t: Moment) -> f64 {
    modulo(t, 1.0)
}

/// Mean-solar time offset implied by a longitude, as a fraction of a day.
pub fn zone_from_longitude(longitude_deg: f64) -> f64 {
    longitude_deg / 360.0
}

pub fn universal_from_local(t: Moment, loc: &Location) -> Moment {
    t - zone_from_longitude(loc.longitude_deg)
}

pub fn local_from_universal(t: Moment, loc: &Location) -> Moment {
    t + zone_from_longitude(loc.longitude_deg)
}

pub fn standard_from_universal(t: Moment, loc: &Location) -> Moment {
    t + loc.zone
}

pub fn universal_from_standard(t: Moment, loc: &Location) -> Moment {
    t - loc.zone
}

pub fn standard_from_local(t: Moment, loc: &Location) -> Moment {
    standard_from_universal(universal_from_local(t, loc), loc)
}

pub fn local_from_standard(t: Moment, loc: &Location) -> Moment {
    local_from_universal(universal_from_standard(t, loc), loc)
}

/// ΔT = TT − UT at `t`, in days.
///
/// Piecewise fit selected by the Gregorian year containing `t`, so the
/// value is constant within a year.
///
/// A non-finite `t` has no year and yields NaN.
pub fn ephemeris_correction(t: Moment) -> f64 {
    if !t.is_finite() {
        return f64::NAN;
    }
    let year = gregorian_year_from_fixed(fixed_from_moment(t));
    let yf = year as f64;
    let c = (fixed_from_gregorian(year, JULY, 1) - fixed_from_gregorian(1900, JANUARY, 1)) as f64
        / DAYS_PER_CENTURY;

    match year {
        1988.. => (yf - 1933.0) / SECONDS_PER_DAY,
        1900..=1987 => poly(
            c,
            &[
                -0.00002, 0.000297, 0.025184, -0.181133, 0.553040, -0.861938, 0.677066,
                -0.212591,
            ],
        ),
        1800..=1899 => poly(
            c,
            &[
                -0.000009, 0.003844, 0.083563, 0.865736, 4.867575, 15.845535, 31.332267,
                38.291999, 28.316289, 11.636204, 2.043794,
            ],
        ),
        1700..=1799 => {
            poly(
                yf - 1700.0,
                &[8.118780842, -0.005092142, 0.003336121, -0.0000266484],
            ) / SECONDS_PER_DAY
        }
        1620..=1699 => poly(yf - 1600.0, &[196.58333, -4.0675, 0.0219167]) / SECONDS_PER_DAY,
        _ => {
            let x = 0.5
                + (fixed_from_gregorian(year, JANUARY, 1) - fixed_from_gregorian(1810, JANUARY, 1))
                    as f64;
            (x * x / 41_048_480.0 - 15.0) / SECONDS_PER_DAY
        }
    }
}

pub fn dynamical_from_universal(t: Moment) -> Moment {
    t + ephemeris_correction(t)
}

pub fn universal_from_dynamical(t: Moment) -> Moment {
    t - ephemeris_correction(t)
}

/// Julian centuries of dynamical time since [`J2000`].
pub fn julian_centuries(t: Moment) -> f64 {
    (dynamical_from_universal(t) - J2000) / DAYS_PER_CENTURY
}
