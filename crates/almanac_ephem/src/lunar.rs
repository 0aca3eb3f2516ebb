//! Lunar position, phase and new-moon times.
//!
//! Positions follow the truncated ELP-2000/82 series of Meeus (chapter 47):
//! 60 longitude/distance terms and 60 latitude terms, each scaled by the
//! eccentricity factor E per multiple of the solar anomaly. New moons use
//! the chapter 49 series with its planetary perturbations.
//!
//! Sources:
//! - Meeus, *Astronomical Algorithms*, 2nd ed., chapters 47 and 49.
//! - Reingold & Dershowitz, *Calendrical Calculations*, 3rd ed., §14.5.

use almanac_math::{
    MathError, arccos_degrees, arcsin_degrees, cosine_degrees, final_of, invert_angular, modulo,
    next_of, normalize_360, poly, sigma, sin_degrees,
};
use almanac_time::{J2000, Location, Moment, julian_centuries, universal_from_dynamical};
use tracing::trace;

use crate::lunar_data::{
    LATITUDE_TERMS, LONGITUDE_DISTANCE_TERMS, NEW_MOON_ADDITIONAL_TERMS, NEW_MOON_TERMS,
};
use crate::refraction::refraction;
use crate::solar::{
    altitude_of_ecliptic_point, declination, nutation, right_ascension, solar_anomaly,
    solar_longitude,
};

/// Mean time between successive new moons, in days.
pub const MEAN_SYNODIC_MONTH: f64 = 29.530588861;

/// Lunar phase angle at new moon.
pub const NEW: f64 = 0.0;
pub const FIRST_QUARTER: f64 = 90.0;
pub const FULL: f64 = 180.0;
pub const LAST_QUARTER: f64 = 270.0;

/// Mean distance from the center of the earth to the moon, in meters.
const MEAN_LUNAR_DISTANCE_M: f64 = 385_000_560.0;

/// Equatorial radius of the earth used for lunar parallax, in meters.
const EARTH_RADIUS_M: f64 = 6_378_140.0;

/// Lunation index of the first new moon of January 2000.
const NEW_MOON_J2000_INDEX: i64 = 24_724;

/// Mean longitude of the moon for Julian century `c`, in `[0, 360)`.
pub fn mean_lunar_longitude(c: f64) -> f64 {
    normalize_360(poly(
        c,
        &[
            218.3164477,
            481267.88123421,
            -0.0015786,
            1.0 / 538_841.0,
            -1.0 / 65_194_000.0,
        ],
    ))
}

/// Mean elongation of the moon from the sun, in `[0, 360)`.
pub fn lunar_elongation(c: f64) -> f64 {
    normalize_360(poly(
        c,
        &[
            297.8501921,
            445267.1114034,
            -0.0018819,
            1.0 / 545_868.0,
            -1.0 / 113_065_000.0,
        ],
    ))
}

/// Mean anomaly of the moon, in `[0, 360)`.
pub fn lunar_anomaly(c: f64) -> f64 {
    normalize_360(poly(
        c,
        &[
            134.9633964,
            477198.8675055,
            0.0087414,
            1.0 / 69_699.0,
            -1.0 / 14_712_000.0,
        ],
    ))
}

/// Mean argument of latitude of the moon, in `[0, 360)`.
pub fn moon_node(c: f64) -> f64 {
    normalize_360(poly(
        c,
        &[
            93.2720950,
            483202.0175233,
            -0.0036539,
            -1.0 / 3_526_000.0,
            1.0 / 863_310_000.0,
        ],
    ))
}

/// Decrease of the earth's orbital eccentricity relative to J2000.
fn eccentricity_factor(c: f64) -> f64 {
    poly(c, &[1.0, -0.002516, -0.0000074])
}

/// Fundamental arguments shared by the three position series.
struct Arguments {
    c: f64,
    mean_longitude: f64,
    elongation: f64,
    solar_anomaly: f64,
    lunar_anomaly: f64,
    node: f64,
    e: f64,
}

impl Arguments {
    fn at(t: Moment) -> Self {
        let c = julian_centuries(t);
        Self {
            c,
            mean_longitude: mean_lunar_longitude(c),
            elongation: lunar_elongation(c),
            solar_anomaly: solar_anomaly(c),
            lunar_anomaly: lunar_anomaly(c),
            node: moon_node(c),
            e: eccentricity_factor(c),
        }
    }

    /// Argument `d·D + m·M + m'·M' + f·F` of a periodic term, in degrees.
    fn angle(&self, d: i64, m: i64, m_prime: i64, f: i64) -> f64 {
        d as f64 * self.elongation
            + m as f64 * self.solar_anomaly
            + m_prime as f64 * self.lunar_anomaly
            + f as f64 * self.node
    }

    fn scale(&self, m: i64) -> f64 {
        self.e.powi(m.abs() as i32)
    }
}

/// Geocentric ecliptic longitude of the moon, in `[0, 360)`.
pub fn lunar_longitude(t: Moment) -> f64 {
    let args = Arguments::at(t);
    let c = args.c;
    let correction = 1e-6
        * sigma([&LONGITUDE_DISTANCE_TERMS[..]], |[[d, m, mp, f, l, _]]| {
            l as f64 * args.scale(m) * sin_degrees(args.angle(d, m, mp, f))
        });
    let venus = 3958e-6 * sin_degrees(119.75 + c * 131.849);
    let jupiter = 318e-6 * sin_degrees(53.09 + c * 479264.29);
    let flat_earth = 1962e-6 * sin_degrees(args.mean_longitude - args.node);
    normalize_360(args.mean_longitude + correction + venus + jupiter + flat_earth + nutation(t))
}

/// Geocentric ecliptic latitude of the moon, in degrees.
pub fn lunar_latitude(t: Moment) -> f64 {
    let args = Arguments::at(t);
    let c = args.c;
    let lp = args.mean_longitude;
    let series = 1e-6
        * sigma([&LATITUDE_TERMS[..]], |[[d, m, mp, f, b]]| {
            b as f64 * args.scale(m) * sin_degrees(args.angle(d, m, mp, f))
        });
    let venus = 175e-6
        * (sin_degrees(119.75 + c * 131.849 + args.node)
            + sin_degrees(119.75 + c * 131.849 - args.node));
    let flat_earth = -2235e-6 * sin_degrees(lp) + 127e-6 * sin_degrees(lp - args.lunar_anomaly)
        - 115e-6 * sin_degrees(lp + args.lunar_anomaly);
    let extra = 382e-6 * sin_degrees(313.45 + c * 481266.484);
    series + venus + flat_earth + extra
}

/// Distance between the centers of the earth and the moon, in meters.
pub fn lunar_distance(t: Moment) -> f64 {
    let args = Arguments::at(t);
    let correction = sigma([&LONGITUDE_DISTANCE_TERMS[..]], |[[d, m, mp, f, _, r]]| {
        r as f64 * args.scale(m) * cosine_degrees(args.angle(d, m, mp, f))
    });
    MEAN_LUNAR_DISTANCE_M + correction
}

/// Universal moment of the `n`-th new moon after (or before, for negative
/// `n`) the one of January 11, 1 CE.
pub fn nth_new_moon(n: i64) -> Moment {
    let k = (n - NEW_MOON_J2000_INDEX) as f64;
    let c = k / 1236.85;
    let approx = J2000
        + poly(
            c,
            &[
                5.09766,
                MEAN_SYNODIC_MONTH * 1236.85,
                0.00015437,
                -0.000000150,
                0.00000000073,
            ],
        );
    let e = eccentricity_factor(c);
    let solar = poly(c, &[2.5534, 1236.85 * 29.10535670, -0.0000014, -0.00000011]);
    let lunar = poly(
        c,
        &[
            201.5643,
            385.81693528 * 1236.85,
            0.0107582,
            0.00001238,
            -0.000000058,
        ],
    );
    let argument = poly(
        c,
        &[
            160.7108,
            390.67050284 * 1236.85,
            -0.0016118,
            -0.00000227,
            0.000000011,
        ],
    );
    let omega = poly(c, &[124.7746, -1.56375588 * 1236.85, 0.0020672, 0.00000215]);
    let correction = -0.00017 * sin_degrees(omega)
        + sigma([&NEW_MOON_TERMS[..]], |[[v, w, x, y, z]]| {
            v * e.powi(w as i32) * sin_degrees(x * solar + y * lunar + z * argument)
        });
    let extra = 0.000325 * sin_degrees(poly(c, &[299.77, 132.8475848, -0.009173]));
    let additional = sigma([&NEW_MOON_ADDITIONAL_TERMS[..]], |[[i, j, l]]| {
        l * sin_degrees(i + j * k)
    });
    universal_from_dynamical(approx + correction + extra + additional)
}

/// Lunar phase angle at `t`: moon minus sun longitude, in `[0, 360)`.
///
/// Near conjunction the longitude difference is unreliable, so whenever it
/// disagrees by more than 180° with the phase implied by the nearest new
/// moon, the latter is used.
pub fn lunar_phase(t: Moment) -> f64 {
    let phi = normalize_360(lunar_longitude(t) - solar_longitude(t));
    let t0 = nth_new_moon(0);
    let n = ((t - t0) / MEAN_SYNODIC_MONTH).round() as i64;
    let phi_prime = 360.0 * modulo((t - nth_new_moon(n)) / MEAN_SYNODIC_MONTH, 1.0);
    if (phi - phi_prime).abs() > 180.0 {
        phi_prime
    } else {
        phi
    }
}

/// Lunation index near `t`, estimated from the current phase.
fn estimated_lunation(t: Moment) -> i64 {
    let t0 = nth_new_moon(0);
    ((t - t0) / MEAN_SYNODIC_MONTH - lunar_phase(t) / 360.0).round() as i64
}

/// Moment of the last new moon strictly before `t`.
pub fn new_moon_before(t: Moment) -> Result<Moment, MathError> {
    let n = estimated_lunation(t);
    let k = final_of(n - 1, |k| nth_new_moon(k) < t)?;
    trace!(estimate = n, found = k, "new_moon_before");
    Ok(nth_new_moon(k))
}

/// Moment of the first new moon at or after `t`.
pub fn new_moon_at_or_after(t: Moment) -> Result<Moment, MathError> {
    let n = estimated_lunation(t);
    let k = next_of(n, |k| nth_new_moon(k) >= t)?;
    trace!(estimate = n, found = k, "new_moon_at_or_after");
    Ok(nth_new_moon(k))
}

/// First moment at or after `t` when the lunar phase equals `phi`.
pub fn lunar_phase_at_or_after(phi: f64, t: Moment) -> Result<Moment, MathError> {
    let tau = t + MEAN_SYNODIC_MONTH / 360.0 * modulo(phi - lunar_phase(t), 360.0);
    invert_angular(lunar_phase, phi, t.max(tau - 2.0), tau + 2.0)
}

/// Last moment at or before `t` when the lunar phase equals `phi`.
pub fn lunar_phase_at_or_before(phi: f64, t: Moment) -> Result<Moment, MathError> {
    let tau = t - MEAN_SYNODIC_MONTH / 360.0 * modulo(lunar_phase(t) - phi, 360.0);
    invert_angular(lunar_phase, phi, tau - 2.0, t.min(tau + 2.0))
}

/// Geocentric altitude of the moon above the horizon, in `[-180, 180)`.
pub fn lunar_altitude(t: Moment, loc: &Location) -> f64 {
    altitude_of_ecliptic_point(t, loc, lunar_latitude(t), lunar_longitude(t))
}

/// Equatorial coordinates of the moon: (right ascension, declination).
pub fn lunar_equatorial(t: Moment) -> (f64, f64) {
    let beta = lunar_latitude(t);
    let lambda = lunar_longitude(t);
    (right_ascension(t, beta, lambda), declination(t, beta, lambda))
}

/// Parallax of the moon in altitude at `loc`, in degrees.
pub fn lunar_parallax(t: Moment, loc: &Location) -> f64 {
    let geo = lunar_altitude(t, loc);
    let sin_pi = EARTH_RADIUS_M / lunar_distance(t);
    arcsin_degrees(sin_pi * cosine_degrees(geo))
}

/// Altitude of the moon's center as seen from the surface at `loc`.
pub fn topocentric_lunar_altitude(t: Moment, loc: &Location) -> f64 {
    lunar_altitude(t, loc) - lunar_parallax(t, loc)
}

/// Altitude of the moon's upper limb, corrected for parallax, refraction
/// and a mean semi-diameter of 16′.
pub fn observed_lunar_altitude(t: Moment, loc: &Location) -> f64 {
    topocentric_lunar_altitude(t, loc) + refraction(loc) + 16.0 / 60.0
}

/// Geocentric apparent diameter of the moon, in degrees.
pub fn lunar_diameter(t: Moment) -> f64 {
    1_792_367_000.0 / (9.0 * lunar_distance(t))
}

/// Topocentric semi-diameter of the moon at `loc`, in degrees.
pub fn lunar_semi_diameter(t: Moment, loc: &Location) -> f64 {
    let h = lunar_altitude(t, loc);
    let p = lunar_parallax(t, loc);
    0.27245 * p * (1.0 + sin_degrees(h) * sin_degrees(p))
}

/// Angular separation of the sun and moon (arc of light), in degrees.
pub fn arc_of_light(t: Moment) -> f64 {
    arccos_degrees(cosine_degrees(lunar_latitude(t)) * cosine_degrees(lunar_phase(t)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_math::mod3;
    use almanac_time::{JERUSALEM, fixed_from_gregorian};

    fn equinox_noon() -> Moment {
        fixed_from_gregorian(2024, 3, 20) as f64 + 0.5
    }

    #[test]
    fn mean_elements_at_j2000_dynamical() {
        assert!((mean_lunar_longitude(0.0) - 218.3164477).abs() < 1e-12);
        assert!((lunar_elongation(0.0) - 297.8501921).abs() < 1e-12);
        assert!((lunar_anomaly(0.0) - 134.9633964).abs() < 1e-12);
        assert!((moon_node(0.0) - 93.2720950).abs() < 1e-12);
    }

    #[test]
    fn position_at_equinox_noon() {
        let t = equinox_noon();
        let lon = lunar_longitude(t);
        let lat = lunar_latitude(t);
        let dist = lunar_distance(t);
        assert!((lon - 128.291_567_157).abs() < 1e-6, "lon {lon}");
        assert!((lat - 4.864_072_476).abs() < 1e-6, "lat {lat}");
        assert!((dist - 402_281_109.165).abs() < 1.0, "dist {dist}");
    }

    #[test]
    fn phase_at_equinox_noon() {
        let phase = lunar_phase(equinox_noon());
        assert!((phase - 127.923_084).abs() < 1e-5, "phase {phase}");
    }

    #[test]
    fn first_new_moon_is_january_eleventh() {
        let t = nth_new_moon(0);
        assert!((t - 11.458_383_124).abs() < 1e-6, "t {t}");
        let y2k = nth_new_moon(NEW_MOON_J2000_INDEX);
        assert!((y2k - 730_125.759_482_328).abs() < 1e-6, "t {y2k}");
    }

    #[test]
    fn observer_geometry_at_jerusalem() {
        let t = equinox_noon();
        let alt = lunar_altitude(t, &JERUSALEM);
        let par = lunar_parallax(t, &JERUSALEM);
        let obs = observed_lunar_altitude(t, &JERUSALEM);
        assert!((alt - 5.240_735).abs() < 1e-5, "alt {alt}");
        assert!((par - 0.904_661).abs() < 1e-5, "parallax {par}");
        assert!((topocentric_lunar_altitude(t, &JERUSALEM) - 4.336_074).abs() < 1e-5);
        assert!((obs - 6.186_140).abs() < 1e-5, "observed {obs}");
    }

    #[test]
    fn apparent_size() {
        let t = equinox_noon();
        assert!((lunar_diameter(t) - 0.495_057).abs() < 1e-5);
        assert!((lunar_semi_diameter(t, &JERUSALEM) - 0.246_830).abs() < 1e-5);
        assert!((arc_of_light(t) - 127.762_493).abs() < 1e-5);
    }

    #[test]
    fn equatorial_matches_components() {
        let t = equinox_noon();
        let (ra, dec) = lunar_equatorial(t);
        assert!((0.0..360.0).contains(&ra));
        assert!(dec.abs() < 30.0);
    }

    #[test]
    fn phase_search_started_just_past_target_waits_a_lunation() {
        // Phase here is about 92.9, so the next 90 is a month away.
        let t = 730_723.075;
        let x = lunar_phase_at_or_after(90.0, t).unwrap();
        assert!(x - t > 29.0 && x - t < 29.6, "dt {}", x - t);
        assert!((lunar_phase(x) - 90.0).abs() < 1e-3, "phase {}", lunar_phase(x));
        for phi in [0.0, 45.0, 180.0, 270.0, 333.0] {
            let x = lunar_phase_at_or_after(phi, t).unwrap();
            let miss = mod3(lunar_phase(x) - phi, -180.0, 180.0);
            assert!(x >= t && miss.abs() < 1e-3, "phi {phi}: miss {miss}");
        }
    }
}
