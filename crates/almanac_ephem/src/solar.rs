//! Solar position: apparent longitude, obliquity, nutation, aberration,
//! equatorial coordinates and the equation of time.
//!
//! All functions take a universal-time [`Moment`]; the conversion to
//! Julian centuries of dynamical time happens inside.
//!
//! Sources:
//! - Longitude series: Bretagnon & Simon, *Planetary Programs and Tables*
//!   (1986), 49 terms, as used in Reingold & Dershowitz, *Calendrical
//!   Calculations*, 3rd ed., §14.4.
//! - Obliquity: IAU 1980, Meeus eq. 22.2.
//! - Equation of time: Meeus, *Astronomical Algorithms*, eq. 28.3.

use std::f64::consts::PI;

use almanac_math::{
    MathError, angle, arcsin_degrees, arctan_degrees, cosine_degrees, invert_angular, mod3, modulo,
    normalize_360, poly, sigma, sin_degrees, tangent_degrees,
};
use almanac_time::{Location, Moment, julian_centuries, sidereal_from_moment};
use tracing::trace;

/// Mean tropical year in days.
pub const MEAN_TROPICAL_YEAR: f64 = 365.242189;

/// Solar longitude at the March equinox.
pub const SPRING: f64 = 0.0;
/// Solar longitude at the June solstice.
pub const SUMMER: f64 = 90.0;
/// Solar longitude at the September equinox.
pub const AUTUMN: f64 = 180.0;
/// Solar longitude at the December solstice.
pub const WINTER: f64 = 270.0;

/// Periodic terms of the solar longitude.
///
/// Each row: `[x, y, z]`, contributing `x · sin(y + z·c)` in units of
/// 1e-7 radians, with `y` in degrees and `z` in degrees per century.
#[rustfmt::skip]
static SOLAR_LONGITUDE_TERMS: [[f64; 3]; 49] = [
    //       x           y               z
    [ 403406.0,  270.54861,      0.9287892],
    [ 195207.0,  340.19128,  35999.1376958],
    [ 119433.0,   63.91854,  35999.4089666],
    [ 112392.0,   331.2622,  35998.7287385],
    [   3891.0,    317.843,    71998.20261],
    [   2819.0,     86.631,     71998.4403],
    [   1721.0,    240.052,    36000.35726],
    [    660.0,     310.26,     71997.4812],
    [    350.0,     247.23,     32964.4678],
    [    334.0,     260.87,        -19.441],
    [    314.0,     297.82,    445267.1117],
    [    268.0,     343.14,      45036.884],
    [    242.0,     166.79,         3.1008],
    [    234.0,      81.53,     22518.4434],
    [    158.0,        3.5,       -19.9739],
    [    132.0,     132.75,     65928.9345],
    [    129.0,     182.95,      9038.0293],
    [    114.0,     162.03,      3034.7684],
    [     99.0,       29.8,      33718.148],
    [     93.0,      266.4,       3034.448],
    [     86.0,      249.2,      -2280.773],
    [     78.0,      157.6,      29929.992],
    [     72.0,      257.8,      31556.493],
    [     68.0,      185.1,        149.588],
    [     64.0,       69.9,        9037.75],
    [     46.0,        8.0,     107997.405],
    [     38.0,      197.1,      -4444.176],
    [     37.0,      250.4,        151.771],
    [     32.0,       65.3,      67555.316],
    [     29.0,      162.7,       31556.08],
    [     28.0,      341.5,       -4561.54],
    [     27.0,      291.6,     107996.706],
    [     27.0,       98.5,       1221.655],
    [     25.0,      146.7,      62894.167],
    [     24.0,      110.0,      31437.369],
    [     21.0,        5.2,      14578.298],
    [     21.0,      342.6,     -31931.757],
    [     20.0,      230.9,      34777.243],
    [     18.0,      256.1,       1221.999],
    [     17.0,       45.3,      62894.511],
    [     14.0,      242.9,      -4442.039],
    [     13.0,      115.2,     107997.909],
    [     13.0,      151.8,        119.066],
    [     13.0,      285.3,      16859.071],
    [     12.0,       53.3,         -4.578],
    [     10.0,      126.6,      26895.292],
    [     10.0,      205.7,        -39.127],
    [     10.0,       85.9,      12297.536],
    [     10.0,      146.1,      90073.778],
];

/// Apparent geocentric ecliptic longitude of the sun, in `[0, 360)`.
pub fn solar_longitude(t: Moment) -> f64 {
    let c = julian_centuries(t);
    let series = sigma([&SOLAR_LONGITUDE_TERMS[..]], |[[x, y, z]]| {
        x * sin_degrees(y + z * c)
    });
    let lambda = 282.7771834 + 36000.76953744 * c + 0.000005729577951308232 * series;
    normalize_360(lambda + aberration(t) + nutation(t))
}

/// Nutation in longitude, in degrees.
pub fn nutation(t: Moment) -> f64 {
    let c = julian_centuries(t);
    let a = poly(c, &[124.90, -1934.134, 0.002063]);
    let b = poly(c, &[201.11, 72001.5377, 0.00057]);
    -0.004778 * sin_degrees(a) - 0.0003667 * sin_degrees(b)
}

/// Annual aberration, in degrees.
pub fn aberration(t: Moment) -> f64 {
    let c = julian_centuries(t);
    0.0000974 * cosine_degrees(177.63 + 35999.01848 * c) - 0.005575
}

/// Mean obliquity of the ecliptic, in degrees.
pub fn obliquity(t: Moment) -> f64 {
    let c = julian_centuries(t);
    angle(23.0, 26.0, 21.448)
        + poly(
            c,
            &[
                0.0,
                angle(0.0, 0.0, -46.8150),
                angle(0.0, 0.0, -0.00059),
                angle(0.0, 0.0, 0.001813),
            ],
        )
}

/// Declination of the ecliptic point (`beta`, `lambda`) at `t`.
pub fn declination(t: Moment, beta: f64, lambda: f64) -> f64 {
    let eps = obliquity(t);
    arcsin_degrees(
        sin_degrees(beta) * cosine_degrees(eps)
            + cosine_degrees(beta) * sin_degrees(eps) * sin_degrees(lambda),
    )
}

/// Right ascension of the ecliptic point (`beta`, `lambda`) at `t`, in
/// `[0, 360)`.
pub fn right_ascension(t: Moment, beta: f64, lambda: f64) -> f64 {
    let eps = obliquity(t);
    arctan_degrees(
        sin_degrees(lambda) * cosine_degrees(eps) - tangent_degrees(beta) * sin_degrees(eps),
        cosine_degrees(lambda),
    )
}

/// Mean anomaly of the sun for Julian century `c`, in `[0, 360)`.
pub fn solar_anomaly(c: f64) -> f64 {
    normalize_360(poly(
        c,
        &[357.5291092, 35999.0502909, -0.0001536, 1.0 / 24_490_000.0],
    ))
}

/// Apparent minus mean solar time at `t`, as a fraction of a day.
///
/// Clamped to at most half a day in magnitude.
pub fn equation_of_time(t: Moment) -> f64 {
    let c = julian_centuries(t);
    let lambda = poly(c, &[280.46645, 36000.76983, 0.0003032]);
    let anomaly = poly(c, &[357.52910, 35999.05030, -0.0001559, -0.00000048]);
    let eccentricity = poly(c, &[0.016708617, -0.000042037, -0.0000001236]);
    let y = tangent_degrees(obliquity(t) / 2.0).powi(2);
    let equation = (1.0 / (2.0 * PI))
        * (y * sin_degrees(2.0 * lambda) - 2.0 * eccentricity * sin_degrees(anomaly)
            + 4.0 * eccentricity * y * sin_degrees(anomaly) * cosine_degrees(2.0 * lambda)
            - 0.5 * y * y * sin_degrees(4.0 * lambda)
            - 1.25 * eccentricity * eccentricity * sin_degrees(2.0 * anomaly));
    equation.signum() * equation.abs().min(0.5)
}

/// First moment at or after `t` when the solar longitude reaches `lambda`.
///
/// The estimate from the mean motion is refined by angular inversion over
/// a ten-day window.
pub fn solar_longitude_after(lambda: f64, t: Moment) -> Result<Moment, MathError> {
    let rate = MEAN_TROPICAL_YEAR / 360.0;
    let tau = t + rate * modulo(lambda - solar_longitude(t), 360.0);
    let a = t.max(tau - 5.0);
    let b = tau + 5.0;
    trace!(lambda, tau, "solar_longitude_after bracket");
    invert_angular(solar_longitude, lambda, a, b)
}

/// Approximate moment at or before `t` when the solar longitude was
/// `lambda`, good to about a day.
pub fn estimate_prior_solar_longitude(lambda: f64, t: Moment) -> Moment {
    let rate = MEAN_TROPICAL_YEAR / 360.0;
    let tau = t - rate * modulo(solar_longitude(t) - lambda, 360.0);
    let delta = mod3(solar_longitude(tau) - lambda, -180.0, 180.0);
    t.min(tau - rate * delta)
}

/// Geocentric altitude of an ecliptic point above the horizon of `loc`,
/// in `[-180, 180)`.
pub(crate) fn altitude_of_ecliptic_point(t: Moment, loc: &Location, beta: f64, lambda: f64) -> f64 {
    let phi = loc.latitude_deg;
    let alpha = right_ascension(t, beta, lambda);
    let delta = declination(t, beta, lambda);
    let hour_angle = normalize_360(sidereal_from_moment(t) + loc.longitude_deg - alpha);
    let altitude = arcsin_degrees(
        sin_degrees(phi) * sin_degrees(delta)
            + cosine_degrees(phi) * cosine_degrees(delta) * cosine_degrees(hour_angle),
    );
    mod3(altitude, -180.0, 180.0)
}

/// Geocentric altitude of the sun at `t`, in degrees.
pub fn solar_altitude(t: Moment, loc: &Location) -> f64 {
    altitude_of_ecliptic_point(t, loc, 0.0, solar_longitude(t))
}
