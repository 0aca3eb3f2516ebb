//! Horizon refraction and dip for an elevated observer.

use almanac_math::arccos_degrees;
use almanac_time::Location;

/// Mean radius of the earth used for the dip of the horizon, in meters.
pub const DIP_EARTH_RADIUS_M: f64 = 6.372e6;

/// Standard atmospheric refraction at the horizon, in degrees (34′).
pub const HORIZON_REFRACTION_DEG: f64 = 34.0 / 60.0;

/// Dip of the visible horizon for an observer `elevation_m` above the
/// surrounding terrain, in degrees. Negative elevations count as zero.
pub fn horizon_dip(elevation_m: f64) -> f64 {
    let h = elevation_m.max(0.0);
    arccos_degrees(DIP_EARTH_RADIUS_M / (DIP_EARTH_RADIUS_M + h))
}

/// Total refraction correction at the horizon of `loc`, in degrees:
/// 34′ plus the horizon dip plus 19″ per square-root meter of elevation.
pub fn refraction(loc: &Location) -> f64 {
    let h = loc.elevation_m.max(0.0);
    HORIZON_REFRACTION_DEG + horizon_dip(h) + 19.0 / 3600.0 * h.sqrt()
}
