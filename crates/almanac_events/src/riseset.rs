//! Sunrise, sunset and twilight.
//!
//! The sun's depression below the horizon is solved by fixed-point
//! iteration on the hour angle, with the solar declination re-evaluated at
//! each estimate. When the sun never reaches the requested depression on a
//! day (polar day or night), the result is `Ok(None)`.

use almanac_ephem::{declination, local_from_apparent, refraction, solar_longitude};
use almanac_math::{arcsin_degrees, cosine_degrees, mod3, sin_degrees, tangent_degrees};
use almanac_time::{FixedDate, Location, Moment, standard_from_local, universal_from_local};
use tracing::{debug, trace};

use crate::error::EventError;
use crate::riseset_types::{RiseSetConfig, SolarEvent};

/// Successive estimates closer than this are accepted (30 seconds).
const DEPRESSION_TOLERANCE_DAYS: f64 = 1.0 / 2880.0;

/// Upper bound on fixed-point steps in [`moment_of_depression`].
pub const MAX_DEPRESSION_ITERATIONS: usize = 64;

/// Sine of the sun's hour angle offset from 6 a.m./6 p.m. when it is
/// `alpha` degrees below the horizon, for local time `t`.
///
/// A magnitude above 1 means the depression is not reached that day.
pub fn sine_offset(t: Moment, loc: &Location, alpha: f64) -> f64 {
    let phi = loc.latitude_deg;
    let t_prime = universal_from_local(t, loc);
    let delta = declination(t_prime, 0.0, solar_longitude(t_prime));
    tangent_degrees(phi) * tangent_degrees(delta)
        + sin_degrees(alpha) / (cosine_degrees(delta) * cosine_degrees(phi))
}

/// One step of the depression solver: local moment near `t` when the sun
/// is `alpha` degrees below the horizon, in the morning or evening.
///
/// If the offset at `t` is out of range, it is retried at a better-placed
/// moment of the same day (midnight or noon) before giving up.
pub fn approx_moment_of_depression(
    t: Moment,
    loc: &Location,
    alpha: f64,
    morning: bool,
) -> Option<Moment> {
    let first = sine_offset(t, loc, alpha);
    let date = t.floor();
    let alt = if alpha >= 0.0 {
        if morning { date } else { date + 1.0 }
    } else {
        date + 0.5
    };
    let value = if first.abs() > 1.0 {
        sine_offset(alt, loc, alpha)
    } else {
        first
    };
    if value.abs() > 1.0 {
        return None;
    }
    let offset = mod3(arcsin_degrees(value) / 360.0, -0.5, 0.5);
    let sundial = if morning {
        date + 0.25 - offset
    } else {
        date + 0.75 + offset
    };
    Some(local_from_apparent(sundial, loc))
}

/// Local moment near `approx` when the sun is `alpha` degrees below the
/// horizon, iterated until estimates agree within 30 seconds.
pub fn moment_of_depression(
    approx: Moment,
    loc: &Location,
    alpha: f64,
    morning: bool,
) -> Result<Option<Moment>, EventError> {
    let mut estimate = approx;
    for iteration in 0..MAX_DEPRESSION_ITERATIONS {
        let Some(next) = approx_moment_of_depression(estimate, loc, alpha, morning) else {
            debug!(alpha, latitude = loc.latitude_deg, "depression not reached");
            return Ok(None);
        };
        if (estimate - next).abs() < DEPRESSION_TOLERANCE_DAYS {
            trace!(iteration, "moment_of_depression converged");
            return Ok(Some(next));
        }
        estimate = next;
    }
    Err(EventError::NoConvergence("moment_of_depression"))
}

/// Standard time in the morning of `date` when the sun is `alpha` degrees
/// below the horizon.
pub fn dawn(date: FixedDate, loc: &Location, alpha: f64) -> Result<Option<Moment>, EventError> {
    let result = moment_of_depression(date as f64 + 0.25, loc, alpha, true)?;
    Ok(result.map(|t| standard_from_local(t, loc)))
}

/// Standard time in the evening of `date` when the sun is `alpha` degrees
/// below the horizon.
pub fn dusk(date: FixedDate, loc: &Location, alpha: f64) -> Result<Option<Moment>, EventError> {
    let result = moment_of_depression(date as f64 + 0.75, loc, alpha, false)?;
    Ok(result.map(|t| standard_from_local(t, loc)))
}

/// Standard time of sunrise on `date`, or `None` if the sun does not rise.
pub fn sunrise(date: FixedDate, loc: &Location) -> Result<Option<Moment>, EventError> {
    dawn(date, loc, refraction(loc) + 16.0 / 60.0)
}

/// Standard time of sunset on `date`, or `None` if the sun does not set.
pub fn sunset(date: FixedDate, loc: &Location) -> Result<Option<Moment>, EventError> {
    dusk(date, loc, refraction(loc) + 16.0 / 60.0)
}

/// Standard time of `event` on `date` under the horizon model `config`.
pub fn solar_event(
    event: SolarEvent,
    date: FixedDate,
    loc: &Location,
    config: &RiseSetConfig,
) -> Result<Option<Moment>, EventError> {
    config.validate().map_err(EventError::InvalidConfig)?;
    loc.validate()?;
    let alpha = event.depression_deg(config, loc.elevation_m);
    if event.is_morning() {
        dawn(date, loc, alpha)
    } else {
        dusk(date, loc, alpha)
    }
}

/// All eight sun events of `date`, in [`SolarEvent::ALL`] order.
pub fn all_solar_events(
    date: FixedDate,
    loc: &Location,
    config: &RiseSetConfig,
) -> Result<Vec<(SolarEvent, Option<Moment>)>, EventError> {
    SolarEvent::ALL
        .iter()
        .map(|&event| Ok((event, solar_event(event, date, loc, config)?)))
        .collect()
}
