//! Solar and lunar ephemerides.
//!
//! This crate provides:
//! - Apparent solar longitude, nutation, aberration and obliquity
//! - Equatorial coordinates of an ecliptic point and the equation of time
//! - Apparent (sundial) time conversions, true noon and midnight
//! - Lunar longitude, latitude, distance and phase
//! - New-moon times and phase searches
//! - Observer geometry: altitude, parallax, refraction, apparent size
//!
//! Every function is pure: it reads only its arguments and fixed tables.

pub mod apparent;
mod lunar_data;
pub mod lunar;
pub mod refraction;
pub mod solar;

pub use apparent::{
    apparent_from_local, apparent_from_universal, local_from_apparent, midday, midnight,
    standard_from_sundial, universal_from_apparent,
};
pub use lunar::{
    FIRST_QUARTER, FULL, LAST_QUARTER, MEAN_SYNODIC_MONTH, NEW, arc_of_light, lunar_altitude,
    lunar_anomaly, lunar_diameter, lunar_distance, lunar_elongation, lunar_equatorial,
    lunar_latitude, lunar_longitude, lunar_parallax, lunar_phase, lunar_phase_at_or_after,
    lunar_phase_at_or_before, lunar_semi_diameter, mean_lunar_longitude, moon_node,
    new_moon_at_or_after, new_moon_before, nth_new_moon, observed_lunar_altitude,
    topocentric_lunar_altitude,
};
pub use refraction::{DIP_EARTH_RADIUS_M, HORIZON_REFRACTION_DEG, horizon_dip, refraction};
pub use solar::{
    AUTUMN, MEAN_TROPICAL_YEAR, SPRING, SUMMER, WINTER, aberration, declination, equation_of_time,
    estimate_prior_solar_longitude, nutation, obliquity, right_ascension, solar_altitude,
    solar_anomaly, solar_longitude, solar_longitude_after,
};
