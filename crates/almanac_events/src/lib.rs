//! Astronomical event calculators.
//!
//! This crate provides:
//! - Sunrise, sunset, dawn and dusk by fixed-point depression solving
//! - Equinoxes and solstices of a Gregorian year
//! - New and full moon searches
//! - Moonrise and moonset
//! - Crescent visibility (Shaukat and Yallop) and phasis search
//! - Gregorian and astronomical Easter
//!
//! Event times are returned as standard-time moments for the given
//! location unless documented as universal. An event that does not occur
//! is `Ok(None)`; `Err` is reserved for invalid input and solver failure.

pub mod crescent;
pub mod crescent_types;
pub mod easter;
pub mod error;
pub mod lunar_events;
pub mod moonrise;
pub mod riseset;
pub mod riseset_types;
pub mod seasons;

pub use crescent::{
    phasis_on_or_after, phasis_on_or_after_with, phasis_on_or_before, phasis_on_or_before_with,
    visible_crescent, visible_crescent_with, yallop_q,
};
pub use crescent_types::{CrescentCriterion, YALLOP_THRESHOLD};
pub use easter::{astronomical_easter, gregorian_easter};
pub use error::EventError;
pub use lunar_events::{
    full_moon_at_or_after, full_moon_at_or_before, new_moon_at_or_after, new_moon_before,
};
pub use moonrise::{moonrise, moonset};
pub use riseset::{
    MAX_DEPRESSION_ITERATIONS, all_solar_events, approx_moment_of_depression, dawn, dusk,
    moment_of_depression, sine_offset, solar_event, sunrise, sunset,
};
pub use riseset_types::{RiseSetConfig, SolarEvent};
pub use seasons::{
    Season, december_solstice, june_solstice, march_equinox, season_in_gregorian, september_equinox,
};
