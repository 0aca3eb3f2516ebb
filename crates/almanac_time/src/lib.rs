//! Time scales and observer locations for the almanac engine.
//!
//! This crate provides:
//! - The `Moment` and `FixedDate` coordinates shared by every crate
//! - Universal ↔ standard ↔ local and universal ↔ dynamical conversions
//! - The piecewise ephemeris correction (ΔT) and Julian centuries
//! - Mean sidereal time
//! - `Location` and the named locations used by calendar code
//! - The proleptic Gregorian arithmetic the engine itself depends on

pub mod error;
pub mod gregorian;
pub mod location;
pub mod scales;
pub mod sidereal;

/// Days since the fixed epoch (R.D. 1 = January 1, 1 CE, Gregorian) with
/// the time of day as the fractional part.
pub type Moment = f64;

/// An integral day count on the same epoch as [`Moment`].
pub type FixedDate = i64;

pub use error::TimeError;
pub use gregorian::{
    APRIL, DECEMBER, FRIDAY, GregorianDate, JANUARY, JULY, JUNE, MARCH, MONDAY, SATURDAY, SEPTEMBER,
    SUNDAY, THURSDAY, TUESDAY, WEDNESDAY, day_of_week_from_fixed, fixed_from_gregorian,
    gregorian_date_difference, gregorian_from_fixed, gregorian_leap_year, gregorian_new_year,
    gregorian_year_end, gregorian_year_from_fixed, iso_day_of_week, kday_after, kday_before,
    kday_on_or_after, kday_on_or_before,
};
pub use location::{
    ACRE, BEIJING, GREENWICH, JERUSALEM, Location, MECCA, PARIS, TEHRAN, URBANA, named_location,
};
pub use scales::{
    DAYS_PER_CENTURY, J2000, MOMENT_LIMIT, SECONDS_PER_DAY, dynamical_from_universal,
    ephemeris_correction, fixed_from_moment, julian_centuries, local_from_standard,
    local_from_universal, standard_from_local, standard_from_universal, time_from_moment,
    universal_from_dynamical, universal_from_local, universal_from_standard, zone_from_longitude,
};
pub use sidereal::{local_sidereal_from_moment, sidereal_from_moment};
