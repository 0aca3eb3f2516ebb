//! New and full moon searches.

use almanac_ephem::{FULL, lunar_phase_at_or_after, lunar_phase_at_or_before};
use almanac_time::Moment;

use crate::error::EventError;

/// Universal moment of the last new moon strictly before `t`.
pub fn new_moon_before(t: Moment) -> Result<Moment, EventError> {
    Ok(almanac_ephem::new_moon_before(t)?)
}

/// Universal moment of the first new moon at or after `t`.
pub fn new_moon_at_or_after(t: Moment) -> Result<Moment, EventError> {
    Ok(almanac_ephem::new_moon_at_or_after(t)?)
}

/// Universal moment of the first full moon at or after `t`.
pub fn full_moon_at_or_after(t: Moment) -> Result<Moment, EventError> {
    Ok(lunar_phase_at_or_after(FULL, t)?)
}

/// Universal moment of the last full moon at or before `t`.
pub fn full_moon_at_or_before(t: Moment) -> Result<Moment, EventError> {
    Ok(lunar_phase_at_or_before(FULL, t)?)
}
