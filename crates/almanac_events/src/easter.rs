//! Easter: the arithmetic Gregorian rule and its astronomical counterpart.

use almanac_ephem::{FULL, SPRING, apparent_from_local};
use almanac_time::{
    APRIL, FixedDate, JERUSALEM, SUNDAY, fixed_from_gregorian, gregorian_new_year, kday_after,
    local_from_universal,
};

use crate::error::EventError;

/// Gregorian Easter Sunday of `year` by the ecclesiastical tables.
pub fn gregorian_easter(year: i64) -> FixedDate {
    let century = year.div_euclid(100) + 1;
    let golden = year.rem_euclid(19);
    let shifted_epact = (14 + 11 * golden - (3 * century).div_euclid(4)
        + (5 + 8 * century).div_euclid(25))
    .rem_euclid(30);
    let adjusted_epact = if shifted_epact == 0 || (shifted_epact == 1 && golden > 10) {
        shifted_epact + 1
    } else {
        shifted_epact
    };
    let paschal_moon = fixed_from_gregorian(year, APRIL, 19) - adjusted_epact;
    kday_after(SUNDAY, paschal_moon)
}

/// Sunday after the first full moon following the March equinox, with the
/// full moon dated by apparent time at Jerusalem.
pub fn astronomical_easter(year: i64) -> Result<FixedDate, EventError> {
    let jan1 = gregorian_new_year(year) as f64;
    let equinox = almanac_ephem::solar_longitude_after(SPRING, jan1)?;
    let full_moon = almanac_ephem::lunar_phase_at_or_after(FULL, equinox)?;
    let paschal_moon =
        apparent_from_local(local_from_universal(full_moon, &JERUSALEM), &JERUSALEM).floor();
    Ok(kday_after(SUNDAY, paschal_moon as FixedDate))
}
