//! Visibility of the new crescent and the search for its first evening
//! (phasis).
//!
//! A `date` here names the day that begins at the evening sighting: the
//! crescent is looked for at dusk of `date - 1`.

use almanac_ephem::{
    FIRST_QUARTER, MEAN_SYNODIC_MONTH, NEW, arc_of_light, lunar_altitude, lunar_phase,
    lunar_semi_diameter, solar_altitude,
};
use almanac_math::{cosine_degrees, poly, try_next_of};
use almanac_time::{FixedDate, Location, Moment, universal_from_standard};
use tracing::{debug, trace};

use crate::crescent_types::{CrescentCriterion, YALLOP_THRESHOLD};
use crate::error::EventError;
use crate::moonrise::moonset;
use crate::riseset::{dusk, sunset};

/// Solar depression at which the Shaukat test is applied, in degrees.
const SHAUKAT_DEPRESSION_DEG: f64 = 4.5;

/// Whether the crescent is visible on the eve of `date` at `loc` by the
/// default (Shaukat) criterion.
pub fn visible_crescent(date: FixedDate, loc: &Location) -> Result<bool, EventError> {
    visible_crescent_with(CrescentCriterion::Shaukat, date, loc)
}

/// Whether the crescent is visible on the eve of `date` by `criterion`.
pub fn visible_crescent_with(
    criterion: CrescentCriterion,
    date: FixedDate,
    loc: &Location,
) -> Result<bool, EventError> {
    match criterion {
        CrescentCriterion::Shaukat => shaukat(date, loc),
        CrescentCriterion::Yallop => yallop(date, loc),
    }
}

fn shaukat(date: FixedDate, loc: &Location) -> Result<bool, EventError> {
    let dark = dusk(date - 1, loc, SHAUKAT_DEPRESSION_DEG)?;
    let best = dark.unwrap_or(date as f64);
    let t = universal_from_standard(best, loc);
    let phase = lunar_phase(t);
    let altitude = lunar_altitude(t, loc);
    let arcl = arc_of_light(t);
    trace!(date, phase, altitude, arcl, "shaukat");
    Ok(NEW < phase
        && phase < FIRST_QUARTER
        && (10.6..=90.0).contains(&arcl)
        && altitude > 4.1)
}

fn yallop(date: FixedDate, loc: &Location) -> Result<bool, EventError> {
    let best = match (sunset(date - 1, loc)?, moonset(date - 1, loc)?) {
        (Some(sun), Some(moon)) => (5.0 * sun + 4.0 * moon) / 9.0,
        _ => date as f64,
    };
    let t = universal_from_standard(best, loc);
    let phase = lunar_phase(t);
    let q = yallop_q(t, loc);
    trace!(date, phase, q, "yallop");
    Ok(NEW < phase && phase < FIRST_QUARTER && q > YALLOP_THRESHOLD)
}

/// Yallop's q value at universal moment `t`.
///
/// `q = (ARCV - f(W)) / 10` where ARCV is the moon's altitude above the sun
/// and W the crescent width in arcminutes.
pub fn yallop_q(t: Moment, loc: &Location) -> f64 {
    let semi_diameter_arcmin = 60.0 * lunar_semi_diameter(t, loc);
    let width = semi_diameter_arcmin * (1.0 - cosine_degrees(arc_of_light(t)));
    let q1 = poly(width, &[11.8371, -6.3226, 0.7319, -0.1018]);
    let arc_of_vision = lunar_altitude(t, loc) - solar_altitude(t, loc);
    (arc_of_vision - q1) / 10.0
}

/// Day near `date` on which the last new moon was, by the mean motion
/// from the current phase.
fn mean_new_moon_date(date: FixedDate) -> FixedDate {
    let age = lunar_phase(date as f64 + 1.0) / 360.0 * MEAN_SYNODIC_MONTH;
    date - age.floor() as FixedDate
}

/// Last day on or before `date` that begins with a visible crescent.
pub fn phasis_on_or_before(date: FixedDate, loc: &Location) -> Result<FixedDate, EventError> {
    phasis_on_or_before_with(CrescentCriterion::Shaukat, date, loc)
}

/// First day on or after `date` that begins with a visible crescent.
pub fn phasis_on_or_after(date: FixedDate, loc: &Location) -> Result<FixedDate, EventError> {
    phasis_on_or_after_with(CrescentCriterion::Shaukat, date, loc)
}

pub fn phasis_on_or_before_with(
    criterion: CrescentCriterion,
    date: FixedDate,
    loc: &Location,
) -> Result<FixedDate, EventError> {
    loc.validate()?;
    let mean = mean_new_moon_date(date);
    let tau = if date - mean <= 3 && !visible_crescent_with(criterion, date, loc)? {
        mean - 30
    } else {
        mean - 2
    };
    debug!(date, mean, tau, "phasis_on_or_before start");
    try_next_of(tau, |d| visible_crescent_with(criterion, d, loc))
}

pub fn phasis_on_or_after_with(
    criterion: CrescentCriterion,
    date: FixedDate,
    loc: &Location,
) -> Result<FixedDate, EventError> {
    loc.validate()?;
    let mean = mean_new_moon_date(date);
    let tau = if (0..=3).contains(&(date - mean))
        && !visible_crescent_with(criterion, date - 1, loc)?
    {
        date
    } else {
        mean + 29
    };
    debug!(date, mean, tau, "phasis_on_or_after start");
    try_next_of(tau, |d| visible_crescent_with(criterion, d, loc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_time::{MECCA, fixed_from_gregorian};

    #[test]
    fn shaukat_march_2024() {
        let day = |d| fixed_from_gregorian(2024, 3, d);
        for d in [9, 10, 11] {
            assert!(!visible_crescent(day(d), &MECCA).unwrap(), "Mar {d}");
        }
        for d in [12, 13] {
            assert!(visible_crescent(day(d), &MECCA).unwrap(), "Mar {d}");
        }
    }

    #[test]
    fn yallop_march_2024() {
        let day = |d| fixed_from_gregorian(2024, 3, d);
        let yallop = CrescentCriterion::Yallop;
        assert!(!visible_crescent_with(yallop, day(11), &MECCA).unwrap());
        assert!(visible_crescent_with(yallop, day(12), &MECCA).unwrap());
    }

    #[test]
    fn yallop_q_grows_with_age() {
        let eve = |d| {
            let ss = sunset(fixed_from_gregorian(2024, 3, d), &MECCA).unwrap().unwrap();
            universal_from_standard(ss, &MECCA)
        };
        assert!(yallop_q(eve(10), &MECCA) < yallop_q(eve(11), &MECCA));
    }

    #[test]
    fn phasis_is_a_visible_day() {
        let d = phasis_on_or_after(fixed_from_gregorian(2024, 3, 5), &MECCA).unwrap();
        assert!(visible_crescent(d, &MECCA).unwrap());
        assert!(!visible_crescent(d - 1, &MECCA).unwrap());
    }
}
