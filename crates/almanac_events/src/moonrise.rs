//! Moonrise and moonset.
//!
//! A first guess comes from the lunar phase and the moon's altitude at the
//! start of the day: a waxing moon rises after midday, a waning one before.
//! The guess is bracketed by a six-hour window and refined by bisection on
//! the sign of the observed altitude of the upper limb. If the window does
//! not bracket a horizon crossing, or the refined crossing lands outside
//! the day, the day is scanned hour by hour instead.

use almanac_ephem::{lunar_phase, observed_lunar_altitude};
use almanac_math::binary_search;
use almanac_time::{FixedDate, Location, Moment, standard_from_universal, universal_from_standard};
use tracing::{debug, trace};

use crate::error::EventError;

/// Half-width of the bisection window around the first guess (3 hours).
const WINDOW_HALF_WIDTH_DAYS: f64 = 0.125;

/// Bisection stops once the bracket is narrower than one minute.
const PRECISION_DAYS: f64 = 1.0 / 1440.0;

const SCAN_STEPS_PER_DAY: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Crossing {
    Rise,
    Set,
}

/// Standard time of moonrise on `date` at `loc`, or `None` if the moon
/// does not rise that day.
pub fn moonrise(date: FixedDate, loc: &Location) -> Result<Option<Moment>, EventError> {
    moon_crossing(date, loc, Crossing::Rise)
}

/// Standard time of moonset on `date` at `loc`, or `None` if the moon does
/// not set that day.
pub fn moonset(date: FixedDate, loc: &Location) -> Result<Option<Moment>, EventError> {
    moon_crossing(date, loc, Crossing::Set)
}

fn moon_crossing(
    date: FixedDate,
    loc: &Location,
    crossing: Crossing,
) -> Result<Option<Moment>, EventError> {
    loc.validate()?;
    let tee = universal_from_standard(date as f64, loc);

    // True once the crossing has happened.
    let past = |x: Moment| {
        let above = observed_lunar_altitude(x, loc) > 0.0;
        match crossing {
            Crossing::Rise => above,
            Crossing::Set => !above,
        }
    };
    let refine =
        |lo: Moment, hi: Moment| binary_search(lo, hi, |l, u| u - l < PRECISION_DAYS, past);

    if let Some(approx) = first_guess(tee, loc, crossing) {
        let lo = approx - WINDOW_HALF_WIDTH_DAYS;
        let hi = approx + WINDOW_HALF_WIDTH_DAYS;
        if !past(lo) && past(hi) {
            let root = refine(lo, hi)?;
            trace!(?crossing, root, "moon crossing refined");
            if (tee..tee + 1.0).contains(&root) {
                return Ok(Some(standard_from_universal(root, loc)));
            }
            debug!(?crossing, date, root, "refined crossing falls outside the day");
        }
    }

    // Brackets from the scan lie inside the day, so their roots do too.
    debug!(?crossing, date, "scanning the day");
    match scan_day(tee, &past) {
        Some((lo, hi)) => Ok(Some(standard_from_universal(refine(lo, hi)?, loc))),
        None => Ok(None),
    }
}

/// Heuristic moment of the crossing from the phase and the moon's altitude
/// at `tee`. There is none at the poles, where the hour-angle rate used to
/// scale the altitude vanishes.
fn first_guess(tee: Moment, loc: &Location, crossing: Crossing) -> Option<Moment> {
    let colatitude = 90.0 - loc.latitude_deg.abs();
    if colatitude <= 0.0 {
        return None;
    }
    let waning = lunar_phase(tee) > 180.0;
    let offset = observed_lunar_altitude(tee, loc) / (4.0 * colatitude);
    let approx = match (crossing, waning) {
        (Crossing::Rise, true) if offset > 0.0 => tee + 1.0 - offset,
        (Crossing::Rise, true) => tee - offset,
        (Crossing::Rise, false) => tee + 0.5 + offset,
        (Crossing::Set, true) => tee + 0.5 - offset,
        (Crossing::Set, false) if offset > 0.0 => tee + offset,
        (Crossing::Set, false) => tee + 1.0 + offset,
    };
    approx.is_finite().then_some(approx)
}

/// First hourly bracket in `[tee, tee + 1]` where `past` turns true.
fn scan_day(tee: Moment, past: &impl Fn(Moment) -> bool) -> Option<(Moment, Moment)> {
    let mut prev = tee;
    let mut prev_past = past(prev);
    for i in 1..=SCAN_STEPS_PER_DAY {
        let x = tee + i as f64 / SCAN_STEPS_PER_DAY as f64;
        let now_past = past(x);
        if !prev_past && now_past {
            return Some((prev, x));
        }
        prev = x;
        prev_past = now_past;
    }
    None
}
