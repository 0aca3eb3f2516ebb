//! Apparent (sundial) time and the moments of true noon and midnight.
//!
//! The equation of time is evaluated once per conversion, at the universal
//! moment corresponding to the input read as local mean time. It changes
//! slowly enough that no iteration is needed.

use almanac_time::{
    FixedDate, Location, Moment, local_from_universal, standard_from_local, universal_from_local,
};

use crate::solar::equation_of_time;

pub fn apparent_from_local(t: Moment, loc: &Location) -> Moment {
    t + equation_of_time(universal_from_local(t, loc))
}

pub fn local_from_apparent(t: Moment, loc: &Location) -> Moment {
    t - equation_of_time(universal_from_local(t, loc))
}

pub fn apparent_from_universal(t: Moment, loc: &Location) -> Moment {
    apparent_from_local(local_from_universal(t, loc), loc)
}

pub fn universal_from_apparent(t: Moment, loc: &Location) -> Moment {
    universal_from_local(local_from_apparent(t, loc), loc)
}

/// Standard time at which a sundial at `loc` reads `t`.
pub fn standard_from_sundial(t: Moment, loc: &Location) -> Moment {
    standard_from_local(local_from_apparent(t, loc), loc)
}

/// Standard time of true (apparent) midnight at the start of `date`.
pub fn midnight(date: FixedDate, loc: &Location) -> Moment {
    standard_from_sundial(date as f64, loc)
}

/// Standard time of true (apparent) noon on `date`.
pub fn midday(date: FixedDate, loc: &Location) -> Moment {
    standard_from_sundial(date as f64 + 0.5, loc)
}
