//! Proleptic Gregorian arithmetic on fixed day numbers.
//!
//! Fixed day 1 is Monday, January 1, 1 CE (Gregorian). Only the pieces the
//! engine and its callers need are provided: year extraction for the
//! ephemeris correction, date conversion for display, and weekday search
//! for Easter.

use std::fmt;

use almanac_math::amod_int;

use crate::FixedDate;

pub const SUNDAY: i64 = 0;
pub const MONDAY: i64 = 1;
pub const TUESDAY: i64 = 2;
pub const WEDNESDAY: i64 = 3;
pub const THURSDAY: i64 = 4;
pub const FRIDAY: i64 = 5;
pub const SATURDAY: i64 = 6;

pub const JANUARY: i64 = 1;
pub const MARCH: i64 = 3;
pub const APRIL: i64 = 4;
pub const JUNE: i64 = 6;
pub const JULY: i64 = 7;
pub const SEPTEMBER: i64 = 9;
pub const DECEMBER: i64 = 12;

/// A Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate {
    pub year: i64,
    pub month: i64,
    pub day: i64,
}

impl GregorianDate {
    pub const fn new(year: i64, month: i64, day: i64) -> Self {
        Self { year, month, day }
    }

    pub fn to_fixed(self) -> FixedDate {
        fixed_from_gregorian(self.year, self.month, self.day)
    }

    pub fn from_fixed(date: FixedDate) -> Self {
        gregorian_from_fixed(date)
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

pub fn gregorian_leap_year(year: i64) -> bool {
    year.rem_euclid(4) == 0 && !matches!(year.rem_euclid(400), 100 | 200 | 300)
}

pub fn fixed_from_gregorian(year: i64, month: i64, day: i64) -> FixedDate {
    let y = year - 1;
    let month_correction = if month <= 2 {
        0
    } else if gregorian_leap_year(year) {
        -1
    } else {
        -2
    };
    365 * y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
        + (367 * month - 362).div_euclid(12)
        + month_correction
        + day
}

pub fn gregorian_new_year(year: i64) -> FixedDate {
    fixed_from_gregorian(year, JANUARY, 1)
}

pub fn gregorian_year_end(year: i64) -> FixedDate {
    fixed_from_gregorian(year, DECEMBER, 31)
}

pub fn gregorian_year_from_fixed(date: FixedDate) -> i64 {
    let d0 = date - 1;
    let n400 = d0.div_euclid(146_097);
    let d1 = d0.rem_euclid(146_097);
    let n100 = d1.div_euclid(36_524);
    let d2 = d1.rem_euclid(36_524);
    let n4 = d2.div_euclid(1_461);
    let d3 = d2.rem_euclid(1_461);
    let n1 = d3.div_euclid(365);
    let year = 400 * n400 + 100 * n100 + 4 * n4 + n1;
    if n100 == 4 || n1 == 4 { year } else { year + 1 }
}

pub fn gregorian_from_fixed(date: FixedDate) -> GregorianDate {
    let year = gregorian_year_from_fixed(date);
    let prior_days = date - gregorian_new_year(year);
    let correction = if date < fixed_from_gregorian(year, MARCH, 1) {
        0
    } else if gregorian_leap_year(year) {
        1
    } else {
        2
    };
    let month = (12 * (prior_days + correction) + 373).div_euclid(367);
    let day = date - fixed_from_gregorian(year, month, 1) + 1;
    GregorianDate { year, month, day }
}

/// Number of days from `a` to `b`.
pub fn gregorian_date_difference(a: GregorianDate, b: GregorianDate) -> i64 {
    b.to_fixed() - a.to_fixed()
}

/// Day of week, `SUNDAY` = 0 through `SATURDAY` = 6.
pub fn day_of_week_from_fixed(date: FixedDate) -> i64 {
    date.rem_euclid(7)
}

/// ISO-style weekday number, Monday = 1 through Sunday = 7.
pub fn iso_day_of_week(date: FixedDate) -> i64 {
    amod_int(date, 7)
}

/// The `k`-day on or before `date`.
pub fn kday_on_or_before(k: i64, date: FixedDate) -> FixedDate {
    date - day_of_week_from_fixed(date - k)
}

pub fn kday_on_or_after(k: i64, date: FixedDate) -> FixedDate {
    kday_on_or_before(k, date + 6)
}

/// The `k`-day strictly after `date`.
pub fn kday_after(k: i64, date: FixedDate) -> FixedDate {
    kday_on_or_before(k, date + 7)
}

pub fn kday_before(k: i64, date: FixedDate) -> FixedDate {
    kday_on_or_before(k, date - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn epoch_is_day_one() {
        assert_eq!(fixed_from_gregorian(1, 1, 1), 1);
        assert_eq!(day_of_week_from_fixed(1), MONDAY);
    }

    #[test]
    fn known_fixed_dates() {
        assert_eq!(fixed_from_gregorian(2000, 1, 1), 730_120);
        assert_eq!(fixed_from_gregorian(1945, 11, 12), 710_347);
        assert_eq!(fixed_from_gregorian(1900, 1, 1), 693_596);
    }

    #[test]
    fn leap_rules() {
        assert!(gregorian_leap_year(2000));
        assert!(!gregorian_leap_year(1900));
        assert!(gregorian_leap_year(2024));
        assert!(!gregorian_leap_year(2023));
    }

    #[test]
    fn year_boundaries() {
        assert_eq!(gregorian_year_from_fixed(730_120), 2000);
        assert_eq!(gregorian_year_from_fixed(730_119), 1999);
        assert_eq!(gregorian_year_from_fixed(gregorian_year_end(2000)), 2000);
        assert_eq!(gregorian_year_from_fixed(0), 0);
    }

    #[test]
    fn weekday_search() {
        // 2024-03-20 is a Wednesday.
        let d = fixed_from_gregorian(2024, 3, 20);
        assert_eq!(day_of_week_from_fixed(d), WEDNESDAY);
        assert_eq!(kday_on_or_before(SUNDAY, d), fixed_from_gregorian(2024, 3, 17));
        assert_eq!(kday_after(SUNDAY, d), fixed_from_gregorian(2024, 3, 24));
        assert_eq!(kday_on_or_after(WEDNESDAY, d), d);
        assert_eq!(kday_after(WEDNESDAY, d), d + 7);
        assert_eq!(kday_before(SATURDAY, d), fixed_from_gregorian(2024, 3, 16));
        assert_eq!(iso_day_of_week(kday_on_or_before(SUNDAY, d)), 7);
    }

    #[test]
    fn date_difference_and_display() {
        let a = GregorianDate::new(2024, 2, 28);
        let b = GregorianDate::new(2024, 3, 1);
        assert_eq!(gregorian_date_difference(a, b), 2);
        assert_eq!(b.to_string(), "2024-03-01");
    }

    proptest! {
        #[test]
        fn fixed_round_trip(date in -800_000i64..1_500_000) {
            let g = gregorian_from_fixed(date);
            prop_assert_eq!(g.to_fixed(), date);
            prop_assert!((1..=12).contains(&g.month));
            prop_assert!((1..=31).contains(&g.day));
        }
    }
}
