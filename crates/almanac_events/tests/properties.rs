use almanac_ephem::{NEW, lunar_phase};
use almanac_events::{dawn, dusk, moment_of_depression, new_moon_at_or_after, sunrise, sunset};
use almanac_time::{Location, fixed_from_gregorian};
use proptest::prelude::*;

fn mid_latitude() -> impl Strategy<Value = Location> {
    (-55.0f64..55.0, -180.0f64..180.0).prop_map(|(lat, lon)| {
        Location::new(lat, lon, 0.0, (lon / 15.0).round() / 24.0)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn sunrise_precedes_sunset(loc in mid_latitude(), offset in 0i64..3650) {
        let date = fixed_from_gregorian(2020, 1, 1) + offset;
        let rise = sunrise(date, &loc).unwrap();
        let set = sunset(date, &loc).unwrap();
        prop_assert!(rise.is_some() && set.is_some());
        prop_assert!(rise.unwrap() < set.unwrap());
    }

    #[test]
    fn twilight_brackets_sunrise(loc in mid_latitude(), offset in 0i64..3650) {
        let date = fixed_from_gregorian(2020, 1, 1) + offset;
        let rise = sunrise(date, &loc).unwrap().unwrap();
        let set = sunset(date, &loc).unwrap().unwrap();
        let civil_dawn = dawn(date, &loc, 6.0).unwrap().unwrap();
        let civil_dusk = dusk(date, &loc, 6.0).unwrap().unwrap();
        prop_assert!(civil_dawn < rise);
        prop_assert!(set < civil_dusk);
    }

    #[test]
    fn depression_is_stable_under_restart(loc in mid_latitude(), offset in 0i64..3650) {
        let date = fixed_from_gregorian(2020, 1, 1) + offset;
        let first = moment_of_depression(date as f64 + 0.25, &loc, 6.0, true).unwrap().unwrap();
        let second = moment_of_depression(first, &loc, 6.0, true).unwrap().unwrap();
        prop_assert!((first - second).abs() < 1.0 / 1440.0, "{first} vs {second}");
    }

    #[test]
    fn new_moon_has_zero_phase(days in 0.0f64..36500.0) {
        let t = fixed_from_gregorian(1950, 1, 1) as f64 + days;
        let nm = new_moon_at_or_after(t).unwrap();
        let phase = lunar_phase(nm);
        let distance = phase.min(360.0 - phase);
        prop_assert!((distance - NEW).abs() < 0.1, "phase {phase}");
    }
}
