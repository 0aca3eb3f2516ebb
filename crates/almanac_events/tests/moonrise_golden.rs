//! Moonrise and moonset at Jerusalem, March 2024.
//!
//! Expected values are standard times of day as day fractions.

use almanac_events::{moonrise, moonset};
use almanac_time::{JERUSALEM, fixed_from_gregorian};

const TOLERANCE: f64 = 2.0 / 1440.0;

// (day, rise, set)
#[rustfmt::skip]
static MARCH_2024: [(i64, Option<f64>, Option<f64>); 5] = [
    ( 1, Some(0.958375), Some(0.375856)),
    ( 2, None,           Some(0.399539)),
    (11, Some(0.270421), Some(0.800695)),
    (16, Some(0.402140), None),
    (25, Some(0.753013), Some(0.239342)),
];

fn check(label: &str, day: i64, got: Option<f64>, want: Option<f64>) {
    let date = fixed_from_gregorian(2024, 3, day) as f64;
    match (got, want) {
        (Some(g), Some(w)) => {
            let frac = g - date;
            assert!((frac - w).abs() < TOLERANCE, "{label} Mar {day}: {frac} vs {w}");
        }
        (None, None) => {}
        _ => panic!("{label} Mar {day}: got {got:?}, want {want:?}"),
    }
}

#[test]
fn jerusalem_march_2024() {
    for (day, rise, set) in MARCH_2024 {
        let date = fixed_from_gregorian(2024, 3, day);
        check("moonrise", day, moonrise(date, &JERUSALEM).unwrap(), rise);
        check("moonset", day, moonset(date, &JERUSALEM).unwrap(), set);
    }
}

#[test]
fn events_fall_within_their_day() {
    for day in 1..=31 {
        let date = fixed_from_gregorian(2024, 3, day);
        for t in [moonrise(date, &JERUSALEM).unwrap(), moonset(date, &JERUSALEM).unwrap()]
            .into_iter()
            .flatten()
        {
            let frac = t - date as f64;
            assert!((0.0..1.0).contains(&frac), "Mar {day}: {frac}");
        }
    }
}
