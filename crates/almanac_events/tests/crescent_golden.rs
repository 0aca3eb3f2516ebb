//! Crescent visibility and phasis around the new moons of March and April
//! 2024 (10 March 09:00 and 8 April 18:21 UT).

use almanac_events::{
    CrescentCriterion, phasis_on_or_after, phasis_on_or_after_with, phasis_on_or_before,
    visible_crescent, visible_crescent_with,
};
use almanac_time::{FixedDate, JERUSALEM, MECCA, fixed_from_gregorian};

fn march(d: i64) -> FixedDate {
    fixed_from_gregorian(2024, 3, d)
}

fn april(d: i64) -> FixedDate {
    fixed_from_gregorian(2024, 4, d)
}

#[test]
fn visibility_march_2024() {
    for criterion in [CrescentCriterion::Shaukat, CrescentCriterion::Yallop] {
        for loc in [MECCA, JERUSALEM] {
            for d in 8..=11 {
                let seen = visible_crescent_with(criterion, march(d), &loc).unwrap();
                assert!(!seen, "{criterion} Mar {d}");
            }
            for d in 12..=14 {
                let seen = visible_crescent_with(criterion, march(d), &loc).unwrap();
                assert!(seen, "{criterion} Mar {d}");
            }
        }
    }
}

#[test]
fn yallop_april_2024() {
    let yallop = CrescentCriterion::Yallop;
    for d in [8, 9] {
        assert!(!visible_crescent_with(yallop, april(d), &MECCA).unwrap(), "Apr {d}");
    }
    for d in [10, 11, 12] {
        assert!(visible_crescent_with(yallop, april(d), &MECCA).unwrap(), "Apr {d}");
    }
}

#[test]
fn phasis_searches() {
    for loc in [MECCA, JERUSALEM] {
        assert_eq!(phasis_on_or_after(march(5), &loc).unwrap(), march(12));
        assert_eq!(phasis_on_or_after(march(12), &loc).unwrap(), march(12));
        assert_eq!(phasis_on_or_after(march(13), &loc).unwrap(), april(10));
        assert_eq!(phasis_on_or_before(march(20), &loc).unwrap(), march(12));
        assert_eq!(phasis_on_or_before(april(5), &loc).unwrap(), march(12));
        assert_eq!(phasis_on_or_before(march(12), &loc).unwrap(), march(12));
        let february = fixed_from_gregorian(2024, 2, 12);
        assert_eq!(phasis_on_or_before(march(11), &loc).unwrap(), february);
    }
}

#[test]
fn phasis_is_first_visible_day() {
    let d = phasis_on_or_after_with(CrescentCriterion::Yallop, march(5), &MECCA).unwrap();
    assert!(visible_crescent_with(CrescentCriterion::Yallop, d, &MECCA).unwrap());
    assert!(!visible_crescent_with(CrescentCriterion::Yallop, d - 1, &MECCA).unwrap());
    assert!(visible_crescent(d, &MECCA).unwrap());
}
