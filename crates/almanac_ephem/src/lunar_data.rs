//! Periodic-term tables for the lunar series.
//!
//! Source: Meeus, *Astronomical Algorithms*, 2nd ed., tables 47.A, 47.B
//! and chapter 49, as tabulated in Reingold & Dershowitz,
//! *Calendrical Calculations*, 3rd ed., §14.5.

/// Longitude and distance terms.
///
/// Each row: `[D, M, M', F, Σl, Σr]`. Σl is in 1e-6 degrees, Σr in meters.
/// Terms whose multiple of M is ±1 or ±2 are scaled by the eccentricity
/// factor E or E² at evaluation time.
#[rustfmt::skip]
pub(crate) static LONGITUDE_DISTANCE_TERMS: [[i64; 6]; 60] = [
    //  D   M   M'   F         Σl          Σr
    [  0,  0,   1,   0,    6288774,   -20905355],
    [  2,  0,  -1,   0,    1274027,    -3699111],
    [  2,  0,   0,   0,     658314,    -2955968],
    [  0,  0,   2,   0,     213618,     -569925],
    [  0,  1,   0,   0,    -185116,       48888],
    [  0,  0,   0,   2,    -114332,       -3149],
    [  2,  0,  -2,   0,      58793,      246158],
    [  2, -1,  -1,   0,      57066,     -152138],
    [  2,  0,   1,   0,      53322,     -170733],
    [  2, -1,   0,   0,      45758,     -204586],
    [  0,  1,  -1,   0,     -40923,     -129620],
    [  1,  0,   0,   0,     -34720,      108743],
    [  0,  1,   1,   0,     -30383,      104755],
    [  2,  0,   0,  -2,      15327,       10321],
    [  0,  0,   1,   2,     -12528,           0],
    [  0,  0,   1,  -2,      10980,       79661],
    [  4,  0,  -1,   0,      10675,      -34782],
    [  0,  0,   3,   0,      10034,      -23210],
    [  4,  0,  -2,   0,       8548,      -21636],
    [  2,  1,  -1,   0,      -7888,       24208],
    [  2,  1,   0,   0,      -6766,       30824],
    [  1,  0,  -1,   0,      -5163,       -8379],
    [  1,  1,   0,   0,       4987,      -16675],
    [  2, -1,   1,   0,       4036,      -12831],
    [  2,  0,   2,   0,       3994,      -10445],
    [  4,  0,   0,   0,       3861,      -11650],
    [  2,  0,  -3,   0,       3665,       14403],
    [  0,  1,  -2,   0,      -2689,       -7003],
    [  2,  0,  -1,   2,      -2602,           0],
    [  2, -1,  -2,   0,       2390,       10056],
    [  1,  0,   1,   0,      -2348,        6322],
    [  2, -2,   0,   0,       2236,       -9884],
    [  0,  1,   2,   0,      -2120,        5751],
    [  0,  2,   0,   0,      -2069,           0],
    [  2, -2,  -1,   0,       2048,       -4950],
    [  2,  0,   1,  -2,      -1773,        4130],
    [  2,  0,   0,   2,      -1595,           0],
    [  4, -1,  -1,   0,       1215,       -3958],
    [  0,  0,   2,   2,      -1110,           0],
    [  3,  0,  -1,   0,       -892,        3258],
    [  2,  1,   1,   0,       -810,        2616],
    [  4, -1,  -2,   0,        759,       -1897],
    [  0,  2,  -1,   0,       -713,       -2117],
    [  2,  2,  -1,   0,       -700,        2354],
    [  2,  1,  -2,   0,        691,           0],
    [  2, -1,   0,  -2,        596,           0],
    [  4,  0,   1,   0,        549,       -1423],
    [  0,  0,   4,   0,        537,       -1117],
    [  4, -1,   0,   0,        520,       -1571],
    [  1,  0,  -2,   0,       -487,       -1739],
    [  2,  1,   0,  -2,       -399,           0],
    [  0,  0,   2,  -2,       -381,       -4421],
    [  1,  1,   1,   0,        351,           0],
    [  3,  0,  -2,   0,       -340,           0],
    [  4,  0,  -3,   0,        330,           0],
    [  2, -1,   2,   0,        327,           0],
    [  0,  2,   1,   0,       -323,        1165],
    [  1,  1,  -1,   0,        299,           0],
    [  2,  0,   3,   0,        294,           0],
    [  2,  0,  -1,  -2,          0,        8752],
];

/// Latitude terms.
///
/// Each row: `[D, M, M', F, Σb]`, Σb in 1e-6 degrees.
#[rustfmt::skip]
pub(crate) static LATITUDE_TERMS: [[i64; 5]; 60] = [
    //  D   M   M'   F         Σb
    [  0,  0,   0,   1,    5128122],
    [  0,  0,   1,   1,     280602],
    [  0,  0,   1,  -1,     277693],
    [  2,  0,   0,  -1,     173237],
    [  2,  0,  -1,   1,      55413],
    [  2,  0,  -1,  -1,      46271],
    [  2,  0,   0,   1,      32573],
    [  0,  0,   2,   1,      17198],
    [  2,  0,   1,  -1,       9266],
    [  0,  0,   2,  -1,       8822],
    [  2, -1,   0,  -1,       8216],
    [  2,  0,  -2,  -1,       4324],
    [  2,  0,   1,   1,       4200],
    [  2,  1,   0,  -1,      -3359],
    [  2, -1,  -1,   1,       2463],
    [  2, -1,   0,   1,       2211],
    [  2, -1,  -1,  -1,       2065],
    [  0,  1,  -1,  -1,      -1870],
    [  4,  0,  -1,  -1,       1828],
    [  0,  1,   0,   1,      -1794],
    [  0,  0,   0,   3,      -1749],
    [  0,  1,  -1,   1,      -1565],
    [  1,  0,   0,   1,      -1491],
    [  0,  1,   1,   1,      -1475],
    [  0,  1,   1,  -1,      -1410],
    [  0,  1,   0,  -1,      -1344],
    [  1,  0,   0,  -1,      -1335],
    [  0,  0,   3,   1,       1107],
    [  4,  0,   0,  -1,       1021],
    [  4,  0,  -1,   1,        833],
    [  0,  0,   1,  -3,        777],
    [  4,  0,  -2,   1,        671],
    [  2,  0,   0,  -3,        607],
    [  2,  0,   2,  -1,        596],
    [  2, -1,   1,  -1,        491],
    [  2,  0,  -2,   1,       -451],
    [  0,  0,   3,  -1,        439],
    [  2,  0,   2,   1,        422],
    [  2,  0,  -3,  -1,        421],
    [  2,  1,  -1,   1,       -366],
    [  2,  1,   0,   1,       -351],
    [  4,  0,   0,   1,        331],
    [  2, -1,   1,   1,        315],
    [  2, -2,   0,  -1,        302],
    [  0,  0,   1,   3,       -283],
    [  2,  1,   1,  -1,       -229],
    [  1,  1,   0,  -1,        223],
    [  1,  1,   0,   1,        223],
    [  0,  1,  -2,  -1,       -220],
    [  2,  1,  -1,  -1,       -220],
    [  1,  0,   1,   1,       -185],
    [  2, -1,  -2,  -1,        181],
    [  0,  1,   2,   1,       -177],
    [  4,  0,  -2,  -1,        176],
    [  4, -1,  -1,  -1,        166],
    [  1,  0,   1,  -1,       -164],
    [  4,  0,   1,  -1,        132],
    [  1,  0,  -1,  -1,       -119],
    [  4, -1,   0,  -1,        115],
    [  2, -2,   0,   1,        107],
];

/// Periodic corrections to the mean new moon.
///
/// Each row: `[v, w, x, y, z]`: amplitude v in days, eccentricity power w,
/// and multiples x, y, z of the solar anomaly, lunar anomaly and moon
/// argument.
#[rustfmt::skip]
pub(crate) static NEW_MOON_TERMS: [[f64; 5]; 24] = [
    //     v      w     x     y     z
    [ -0.40720,  0.0,  0.0,  1.0,  0.0],
    [  0.17241,  1.0,  1.0,  0.0,  0.0],
    [  0.01608,  0.0,  0.0,  2.0,  0.0],
    [  0.01039,  0.0,  0.0,  0.0,  2.0],
    [  0.00739,  1.0, -1.0,  1.0,  0.0],
    [ -0.00514,  1.0,  1.0,  1.0,  0.0],
    [  0.00208,  2.0,  2.0,  0.0,  0.0],
    [ -0.00111,  0.0,  0.0,  1.0, -2.0],
    [ -0.00057,  0.0,  0.0,  1.0,  2.0],
    [  0.00056,  1.0,  1.0,  2.0,  0.0],
    [ -0.00042,  0.0,  0.0,  3.0,  0.0],
    [  0.00042,  1.0,  1.0,  0.0,  2.0],
    [  0.00038,  1.0,  1.0,  0.0, -2.0],
    [ -0.00024,  1.0, -1.0,  2.0,  0.0],
    [ -0.00007,  0.0,  2.0,  1.0,  0.0],
    [  0.00004,  0.0,  0.0,  2.0, -2.0],
    [  0.00004,  0.0,  3.0,  0.0,  0.0],
    [  0.00003,  0.0,  1.0,  1.0, -2.0],
    [  0.00003,  0.0,  0.0,  2.0,  2.0],
    [ -0.00003,  0.0,  1.0,  1.0,  2.0],
    [  0.00003,  0.0, -1.0,  1.0,  2.0],
    [ -0.00002,  0.0, -1.0,  1.0, -2.0],
    [ -0.00002,  0.0,  1.0,  3.0,  0.0],
    [  0.00002,  0.0,  0.0,  4.0,  0.0],
];

/// Planetary perturbations of the new moon.
///
/// Each row: `[i, j, l]`: the term is `l · sin(i + j·k)` for lunation k.
#[rustfmt::skip]
pub(crate) static NEW_MOON_ADDITIONAL_TERMS: [[f64; 3]; 13] = [
    //     i          j          l
    [251.88,   0.016321, 0.000165],
    [251.83,  26.651886, 0.000164],
    [349.42,  36.412478, 0.000126],
    [ 84.66,  18.206239, 0.000110],
    [141.74,  53.303771, 0.000062],
    [207.14,   2.453732, 0.000060],
    [154.84,   7.306860, 0.000056],
    [ 34.52,  27.261239, 0.000047],
    [207.19,   0.121824, 0.000042],
    [291.34,   1.844379, 0.000040],
    [161.72,  24.198154, 0.000037],
    [239.56,  25.513099, 0.000035],
    [331.55,   3.592518, 0.000023],
];

#[cfg(test)]
mod tests {
    use super::*;

    fn column_sum<const N: usize>(table: &[[i64; N]], col: usize) -> i64 {
        table.iter().map(|row| row[col]).sum()
    }

    #[test]
    fn longitude_distance_checksums() {
        let t = &LONGITUDE_DISTANCE_TERMS;
        assert_eq!([0, 1, 2, 3].map(|c| column_sum(t, c)), [97, 8, -2, -4]);
        assert_eq!(column_sum(t, 4), 8_279_751);
        assert_eq!(column_sum(t, 5), -28_257_908);
        let abs_l: i64 = t.iter().map(|r| r[4].abs()).sum();
        assert_eq!(abs_l, 9_198_091);
    }

    #[test]
    fn latitude_checksums() {
        let t = &LATITUDE_TERMS;
        assert_eq!([0, 1, 2, 3].map(|c| column_sum(t, c)), [95, 2, 3, -6]);
        assert_eq!(column_sum(t, 4), 6_044_003);
        let abs_b: i64 = t.iter().map(|r| r[4].abs()).sum();
        assert_eq!(abs_b, 6_084_317);
    }

    #[test]
    fn eccentricity_powers_match_solar_multiples() {
        for row in &NEW_MOON_TERMS {
            assert!(row[1] == 0.0 || row[1] == row[2].abs(), "{row:?}");
        }
        for row in &LONGITUDE_DISTANCE_TERMS {
            assert!(row[1].abs() <= 2, "{row:?}");
        }
    }

    #[test]
    fn new_moon_checksums() {
        let v: f64 = NEW_MOON_TERMS.iter().map(|r| r[0]).sum();
        assert!((v + 0.20492).abs() < 1e-9, "v sum {v}");
        let mult: [f64; 4] = [1, 2, 3, 4].map(|c| NEW_MOON_TERMS.iter().map(|r| r[c]).sum());
        assert_eq!(mult, [9.0, 11.0, 30.0, 2.0]);
        let i: f64 = NEW_MOON_ADDITIONAL_TERMS.iter().map(|r| r[0]).sum();
        let j: f64 = NEW_MOON_ADDITIONAL_TERMS.iter().map(|r| r[1]).sum();
        let l: f64 = NEW_MOON_ADDITIONAL_TERMS.iter().map(|r| r[2]).sum();
        assert!((i - 2707.39).abs() < 1e-9, "i sum {i}");
        assert!((j - 226.8825).abs() < 1e-9, "j sum {j}");
        assert!((l - 0.000967).abs() < 1e-12, "l sum {l}");
    }
}
