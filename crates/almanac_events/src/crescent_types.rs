//! Crescent visibility criteria.

use std::fmt;
use std::str::FromStr;

/// Test used to decide whether the new crescent can be seen on an evening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CrescentCriterion {
    /// Shaukat: at dusk (sun 4.5° down), phase below 90°, arc of light
    /// between 10.6° and 90°, and lunar altitude above 4.1°.
    #[default]
    Shaukat,
    /// Yallop's q-test at the best time (4/9 of the sunset-to-moonset lag
    /// after sunset), visible when q exceeds [`YALLOP_THRESHOLD`].
    Yallop,
}

/// Lowest Yallop q value counted as visible: the lower bound of Yallop's
/// category C ("may need optical aid to find the crescent"), from NAO
/// Technical Note 69 (1997). The other boundaries are +0.216 (A/B), -0.014
/// (B/C) and -0.232 (D/E).
pub const YALLOP_THRESHOLD: f64 = -0.160;

impl CrescentCriterion {
    pub fn name(self) -> &'static str {
        match self {
            Self::Shaukat => "shaukat",
            Self::Yallop => "yallop",
        }
    }
}

impl fmt::Display for CrescentCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CrescentCriterion {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "shaukat" => Ok(Self::Shaukat),
            "yallop" => Ok(Self::Yallop),
            _ => Err("expected `shaukat` or `yallop`"),
        }
    }
}
