//! Equinoxes and solstices.

use almanac_ephem::{AUTUMN, SPRING, SUMMER, WINTER, solar_longitude_after};
use almanac_time::{Moment, gregorian_new_year};

use crate::error::EventError;

/// The four cardinal points of the solar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    MarchEquinox,
    JuneSolstice,
    SeptemberEquinox,
    DecemberSolstice,
}

impl Season {
    pub const ALL: [Season; 4] = [
        Season::MarchEquinox,
        Season::JuneSolstice,
        Season::SeptemberEquinox,
        Season::DecemberSolstice,
    ];

    /// Apparent solar longitude at this point, in degrees.
    pub fn solar_longitude(self) -> f64 {
        match self {
            Self::MarchEquinox => SPRING,
            Self::JuneSolstice => SUMMER,
            Self::SeptemberEquinox => AUTUMN,
            Self::DecemberSolstice => WINTER,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::MarchEquinox => "March equinox",
            Self::JuneSolstice => "June solstice",
            Self::SeptemberEquinox => "September equinox",
            Self::DecemberSolstice => "December solstice",
        }
    }
}

/// Universal moment of `season` in Gregorian `year`.
pub fn season_in_gregorian(season: Season, year: i64) -> Result<Moment, EventError> {
    let jan1 = gregorian_new_year(year) as f64;
    Ok(solar_longitude_after(season.solar_longitude(), jan1)?)
}

pub fn march_equinox(year: i64) -> Result<Moment, EventError> {
    season_in_gregorian(Season::MarchEquinox, year)
}

pub fn june_solstice(year: i64) -> Result<Moment, EventError> {
    season_in_gregorian(Season::JuneSolstice, year)
}

pub fn september_equinox(year: i64) -> Result<Moment, EventError> {
    season_in_gregorian(Season::SeptemberEquinox, year)
}

pub fn december_solstice(year: i64) -> Result<Moment, EventError> {
    season_in_gregorian(Season::DecemberSolstice, year)
}
