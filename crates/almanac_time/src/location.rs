//! Observer locations and the named locations used by calendar code.

use crate::error::TimeError;

/// Geographic position of an observer together with its civil time zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Elevation above mean sea level in meters.
    pub elevation_m: f64,
    /// Offset of standard time from universal time, as a fraction of a day.
    pub zone: f64,
}

impl Location {
    /// Build a location without validation. Intended for constants.
    pub const fn new(latitude_deg: f64, longitude_deg: f64, elevation_m: f64, zone: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            elevation_m,
            zone,
        }
    }

    /// Build a location, rejecting non-finite or out-of-range fields.
    pub fn try_new(
        latitude_deg: f64,
        longitude_deg: f64,
        elevation_m: f64,
        zone: f64,
    ) -> Result<Self, TimeError> {
        let loc = Self::new(latitude_deg, longitude_deg, elevation_m, zone);
        loc.validate()?;
        Ok(loc)
    }

    /// Build a location with the zone given in hours.
    pub fn with_zone_hours(
        latitude_deg: f64,
        longitude_deg: f64,
        elevation_m: f64,
        zone_hours: f64,
    ) -> Result<Self, TimeError> {
        Self::try_new(latitude_deg, longitude_deg, elevation_m, zone_hours / 24.0)
    }

    pub fn validate(&self) -> Result<(), TimeError> {
        if !(self.latitude_deg.is_finite()
            && self.longitude_deg.is_finite()
            && self.elevation_m.is_finite()
            && self.zone.is_finite())
        {
            return Err(TimeError::InvalidLocation("fields must be finite"));
        }
        if !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(TimeError::InvalidLocation("latitude must be in [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(TimeError::InvalidLocation("longitude must be in [-180, 180]"));
        }
        if !(-1.0..=1.0).contains(&self.zone) {
            return Err(TimeError::InvalidLocation("zone must be within one day"));
        }
        Ok(())
    }

    pub fn zone_hours(&self) -> f64 {
        self.zone * 24.0
    }

    pub fn zone_minutes(&self) -> f64 {
        self.zone * 24.0 * 60.0
    }

    pub fn zone_seconds(&self) -> f64 {
        self.zone * 24.0 * 3600.0
    }
}

/// Urbana, Illinois.
pub const URBANA: Location = Location::new(40.1, -88.2, 225.0, -6.0 / 24.0);

/// Royal Observatory, Greenwich.
pub const GREENWICH: Location = Location::new(51.4777815, 0.0, 46.9, 0.0);

/// Mecca.
pub const MECCA: Location = Location::new(
    21.0 + 25.0 / 60.0 + 24.0 / 3600.0,
    39.0 + 49.0 / 60.0 + 24.0 / 3600.0,
    298.0,
    3.0 / 24.0,
);

/// Jerusalem.
pub const JERUSALEM: Location = Location::new(31.78, 35.24, 740.0, 2.0 / 24.0);

/// Beijing, with the modern zone of UTC+8.
pub const BEIJING: Location = Location::new(
    39.0 + 55.0 / 60.0,
    116.0 + 25.0 / 60.0,
    43.5,
    8.0 / 24.0,
);

/// Tehran.
pub const TEHRAN: Location = Location::new(35.68, 51.42, 1100.0, 3.5 / 24.0);

/// Acre.
pub const ACRE: Location = Location::new(32.94, 35.09, 22.0, 2.0 / 24.0);

/// Paris Observatory.
pub const PARIS: Location = Location::new(
    48.0 + 50.0 / 60.0 + 11.0 / 3600.0,
    2.0 + 20.0 / 60.0 + 15.0 / 3600.0,
    27.0,
    1.0 / 24.0,
);

/// Look up a named location, case-insensitively.
pub fn named_location(name: &str) -> Option<Location> {
    let loc = match name.to_ascii_lowercase().as_str() {
        "urbana" => URBANA,
        "greenwich" => GREENWICH,
        "mecca" => MECCA,
        "jerusalem" => JERUSALEM,
        "beijing" => BEIJING,
        "tehran" => TEHRAN,
        "acre" => ACRE,
        "paris" => PARIS,
        _ => return None,
    };
    Some(loc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_locations_are_valid() {
        for loc in [URBANA, GREENWICH, MECCA, JERUSALEM, BEIJING, TEHRAN, ACRE, PARIS] {
            assert!(loc.validate().is_ok(), "{loc:?}");
        }
    }

    #[test]
    fn zone_units() {
        assert!((TEHRAN.zone_hours() - 3.5).abs() < 1e-12);
        assert!((TEHRAN.zone_minutes() - 210.0).abs() < 1e-9);
        assert!((URBANA.zone_seconds() + 21600.0).abs() < 1e-9);
    }

    #[test]
    fn mecca_sexagesimal() {
        assert!((MECCA.latitude_deg - 21.423_333_333).abs() < 1e-8);
        assert!((MECCA.longitude_deg - 39.823_333_333).abs() < 1e-8);
    }

    #[test]
    fn rejects_bad_fields() {
        assert_eq!(
            Location::try_new(91.0, 0.0, 0.0, 0.0),
            Err(TimeError::InvalidLocation("latitude must be in [-90, 90]"))
        );
        assert!(Location::try_new(0.0, 181.0, 0.0, 0.0).is_err());
        assert!(Location::try_new(0.0, 0.0, f64::NAN, 0.0).is_err());
        assert!(Location::with_zone_hours(0.0, 0.0, 0.0, 25.0).is_err());
        assert!(Location::with_zone_hours(10.0, 20.0, 5.0, 1.0).is_ok());
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(named_location("Jerusalem"), Some(JERUSALEM));
        assert_eq!(named_location("atlantis"), None);
    }
}
