//! Types for sunrise, sunset and twilight computation.

use almanac_ephem::horizon_dip;

/// Sun events of a day, including the twilight variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarEvent {
    /// Upper limb of the sun at the apparent horizon.
    Sunrise,
    /// Upper limb of the sun disappears below the apparent horizon.
    Sunset,
    /// Sun center 6° below the horizon, morning.
    CivilDawn,
    /// Sun center 6° below the horizon, evening.
    CivilDusk,
    /// Sun center 12° below the horizon, morning.
    NauticalDawn,
    NauticalDusk,
    /// Sun center 18° below the horizon, morning.
    AstronomicalDawn,
    AstronomicalDusk,
}

impl SolarEvent {
    /// All events in chronological order for a normal day.
    pub const ALL: [SolarEvent; 8] = [
        SolarEvent::AstronomicalDawn,
        SolarEvent::NauticalDawn,
        SolarEvent::CivilDawn,
        SolarEvent::Sunrise,
        SolarEvent::Sunset,
        SolarEvent::CivilDusk,
        SolarEvent::NauticalDusk,
        SolarEvent::AstronomicalDusk,
    ];

    /// Depression of the sun center below the horizon, in degrees.
    ///
    /// Sunrise and sunset depend on the observer: refraction, semi-diameter
    /// and horizon dip come from `config` and `elevation_m`.
    pub fn depression_deg(self, config: &RiseSetConfig, elevation_m: f64) -> f64 {
        match self {
            Self::Sunrise | Self::Sunset => config.horizon_depression_deg(elevation_m),
            Self::CivilDawn | Self::CivilDusk => 6.0,
            Self::NauticalDawn | Self::NauticalDusk => 12.0,
            Self::AstronomicalDawn | Self::AstronomicalDusk => 18.0,
        }
    }

    pub fn is_morning(self) -> bool {
        matches!(
            self,
            Self::Sunrise | Self::CivilDawn | Self::NauticalDawn | Self::AstronomicalDawn
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Sunrise => "sunrise",
            Self::Sunset => "sunset",
            Self::CivilDawn => "civil dawn",
            Self::CivilDusk => "civil dusk",
            Self::NauticalDawn => "nautical dawn",
            Self::NauticalDusk => "nautical dusk",
            Self::AstronomicalDawn => "astronomical dawn",
            Self::AstronomicalDusk => "astronomical dusk",
        }
    }
}

/// Horizon model for sunrise and sunset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiseSetConfig {
    /// Atmospheric refraction at the horizon in arcminutes. Default: 34.
    pub refraction_arcmin: f64,
    /// Solar semi-diameter in arcminutes. Default: 16.
    pub semidiameter_arcmin: f64,
    /// Whether to add the dip of the horizon, `arccos(R/(R+h))`, and the
    /// elevation refraction term `19″·√h` for an observer at elevation `h`.
    /// Default: true.
    pub altitude_correction: bool,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        Self {
            refraction_arcmin: 34.0,
            semidiameter_arcmin: 16.0,
            altitude_correction: true,
        }
    }
}

impl RiseSetConfig {
    /// Total depression of the sun center at sunrise and sunset, in degrees.
    pub fn horizon_depression_deg(&self, elevation_m: f64) -> f64 {
        let base = (self.refraction_arcmin + self.semidiameter_arcmin) / 60.0;
        if self.altitude_correction {
            let h = elevation_m.max(0.0);
            base + horizon_dip(h) + 19.0 / 3600.0 * h.sqrt()
        } else {
            base
        }
    }

    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if !self.refraction_arcmin.is_finite() || self.refraction_arcmin < 0.0 {
            return Err("refraction_arcmin must be finite and non-negative");
        }
        if !self.semidiameter_arcmin.is_finite() || self.semidiameter_arcmin < 0.0 {
            return Err("semidiameter_arcmin must be finite and non-negative");
        }
        Ok(())
    }
}
