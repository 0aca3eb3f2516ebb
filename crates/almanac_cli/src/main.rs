mod error;

use almanac_ephem::lunar_phase;
use almanac_events::{
    CrescentCriterion, RiseSetConfig, Season, all_solar_events, astronomical_easter,
    full_moon_at_or_after, full_moon_at_or_before, gregorian_easter, moonrise, moonset,
    new_moon_at_or_after, new_moon_before, phasis_on_or_after_with, phasis_on_or_before_with,
    season_in_gregorian,
};
use almanac_time::{
    FixedDate, GREENWICH, GregorianDate, Location, MECCA, Moment, fixed_from_gregorian,
    fixed_from_moment, gregorian_from_fixed, named_location, standard_from_universal,
    universal_from_standard, zone_from_longitude,
};
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "almanac", about = "Sun and moon events, seasons and calendar dates")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sunrise, sunset and twilight for a date
    Sun {
        /// Gregorian date (YYYY-MM-DD)
        #[arg(value_parser = parse_date)]
        date: FixedDate,
        #[command(flatten)]
        location: LocationArgs,
        /// Horizon refraction in arcminutes
        #[arg(long, default_value_t = 34.0)]
        refraction: f64,
        /// Solar semi-diameter in arcminutes
        #[arg(long, default_value_t = 16.0)]
        semidiameter: f64,
        /// Ignore observer elevation (no horizon dip)
        #[arg(long)]
        no_altitude_correction: bool,
    },
    /// Moonrise, moonset and lunar phase for a date
    Moon {
        /// Gregorian date (YYYY-MM-DD)
        #[arg(value_parser = parse_date)]
        date: FixedDate,
        #[command(flatten)]
        location: LocationArgs,
    },
    /// Equinoxes and solstices of a Gregorian year
    Seasons {
        year: i64,
        #[command(flatten)]
        location: LocationArgs,
    },
    /// Nearest new moon before or after a date
    NewMoon {
        #[command(flatten)]
        from: SearchFrom,
        #[command(flatten)]
        location: LocationArgs,
    },
    /// Nearest full moon before or after a date
    FullMoon {
        #[command(flatten)]
        from: SearchFrom,
        #[command(flatten)]
        location: LocationArgs,
    },
    /// First evening of crescent visibility on or around a date
    Phasis {
        #[command(flatten)]
        from: SearchFrom,
        /// Visibility criterion: shaukat or yallop
        #[arg(long, default_value_t = CrescentCriterion::Shaukat)]
        criterion: CrescentCriterion,
        #[command(flatten)]
        location: LocationArgs,
    },
    /// Easter Sunday of a Gregorian year
    Easter {
        year: i64,
        /// Use the astronomical full moon and equinox
        #[arg(long)]
        astronomical: bool,
    },
    /// Lunar phase angle at a standard-time moment
    LunarPhase {
        /// Gregorian date (YYYY-MM-DD)
        #[arg(value_parser = parse_date)]
        date: FixedDate,
        /// Standard time of day (HH:MM or HH:MM:SS)
        #[arg(long, value_parser = parse_time, default_value = "00:00")]
        time: f64,
        #[command(flatten)]
        location: LocationArgs,
    },
}

#[derive(Args)]
struct LocationArgs {
    /// Named location (urbana, greenwich, mecca, jerusalem, beijing, tehran, acre, paris)
    #[arg(long, conflicts_with_all = ["lat", "lon"])]
    location: Option<String>,
    /// Latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,
    /// Longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    lon: Option<f64>,
    /// Elevation in meters
    #[arg(long, default_value_t = 0.0)]
    elevation: f64,
    /// Zone offset from UT in hours (default: from longitude)
    #[arg(long, allow_hyphen_values = true)]
    zone: Option<f64>,
}

impl LocationArgs {
    fn resolve(&self, fallback: Location) -> Result<Location, CliError> {
        let loc = match (&self.location, self.lat, self.lon) {
            (Some(name), _, _) => {
                named_location(name).ok_or_else(|| CliError::UnknownLocation(name.clone()))?
            }
            (None, Some(lat), Some(lon)) => {
                let zone = match self.zone {
                    Some(hours) => hours / 24.0,
                    None => zone_from_longitude(lon),
                };
                Location::try_new(lat, lon, self.elevation, zone)?
            }
            (None, None, None) => fallback,
            _ => return Err(CliError::IncompleteCoordinates),
        };
        debug!(?loc, "resolved location");
        Ok(loc)
    }
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct SearchFrom {
    /// Search backward from this date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    before: Option<FixedDate>,
    /// Search forward from this date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    after: Option<FixedDate>,
}

enum Direction {
    Before(FixedDate),
    After(FixedDate),
}

impl SearchFrom {
    fn direction(&self) -> Result<Direction, CliError> {
        match (self.before, self.after) {
            (Some(date), None) => Ok(Direction::Before(date)),
            (None, Some(date)) => Ok(Direction::After(date)),
            _ => Err(CliError::SearchDirection),
        }
    }
}

fn parse_date(s: &str) -> Result<FixedDate, CliError> {
    let invalid = || CliError::InvalidDate(s.to_string());
    // Split from the right so a leading minus stays with the year.
    let (year_month, day) = s.rsplit_once('-').ok_or_else(invalid)?;
    let (year, month) = year_month.rsplit_once('-').ok_or_else(invalid)?;
    let year: i64 = year.parse().map_err(|_| invalid())?;
    let month: i64 = month.parse().map_err(|_| invalid())?;
    let day: i64 = day.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) || day < 1 {
        return Err(invalid());
    }
    let date = fixed_from_gregorian(year, month, day);
    if gregorian_from_fixed(date) != GregorianDate::new(year, month, day) {
        return Err(invalid());
    }
    Ok(date)
}

/// Time of day as a fraction of a day.
fn parse_time(s: &str) -> Result<f64, CliError> {
    let invalid = || CliError::InvalidTime(s.to_string());
    let fields: Vec<&str> = s.split(':').collect();
    if !(2..=3).contains(&fields.len()) {
        return Err(invalid());
    }
    let hour: u32 = fields[0].parse().map_err(|_| invalid())?;
    let minute: u32 = fields[1].parse().map_err(|_| invalid())?;
    let second: f64 = match fields.get(2) {
        Some(sec) => sec.parse().map_err(|_| invalid())?,
        None => 0.0,
    };
    if hour > 23 || minute > 59 || !(0.0..60.0).contains(&second) {
        return Err(invalid());
    }
    Ok((f64::from(hour) * 3600.0 + f64::from(minute) * 60.0 + second) / 86400.0)
}

/// `YYYY-MM-DD HH:MM:SS`, rounded to the nearest second.
fn format_moment(t: Moment) -> String {
    let mut date = fixed_from_moment(t);
    let mut secs = ((t - date as f64) * 86400.0).round() as i64;
    if secs >= 86400 {
        date += 1;
        secs -= 86400;
    }
    format!(
        "{} {:02}:{:02}:{:02}",
        gregorian_from_fixed(date),
        secs / 3600,
        secs % 3600 / 60,
        secs % 60
    )
}

fn format_event(t: Option<Moment>) -> String {
    t.map_or_else(|| "none".to_string(), format_moment)
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Sun {
            date,
            location,
            refraction,
            semidiameter,
            no_altitude_correction,
        } => {
            let loc = location.resolve(GREENWICH)?;
            let config = RiseSetConfig {
                refraction_arcmin: refraction,
                semidiameter_arcmin: semidiameter,
                altitude_correction: !no_altitude_correction,
            };
            for (event, t) in all_solar_events(date, &loc, &config)? {
                println!("{:<18} {}", event.name(), format_event(t));
            }
        }

        Commands::Moon { date, location } => {
            let loc = location.resolve(GREENWICH)?;
            let noon = universal_from_standard(date as f64 + 0.5, &loc);
            println!("{:<18} {}", "moonrise", format_event(moonrise(date, &loc)?));
            println!("{:<18} {}", "moonset", format_event(moonset(date, &loc)?));
            println!("{:<18} {:.4}", "phase at noon", lunar_phase(noon));
        }

        Commands::Seasons { year, location } => {
            let loc = location.resolve(GREENWICH)?;
            for season in Season::ALL {
                let t = season_in_gregorian(season, year)?;
                println!(
                    "{:<18} {}",
                    season.name(),
                    format_moment(standard_from_universal(t, &loc))
                );
            }
        }

        Commands::NewMoon { from, location } => {
            let loc = location.resolve(GREENWICH)?;
            let t = match from.direction()? {
                Direction::Before(d) => new_moon_before(universal_from_standard(d as f64, &loc))?,
                Direction::After(d) => {
                    new_moon_at_or_after(universal_from_standard(d as f64, &loc))?
                }
            };
            println!("{}", format_moment(standard_from_universal(t, &loc)));
        }

        Commands::FullMoon { from, location } => {
            let loc = location.resolve(GREENWICH)?;
            let t = match from.direction()? {
                Direction::Before(d) => {
                    full_moon_at_or_before(universal_from_standard(d as f64, &loc))?
                }
                Direction::After(d) => {
                    full_moon_at_or_after(universal_from_standard(d as f64, &loc))?
                }
            };
            println!("{}", format_moment(standard_from_universal(t, &loc)));
        }

        Commands::Phasis {
            from,
            criterion,
            location,
        } => {
            let loc = location.resolve(MECCA)?;
            let date = match from.direction()? {
                Direction::Before(d) => phasis_on_or_before_with(criterion, d, &loc)?,
                Direction::After(d) => phasis_on_or_after_with(criterion, d, &loc)?,
            };
            println!("{} ({criterion})", gregorian_from_fixed(date));
        }

        Commands::Easter { year, astronomical } => {
            let date = if astronomical {
                astronomical_easter(year)?
            } else {
                gregorian_easter(year)
            };
            println!("{}", gregorian_from_fixed(date));
        }

        Commands::LunarPhase {
            date,
            time,
            location,
        } => {
            let loc = location.resolve(GREENWICH)?;
            let t = universal_from_standard(date as f64 + time, &loc);
            println!("{:.4}", lunar_phase(t));
        }
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
