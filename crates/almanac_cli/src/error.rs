use almanac_events::EventError;
use almanac_time::TimeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid date `{0}`: expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("invalid time `{0}`: expected HH:MM or HH:MM:SS")]
    InvalidTime(String),
    #[error("unknown location `{0}`")]
    UnknownLocation(String),
    #[error("exactly one of --before and --after is required")]
    SearchDirection,
    #[error("--lat and --lon must be given together")]
    IncompleteCoordinates,
    #[error(transparent)]
    Location(#[from] TimeError),
    #[error(transparent)]
    Event(#[from] EventError),
}
