//! Error types for the event calculators.

use almanac_math::MathError;
use almanac_time::TimeError;
use thiserror::Error;

/// Fatal errors from event searches.
///
/// An event that simply does not happen (polar day, no moonrise on a given
/// date) is not an error; it is reported as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EventError {
    /// A numeric solver exhausted its iteration guard.
    #[error(transparent)]
    Math(#[from] MathError),
    /// Invalid time-scale input, such as a malformed location.
    #[error(transparent)]
    Time(#[from] TimeError),
    /// Invalid search configuration.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    /// A fixed-point iteration did not settle.
    #[error("{0} did not converge")]
    NoConvergence(&'static str),
}
