//! Error types for the time-scale layer.

use thiserror::Error;

/// Errors from constructing time-scale inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// A location field is non-finite or out of range.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
}
