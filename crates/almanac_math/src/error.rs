//! Error types for the numeric toolkit.

use thiserror::Error;

/// Fatal failures of the iterative solvers.
///
/// These indicate a programming error (a stop predicate that can never
/// hold, a search predicate that is never satisfied), not a missing
/// astronomical event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MathError {
    /// An iteration guard was exhausted before the routine terminated.
    #[error("{routine} did not terminate within {iterations} iterations")]
    NoConvergence {
        routine: &'static str,
        iterations: usize,
    },
}
