//! Error types for lunaria.

use thiserror::Error;

/// Result type for lunaria operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when using lunaria.
///
/// Every error is local to a single invocation; no operation leaves residual
/// state behind on failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input could not be parsed into a valid UTC timestamp, or a
    /// (year, month) pair does not name a real calendar month.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// A phase-name lookup was given a string outside the eight canonical
    /// phase names. This is a caller wiring error, not a runtime condition.
    #[error("unknown moon phase: {0}")]
    UnknownPhase(String),
}
