//! Defines custom error types for the library.

use thiserror::Error;

#[derive(Error, Debug)]
/// Error type returned when the input line cannot be read or a report cannot
/// be serialized.
pub enum MaxFinderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize report: {0}")]
    ReportSerialize(#[from] serde_json::Error),
}
