//! Error types for the puzzle framework

use thiserror::Error;

/// Error type for parsing puzzle input
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Input format doesn't match expected structure
    #[error("invalid format: {0}")]
    InvalidFormat(String),
    /// Required data is missing from input
    #[error("missing data: {0}")]
    MissingData(String),
    /// Other parsing errors
    #[error("parse error: {0}")]
    Other(String),
}

/// Error type for solving a puzzle part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The requested part number is not implemented
    #[error("part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The requested part number exceeds the puzzle's declared part count
    #[error("part {0} is out of range")]
    PartOutOfRange(u8),
    /// An error occurred while solving the part
    #[error("solve failed: {0}")]
    Failed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error type for registry operations
#[derive(Debug, Error)]
pub enum PuzzleError {
    /// No solver registered for the given year and day
    #[error("no solver registered for year {0} day {1}")]
    NotFound(u16, u8),
    /// Error occurred during parsing
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Error occurred during solving
    #[error(transparent)]
    Solve(#[from] SolveError),
}

/// Error type for registration failures
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// Attempted to register a solver for a year-day combination that already exists
    #[error("duplicate solver registration for year {0} day {1}")]
    Duplicate(u16, u8),
}
