//! Error types for rl_valuation

use rl_common::ValuationError;
use std::fmt;

/// Unified error type for rl_valuation operations
#[derive(Debug)]
pub enum Error {
    /// Reading an input file failed
    Io(std::io::Error),
    /// Inventory file is not readable as CSV at all (e.g. bad header)
    Csv(csv::Error),
    /// Failed to serialize the report
    Json(serde_json::Error),
    /// Catalogue or configuration problem that aborts the run
    Valuation(ValuationError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::Csv(e) => write!(f, "CSV error: {}", e),
            Error::Json(e) => write!(f, "JSON error: {}", e),
            Error::Valuation(e) => write!(f, "Valuation error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Csv(e) => Some(e),
            Error::Json(e) => Some(e),
            Error::Valuation(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<ValuationError> for Error {
    fn from(err: ValuationError) -> Self {
        Error::Valuation(err)
    }
}

/// Result alias for rl_valuation operations
pub type Result<T> = std::result::Result<T, Error>;
