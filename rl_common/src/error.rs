//! Fatal errors for a valuation run

use thiserror::Error;

/// Errors that abort a valuation run.
///
/// Everything recoverable is reported as a [`crate::Warning`] instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValuationError {
    /// A price section header is missing from the category table.
    /// The static configuration is out of sync with the catalogue.
    #[error("unknown catalogue category: {0:?}")]
    UnknownCategory(String),

    /// The catalogue has no colour label header, so no price column can be mapped.
    #[error("catalogue has no colour labels")]
    MissingColourLabels,

    /// The inventory header lacks a required column.
    #[error("inventory has no {0:?} column")]
    MissingInventoryColumn(String),

    /// A CSS selector literal failed to compile.
    #[error("invalid selector {selector:?}: {reason}")]
    Selector { selector: String, reason: String },
}

/// Result alias for valuation operations
pub type Result<T> = std::result::Result<T, ValuationError>;
