//! Error types for kiraya.

use thiserror::Error;

/// Result type alias for kiraya operations.
pub type Result<T> = std::result::Result<T, KirayaError>;

/// Errors that can occur while loading reference data or configuring the estimator.
#[derive(Error, Debug)]
pub enum KirayaError {
    /// The reference dataset contains no records.
    #[error("Reference dataset is empty")]
    EmptyDataset,

    /// A reference record failed validation.
    #[error("Invalid reference record #{index}: {reason}")]
    InvalidRecord {
        /// Position of the record in the source collection.
        index: usize,
        /// Why the record was rejected.
        reason: String,
    },

    /// Invalid property query.
    #[error(transparent)]
    Query(#[from] QueryError),

    /// State not present in the location registry.
    #[error("Unknown state: {0}")]
    UnknownState(String),

    /// City not listed for the given state.
    #[error("Unknown city '{city}' for state {state}")]
    UnknownCity {
        /// The state that was searched.
        state: String,
        /// The city that was not found.
        city: String,
    },

    /// Unsupported dataset file type.
    #[error("Unsupported dataset format: {0}")]
    UnsupportedFormat(String),

    /// Invalid estimator configuration.
    #[error("Config error: {0}")]
    Config(String),

    /// CSV parse error.
    #[error("CSV error: {0}")]
    Csv(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error for property queries that cannot be estimated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    /// State name is empty.
    #[error("State must not be empty")]
    EmptyState,

    /// City name is empty.
    #[error("City must not be empty")]
    EmptyCity,

    /// Size is zero, negative or not a number.
    #[error("Size must be a positive number, got {0}")]
    NonPositiveSize(f64),

    /// Size above [`PropertyQuery::MAX_SIZE`](crate::PropertyQuery::MAX_SIZE).
    #[error("Size must be at most {max} sq ft, got {size}")]
    SizeTooLarge {
        /// The rejected size.
        size: f64,
        /// The largest accepted size.
        max: f64,
    },

    /// Zero bedrooms.
    #[error("Bedrooms must be at least 1")]
    NoBedrooms,

    /// Zero bathrooms.
    #[error("Bathrooms must be at least 1")]
    NoBathrooms,
}
