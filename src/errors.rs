//! Unified error types and result handling.
//!
//! All fallible operations in the crate return [`Result`], an alias over the
//! crate-wide [`Error`] enum. Field-level validation problems are carried as
//! structured data ([`crate::validate::FieldError`]) rather than formatted
//! strings, so callers can surface them next to the offending fields.

use crate::validate::FieldError;
use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or parsed.
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what went wrong
        message: String,
    },

    /// The itinerary record failed schema validation.
    #[error("Itinerary failed validation with {} field error(s)", .errors.len())]
    Validation {
        /// Field-level errors, sorted by field path
        errors: Vec<FieldError>,
    },

    /// The remote service answered with a non-success HTTP status.
    #[error("Itinerary submission failed with HTTP status {status}")]
    SubmissionFailed {
        /// The HTTP status code returned by the service
        status: u16,
    },

    /// The remote service reported success but returned no usable PDF URL.
    /// Kept distinct from [`Error::SubmissionFailed`] so the caller can show
    /// a dedicated notification instead of silently ignoring the response.
    #[error("Submission succeeded but the response carried no usable PDF URL")]
    MissingPdfUrl,

    /// Transport-level HTTP failure (connection refused, malformed body, ...).
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// I/O error while reading input or configuration files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience `Result` type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
