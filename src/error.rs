//! Error types for the BR Fields MCP Server.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Formatting and validation never fail, so only the postal lookup and
//! configuration loading have error types.

use thiserror::Error;

/// Errors that can occur during a postal-code lookup.
///
/// An unassigned CEP is not an error; it is reported as
/// [`LookupOutcome::NotFound`](crate::models::LookupOutcome::NotFound).
#[derive(Error, Debug)]
pub enum LookupError {
    /// Input does not hold exactly eight digits; no request was sent
    #[error("Invalid postal code: {0:?} (expected 8 digits)")]
    InvalidPostalCode(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Directory service returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,
}

impl LookupError {
    /// Whether the request never left the process because the input was malformed.
    pub fn is_precondition_failure(&self) -> bool {
        matches!(self, LookupError::InvalidPostalCode(_))
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with LookupError
pub type LookupResult<T> = Result<T, LookupError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
