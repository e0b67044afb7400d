//! Domain validation errors.

use std::fmt;

/// Errors that can occur when constructing domain value objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The postal code does not hold exactly eight digits.
    InvalidPostalCode(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPostalCode(code) => write!(f, "Invalid postal code: {}", code),
        }
    }
}

impl std::error::Error for ValidationError {}
