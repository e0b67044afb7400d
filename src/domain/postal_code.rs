//! PostalCode value object.

use super::digits::extract;
use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Number of digits in a CEP.
pub const POSTAL_CODE_LENGTH: usize = 8;

/// An eight-digit Brazilian postal code (CEP), stored without formatting.
///
/// Construction accepts masked input (`01310-100`) and keeps only the digits.
/// This is the precondition for an address lookup: a value that cannot
/// become a `PostalCode` never reaches the directory service.
///
/// # Example
///
/// ```
/// use br_fields_mcp_server::domain::PostalCode;
///
/// let cep = PostalCode::new("01310-100").unwrap();
/// assert_eq!(cep.as_str(), "01310100");
/// assert_eq!(cep.formatted(), "01310-100");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostalCode(String);

impl PostalCode {
    /// Create a new PostalCode from raw input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPostalCode` unless the input holds
    /// exactly eight digits once formatting characters are removed.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = raw.as_ref();
        let digits = extract(raw);

        if digits.len() != POSTAL_CODE_LENGTH {
            return Err(ValidationError::InvalidPostalCode(raw.to_string()));
        }

        Ok(Self(digits.into_inner()))
    }

    /// Get the digits as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Display form, `XXXXX-XXX`.
    pub fn formatted(&self) -> String {
        format!("{}-{}", &self.0[..5], &self.0[5..])
    }
}

// Serde support - serialize as digits
impl Serialize for PostalCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PostalCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PostalCode::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
