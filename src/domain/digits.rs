//! DigitString value object and the digit extractor.

use super::mask::MaskKind;
use serde::{Serialize, Serializer};
use std::fmt;

/// A sequence of ASCII digits derived from raw field input.
///
/// A `DigitString` is never edited in place; it is always recomputed from
/// the source text with [`extract`] or [`extract_bounded`].
///
/// # Example
///
/// ```
/// use br_fields_mcp_server::domain::extract;
///
/// let digits = extract("123.456.789-09");
/// assert_eq!(digits.as_str(), "12345678909");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DigitString(String);

impl DigitString {
    /// Get the digits as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits held.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no digits were found in the input.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Keep at most `max` leading digits.
    pub fn truncated(mut self, max: usize) -> Self {
        // Every byte is ASCII, so any index is a char boundary.
        self.0.truncate(max);
        self
    }
}

/// Remove every character that is not an ASCII digit.
///
/// Total and idempotent: `extract(extract(x).as_str()) == extract(x)`.
pub fn extract(raw: &str) -> DigitString {
    DigitString(raw.chars().filter(|c| c.is_ascii_digit()).collect())
}

/// Extract digits and drop anything past the kind's maximum length.
pub fn extract_bounded(raw: &str, kind: MaskKind) -> DigitString {
    extract(raw).truncated(kind.max_digits())
}

impl AsRef<str> for DigitString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for DigitString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for DigitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
