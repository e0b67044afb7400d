//! Field service: the boundary the integration layer talks to.
//!
//! A caller hands over raw field text plus a [`MaskKind`] and gets back data
//! (a display string, a [`ValidationResult`], a lookup outcome). Rendering
//! that data is left entirely to the caller.

use crate::domain::{
    extract_bounded, format, validate_with_mode, DigitString, MaskKind, ValidationMode,
    ValidationResult,
};
use crate::error::LookupResult;
use crate::models::LookupOutcome;
use crate::services::AddressLookupService;
use serde::Serialize;
use std::sync::Arc;

/// A field value after masking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedField {
    pub kind: MaskKind,
    /// Digits kept after truncation to the kind's maximum
    pub digits: DigitString,
    /// Display string to put back into the field
    pub formatted: String,
    /// Whether the digits form a complete value for the kind
    pub complete: bool,
}

/// Format, validate and enrich form fields.
pub struct FieldService {
    address_lookup: Arc<dyn AddressLookupService>,
}

impl FieldService {
    pub fn new(address_lookup: Arc<dyn AddressLookupService>) -> Self {
        Self { address_lookup }
    }

    /// Mask raw input for display.
    pub fn format_field(&self, raw: &str, kind: MaskKind) -> FormattedField {
        let digits = extract_bounded(raw, kind);
        let complete = kind.is_complete_length(digits.len());

        FormattedField {
            kind,
            formatted: format(digits.as_str(), kind),
            digits,
            complete,
        }
    }

    /// Validate raw input.
    pub fn validate_field(
        &self,
        raw: &str,
        kind: MaskKind,
        mode: ValidationMode,
    ) -> ValidationResult {
        let result = validate_with_mode(raw, kind, mode);
        if !result.valid {
            tracing::debug!(
                kind = %kind,
                reason = result.reason.as_deref().unwrap_or(""),
                "Field failed validation"
            );
        }
        result
    }

    /// Resolve the address for a postal-code field.
    pub async fn lookup_address(&self, raw: &str) -> LookupResult<LookupOutcome> {
        self.address_lookup.lookup(raw).await
    }

    /// Resolve several postal codes at once, in input order.
    pub async fn lookup_addresses(&self, raws: &[String]) -> Vec<LookupResult<LookupOutcome>> {
        self.address_lookup.lookup_many(raws).await
    }
}
