//! Field-level validation results.
//!
//! These functions replace error rendering with data: the caller receives a
//! [`ValidationResult`] and decides how to show it.

use super::cnpj::is_valid_cnpj;
use super::cpf::is_valid_cpf;
use super::digits::extract;
use super::mask::MaskKind;
use super::phone::check_phone;
use super::postal_code::POSTAL_CODE_LENGTH;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Outcome of validating one field value. Built fresh on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            valid: true,
            reason: None,
        }
    }

    pub fn invalid(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            reason: Some(reason.into()),
        }
    }
}

/// When a field is validated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Form submission: the value must be complete and correct.
    #[default]
    Strict,
    /// Focus loss while typing: only complete values are judged.
    Blur,
}

/// Validate raw input for `kind` with the given mode.
pub fn validate_with_mode(raw: &str, kind: MaskKind, mode: ValidationMode) -> ValidationResult {
    match mode {
        ValidationMode::Strict => validate(raw, kind),
        ValidationMode::Blur => blur_feedback(raw, kind),
    }
}

/// Validate a submitted value.
///
/// Incomplete values are rejected with a length message; complete values
/// are checked against the kind's rules (check digits, area code, ...).
pub fn validate(raw: &str, kind: MaskKind) -> ValidationResult {
    let digits = extract(raw);
    let digits = digits.as_str();

    match kind {
        MaskKind::Cpf if digits.len() != kind.max_digits() => {
            ValidationResult::invalid("CPF must have 11 digits")
        }
        MaskKind::Cpf if !is_valid_cpf(digits) => ValidationResult::invalid("Invalid CPF"),
        MaskKind::Cnpj if digits.len() != kind.max_digits() => {
            ValidationResult::invalid("CNPJ must have 14 digits")
        }
        MaskKind::Cnpj if !is_valid_cnpj(digits) => ValidationResult::invalid("Invalid CNPJ"),
        MaskKind::Phone => match check_phone(digits) {
            Ok(()) => ValidationResult::valid(),
            Err(problem) => ValidationResult::invalid(problem.message()),
        },
        MaskKind::PostalCode if digits.len() != POSTAL_CODE_LENGTH => {
            ValidationResult::invalid("CEP must have 8 digits")
        }
        MaskKind::PostalCode if digits.bytes().all(|b| b == b'0') => {
            ValidationResult::invalid("Invalid CEP")
        }
        _ => ValidationResult::valid(),
    }
}

/// Feedback for a field that just lost focus.
///
/// CPF and CNPJ fields report an error only when they hold a complete value
/// with wrong check digits; a partial value clears any previous error.
/// Phone and postal code fields have no focus-loss check.
pub fn blur_feedback(raw: &str, kind: MaskKind) -> ValidationResult {
    let digits = extract(raw);
    let complete = digits.len() == kind.max_digits();

    match kind {
        MaskKind::Cpf if complete && !is_valid_cpf(digits.as_str()) => {
            ValidationResult::invalid("Invalid CPF")
        }
        MaskKind::Cnpj if complete && !is_valid_cnpj(digits.as_str()) => {
            ValidationResult::invalid("Invalid CNPJ")
        }
        _ => ValidationResult::valid(),
    }
}
