//! Mask formatters for CPF, CNPJ, phone and postal code fields.
//!
//! Formatting is progressive: a separator is only written once at least one
//! digit follows it, so a half-typed value never ends in a dangling `.` or
//! `-`. Input beyond the kind's maximum length is silently dropped.

use super::digits::{extract, extract_bounded, DigitString};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of field a raw value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MaskKind {
    /// Individual taxpayer number, `XXX.XXX.XXX-XX`
    Cpf,
    /// Company registry number, `XX.XXX.XXX/XXXX-XX`
    Cnpj,
    /// Landline or mobile phone with area code
    #[serde(alias = "telefone")]
    Phone,
    /// CEP, `XXXXX-XXX`
    #[serde(alias = "cep")]
    PostalCode,
}

impl MaskKind {
    /// All field kinds, in declaration order.
    pub const ALL: [MaskKind; 4] = [
        MaskKind::Cpf,
        MaskKind::Cnpj,
        MaskKind::Phone,
        MaskKind::PostalCode,
    ];

    /// Maximum number of digits a field of this kind can hold.
    pub fn max_digits(self) -> usize {
        match self {
            MaskKind::Cpf => 11,
            MaskKind::Cnpj => 14,
            MaskKind::Phone => 11,
            MaskKind::PostalCode => 8,
        }
    }

    /// Whether `len` digits make a complete value of this kind.
    pub fn is_complete_length(self, len: usize) -> bool {
        match self {
            MaskKind::Phone => len == 10 || len == 11,
            other => len == other.max_digits(),
        }
    }

    /// Human-readable label used in validation messages.
    pub fn label(self) -> &'static str {
        match self {
            MaskKind::Cpf => "CPF",
            MaskKind::Cnpj => "CNPJ",
            MaskKind::Phone => "Phone",
            MaskKind::PostalCode => "CEP",
        }
    }

    /// Select the mask layout for a value holding `digit_count` digits.
    ///
    /// Only phones have more than one layout: the eleventh digit of a
    /// mobile number shifts the dash one position to the right.
    pub fn mask_spec(self, digit_count: usize) -> &'static MaskSpec {
        match self {
            MaskKind::Cpf => &CPF_MASK,
            MaskKind::Cnpj => &CNPJ_MASK,
            MaskKind::Phone if digit_count <= PHONE_LANDLINE_MASK.max_digits => {
                &PHONE_LANDLINE_MASK
            }
            MaskKind::Phone => &PHONE_MOBILE_MASK,
            MaskKind::PostalCode => &POSTAL_CODE_MASK,
        }
    }
}

impl fmt::Display for MaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MaskKind::Cpf => "cpf",
            MaskKind::Cnpj => "cnpj",
            MaskKind::Phone => "phone",
            MaskKind::PostalCode => "postal_code",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for MaskKind {
    type Err = String;

    /// Parse a kind tag, accepting the Portuguese `data-mask` names as well.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cpf" => Ok(MaskKind::Cpf),
            "cnpj" => Ok(MaskKind::Cnpj),
            "phone" | "telefone" => Ok(MaskKind::Phone),
            "postal_code" | "postalcode" | "cep" => Ok(MaskKind::PostalCode),
            other => Err(format!("Unknown field kind: {}", other)),
        }
    }
}

/// A fixed formatting rule: digit groups joined by literal separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskSpec {
    pub kind: MaskKind,
    pub max_digits: usize,
    /// Size of each digit group, left to right. Sums to `max_digits`.
    pub groups: &'static [usize],
    /// `separators[i]` is written between group `i` and group `i + 1`.
    pub separators: &'static [&'static str],
    /// Written before the first group once the first separator is earned.
    pub opening: Option<&'static str>,
}

pub const CPF_MASK: MaskSpec = MaskSpec {
    kind: MaskKind::Cpf,
    max_digits: 11,
    groups: &[3, 3, 3, 2],
    separators: &[".", ".", "-"],
    opening: None,
};

pub const CNPJ_MASK: MaskSpec = MaskSpec {
    kind: MaskKind::Cnpj,
    max_digits: 14,
    groups: &[2, 3, 3, 4, 2],
    separators: &[".", ".", "/", "-"],
    opening: None,
};

pub const PHONE_LANDLINE_MASK: MaskSpec = MaskSpec {
    kind: MaskKind::Phone,
    max_digits: 10,
    groups: &[2, 4, 4],
    separators: &[") ", "-"],
    opening: Some("("),
};

pub const PHONE_MOBILE_MASK: MaskSpec = MaskSpec {
    kind: MaskKind::Phone,
    max_digits: 11,
    groups: &[2, 5, 4],
    separators: &[") ", "-"],
    opening: Some("("),
};

pub const POSTAL_CODE_MASK: MaskSpec = MaskSpec {
    kind: MaskKind::PostalCode,
    max_digits: 8,
    groups: &[5, 3],
    separators: &["-"],
    opening: None,
};

impl MaskSpec {
    /// Render `digits` with this layout, dropping digits past `max_digits`.
    pub fn apply(&self, digits: &DigitString) -> String {
        let digits = &digits.as_str()[..digits.len().min(self.max_digits)];
        let mut out = String::with_capacity(digits.len() + 2 * self.groups.len());

        if let (Some(opening), Some(&first)) = (self.opening, self.groups.first()) {
            if digits.len() > first {
                out.push_str(opening);
            }
        }

        let mut rest = digits;
        for (i, &size) in self.groups.iter().enumerate() {
            if rest.is_empty() {
                break;
            }
            if i > 0 {
                out.push_str(self.separators[i - 1]);
            }
            let (group, tail) = rest.split_at(size.min(rest.len()));
            out.push_str(group);
            rest = tail;
        }

        out
    }
}

/// Format raw field input as the display string for `kind`.
///
/// Pure and total: any input, of any length, yields a string whose digits
/// are the (truncated) digits of the input in the same order.
pub fn format(raw: &str, kind: MaskKind) -> String {
    let digits = extract_bounded(raw, kind);
    kind.mask_spec(digits.len()).apply(&digits)
}

/// Format only when the input holds a complete value for `kind`.
///
/// Returns `None` for partial or over-long input instead of truncating.
pub fn format_complete(raw: &str, kind: MaskKind) -> Option<String> {
    let digits = extract(raw);
    if kind.is_complete_length(digits.len()) {
        Some(kind.mask_spec(digits.len()).apply(&digits))
    } else {
        None
    }
}

pub fn format_cpf(raw: &str) -> String {
    format(raw, MaskKind::Cpf)
}

pub fn format_cnpj(raw: &str) -> String {
    format(raw, MaskKind::Cnpj)
}

pub fn format_phone(raw: &str) -> String {
    format(raw, MaskKind::Phone)
}

pub fn format_postal_code(raw: &str) -> String {
    format(raw, MaskKind::PostalCode)
}
