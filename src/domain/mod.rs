//! Domain value objects and the pure formatting/validation engine.
//!
//! Everything in this module is synchronous and stateless: digit extraction,
//! mask formatting, check-digit validation and field-level validation
//! results. None of it touches the network.

pub mod cnpj;
pub mod cpf;
pub mod digits;
pub mod errors;
pub mod mask;
pub mod phone;
pub mod postal_code;
pub mod validation;

pub use cnpj::is_valid_cnpj;
pub use cpf::is_valid_cpf;
pub use digits::{extract, extract_bounded, DigitString};
pub use errors::ValidationError;
pub use mask::{
    format, format_cnpj, format_complete, format_cpf, format_phone, format_postal_code, MaskKind,
    MaskSpec,
};
pub use phone::{check_phone, is_valid_phone, PhoneProblem};
pub use postal_code::PostalCode;
pub use validation::{blur_feedback, validate, validate_with_mode, ValidationMode, ValidationResult};
