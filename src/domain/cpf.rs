//! CPF check-digit validation.
//!
//! Only structural validity is checked. A CPF that passes may still not be
//! issued to anyone; registry lookups are out of scope.

/// Number of digits in a CPF, check digits included.
pub const CPF_LENGTH: usize = 11;

/// Validate a CPF digit string.
///
/// Returns `false` for any input that is not exactly eleven ASCII digits,
/// for a single repeated digit, or when either check digit is wrong.
///
/// # Example
///
/// ```
/// use br_fields_mcp_server::domain::is_valid_cpf;
///
/// assert!(is_valid_cpf("11144477735"));
/// assert!(!is_valid_cpf("11144477734"));
/// ```
pub fn is_valid_cpf(digits: &str) -> bool {
    let Some(values) = parse_digits::<CPF_LENGTH>(digits) else {
        return false;
    };

    if values.iter().all(|&d| d == values[0]) {
        return false;
    }

    check_digit(&values[..9]) == values[9] && check_digit(&values[..10]) == values[10]
}

/// Weights run from `base.len() + 1` down to 2.
fn check_digit(base: &[u32]) -> u32 {
    let top = base.len() as u32 + 1;
    let sum: u32 = base
        .iter()
        .enumerate()
        .map(|(i, &d)| d * (top - i as u32))
        .sum();

    let remainder = 11 - sum % 11;
    if remainder >= 10 {
        0
    } else {
        remainder
    }
}

/// Parse exactly `N` ASCII digits.
pub(crate) fn parse_digits<const N: usize>(digits: &str) -> Option<[u32; N]> {
    if digits.len() != N {
        return None;
    }
    let mut values = [0u32; N];
    for (slot, c) in values.iter_mut().zip(digits.chars()) {
        *slot = c.to_digit(10)?;
    }
    Some(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_valid_cpfs() {
        assert!(is_valid_cpf("11144477735"));
        assert!(is_valid_cpf("52998224725"));
        assert!(is_valid_cpf("39053344705"));
    }

    #[test]
    fn test_wrong_check_digits() {
        assert!(!is_valid_cpf("11144477734"));
        assert!(!is_valid_cpf("11144477725"));
        assert!(!is_valid_cpf("52998224726"));
    }

    #[test]
    fn test_repeated_digits_rejected() {
        for d in 0..=9 {
            let cpf = d.to_string().repeat(CPF_LENGTH);
            assert!(!is_valid_cpf(&cpf), "{cpf} should be rejected");
        }
    }

    #[test]
    fn test_wrong_length() {
        assert!(!is_valid_cpf("123"));
        assert!(!is_valid_cpf(""));
        assert!(!is_valid_cpf("111444777350"));
    }

    #[test]
    fn test_formatted_input_is_not_digits() {
        assert!(!is_valid_cpf("111.444.777-35"));
        assert!(!is_valid_cpf("1114447773a"));
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        assert!(!is_valid_cpf("111444777٣5"));
        assert!(!is_valid_cpf("1114447٣35"));
    }
}
