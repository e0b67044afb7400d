//! CNPJ check-digit validation.

use super::cpf::parse_digits;

/// Number of digits in a CNPJ, check digits included.
pub const CNPJ_LENGTH: usize = 14;

/// Validate a CNPJ digit string.
///
/// Weights cycle through 2..=9 starting from the rightmost base digit, so
/// the twelve-digit base is weighted `5 4 3 2 9 8 7 6 5 4 3 2` and the
/// thirteen-digit base `6 5 4 3 2 9 8 7 6 5 4 3 2`.
///
/// # Example
///
/// ```
/// use br_fields_mcp_server::domain::is_valid_cnpj;
///
/// assert!(is_valid_cnpj("11222333000181"));
/// assert!(!is_valid_cnpj("11111111111111"));
/// ```
pub fn is_valid_cnpj(digits: &str) -> bool {
    let Some(values) = parse_digits::<CNPJ_LENGTH>(digits) else {
        return false;
    };

    if values.iter().all(|&d| d == values[0]) {
        return false;
    }

    check_digit(&values[..12]) == values[12] && check_digit(&values[..13]) == values[13]
}

fn check_digit(base: &[u32]) -> u32 {
    let sum: u32 = base
        .iter()
        .rev()
        .zip((2..=9).cycle())
        .map(|(&d, w)| d * w)
        .sum();

    match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_valid_cnpjs() {
        assert!(is_valid_cnpj("11222333000181"));
        assert!(is_valid_cnpj("11444777000161"));
    }

    #[test]
    fn test_weight_cycle_matches_fixed_tables() {
        let base = [1, 1, 2, 2, 2, 3, 3, 3, 0, 0, 0, 1, 8];
        let first = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
        let second = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

        let reduce = |sum: u32| if sum % 11 < 2 { 0 } else { 11 - sum % 11 };
        let fixed_first: u32 = base[..12].iter().zip(first).map(|(d, w)| d * w).sum();
        let fixed_second: u32 = base.iter().zip(second).map(|(d, w)| d * w).sum();

        assert_eq!(check_digit(&base[..12]), reduce(fixed_first));
        assert_eq!(check_digit(&base), reduce(fixed_second));
        assert_eq!(check_digit(&base[..12]), 8);
        assert_eq!(check_digit(&base), 1);
    }

    #[test]
    fn test_wrong_check_digits() {
        assert!(!is_valid_cnpj("11222333000182"));
        assert!(!is_valid_cnpj("11222333000191"));
    }

    #[test]
    fn test_repeated_digits_rejected() {
        for d in 0..=9 {
            let cnpj = d.to_string().repeat(CNPJ_LENGTH);
            assert!(!is_valid_cnpj(&cnpj), "{cnpj} should be rejected");
        }
    }

    #[test]
    fn test_wrong_length() {
        assert!(!is_valid_cnpj("1122233300018"));
        assert!(!is_valid_cnpj("112223330001811"));
        assert!(!is_valid_cnpj(""));
    }

    #[test]
    fn test_formatted_input_rejected() {
        assert!(!is_valid_cnpj("11.222.333/0001-81"));
    }
}
