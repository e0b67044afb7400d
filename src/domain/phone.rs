//! Brazilian phone number rules.

/// Lowest assigned two-digit area code (DDD).
pub const MIN_AREA_CODE: u32 = 11;

/// Reasons a phone digit string is not a usable Brazilian number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneProblem {
    /// Not 10 (landline) or 11 (mobile) digits.
    WrongLength,
    /// Area code below 11.
    InvalidAreaCode,
    /// An 11-digit number whose subscriber part does not start with 9.
    MobileWithoutNine,
}

impl PhoneProblem {
    pub fn message(self) -> &'static str {
        match self {
            PhoneProblem::WrongLength => "Phone must have 10 or 11 digits",
            PhoneProblem::InvalidAreaCode => "Invalid area code (DDD)",
            PhoneProblem::MobileWithoutNine => "Mobile number must start with 9",
        }
    }
}

/// Check a phone digit string (area code included, no formatting).
pub fn check_phone(digits: &str) -> Result<(), PhoneProblem> {
    if !digits.bytes().all(|b| b.is_ascii_digit()) || !(10..=11).contains(&digits.len()) {
        return Err(PhoneProblem::WrongLength);
    }

    let area_code: u32 = digits[..2].parse().map_err(|_| PhoneProblem::WrongLength)?;
    if area_code < MIN_AREA_CODE {
        return Err(PhoneProblem::InvalidAreaCode);
    }

    if digits.len() == 11 && !digits[2..].starts_with('9') {
        return Err(PhoneProblem::MobileWithoutNine);
    }

    Ok(())
}

/// Whether `digits` is a 10 or 11 digit number with a plausible area code.
pub fn is_valid_phone(digits: &str) -> bool {
    check_phone(digits).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_phones() {
        assert!(is_valid_phone("1133334444"));
        assert!(is_valid_phone("11987654321"));
        assert!(is_valid_phone("99912345678"));
    }

    #[test]
    fn test_wrong_length() {
        assert_eq!(check_phone("113333444"), Err(PhoneProblem::WrongLength));
        assert_eq!(check_phone("119876543210"), Err(PhoneProblem::WrongLength));
        assert_eq!(check_phone("(11) 3333-4444"), Err(PhoneProblem::WrongLength));
    }

    #[test]
    fn test_area_code() {
        assert_eq!(check_phone("0933334444"), Err(PhoneProblem::InvalidAreaCode));
        assert_eq!(check_phone("1033334444"), Err(PhoneProblem::InvalidAreaCode));
    }

    #[test]
    fn test_mobile_requires_nine() {
        assert_eq!(
            check_phone("11887654321"),
            Err(PhoneProblem::MobileWithoutNine)
        );
    }
}
