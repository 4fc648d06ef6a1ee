//! Contact field validation

use regex::Regex;
use std::sync::LazyLock;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Minimum typed length before email format errors are surfaced
pub const EMAIL_MIN_LEN: usize = 7;
/// Minimum typed length before phone format errors are surfaced
pub const PHONE_MIN_LEN: usize = 5;

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Digits only, 7-15 of them
pub fn is_valid_phone(phone: &str) -> bool {
    (7..=15).contains(&phone.len()) && phone.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        for email in ["a@b.com", "user.name@mail.example.org", "100@100.com"] {
            assert!(is_valid_email(email), "{email} should be valid");
        }
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "",
            "plainaddress",
            "missing@domain",
            "two@@at.com",
            "spaces in@mail.com",
            "@no-local.com",
        ] {
            assert!(!is_valid_email(email), "{email} should be invalid");
        }
    }

    #[test]
    fn test_valid_phones() {
        for phone in ["1234567", "912345678", "123456789012345"] {
            assert!(is_valid_phone(phone), "{phone} should be valid");
        }
    }

    #[test]
    fn test_invalid_phones() {
        for phone in ["", "123456", "1234567890123456", "91234567a", "912-345678"] {
            assert!(!is_valid_phone(phone), "{phone} should be invalid");
        }
    }
}
