//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

pub const EMAIL_FORMAT_MESSAGE: &str = "Enter a valid email (example@domain.com)";

// local@domain.tld, no whitespace and no extra '@' in any part
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

/// Checks the `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Email validator: empty is accepted, anything else must look like an address.
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() || is_valid_email(email) {
        Ok(())
    } else {
        Err(EMAIL_FORMAT_MESSAGE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a@b.com")]
    #[case("user.name+tag@example.co.uk")]
    #[case("x@y.z")]
    fn test_valid_emails(#[case] email: &str) {
        assert!(is_valid_email(email));
        assert!(validate_email(email).is_ok());
    }

    #[rstest]
    #[case("a@b")]
    #[case("@b.com")]
    #[case("a@.com")]
    #[case("a b@c.com")]
    #[case("a@@b.com")]
    #[case("plainaddress")]
    fn test_invalid_emails(#[case] email: &str) {
        assert_eq!(validate_email(email), Err(EMAIL_FORMAT_MESSAGE.to_string()));
    }

    #[test]
    fn test_empty_email_is_optional() {
        assert!(validate_email("").is_ok());
    }
}
