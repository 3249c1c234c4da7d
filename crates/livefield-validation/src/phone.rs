//! Mobile phone number validation
//!
//! A valid number is exactly 11 digits and starts with `09`.

use crate::string::char_len;

pub const PHONE_DIGITS: usize = 11;
pub const PHONE_PREFIX: &str = "09";

pub const PHONE_DIGITS_ONLY_MESSAGE: &str = "Phone number must contain only digits";
pub const PHONE_LENGTH_MESSAGE: &str = "Phone number must be 11 digits";
pub const PHONE_PREFIX_MESSAGE: &str = "Phone number must start with 09";

/// Phone validator: empty is accepted. Whitespace is ignored; the rest
/// must be all digits, exactly [`PHONE_DIGITS`] long, prefixed by
/// [`PHONE_PREFIX`]. Checks run in that order and the first failure wins.
pub fn validate_phone(phone: &str) -> Result<(), String> {
    if phone.is_empty() {
        return Ok(());
    }

    let clean: String = phone.chars().filter(|c| !c.is_whitespace()).collect();

    if clean.is_empty() || !clean.chars().all(|c| c.is_ascii_digit()) {
        return Err(PHONE_DIGITS_ONLY_MESSAGE.to_string());
    }

    if char_len(&clean) != PHONE_DIGITS {
        return Err(PHONE_LENGTH_MESSAGE.to_string());
    }

    if !clean.starts_with(PHONE_PREFIX) {
        return Err(PHONE_PREFIX_MESSAGE.to_string());
    }

    Ok(())
}
