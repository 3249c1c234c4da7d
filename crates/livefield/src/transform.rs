// File: src/transform.rs
// Purpose: Input sanitization applied before a value is stored or validated

use livefield_validation::{digits_only, PHONE_DIGITS};
use serde::{Deserialize, Serialize};

/// How raw input is cleaned up before the field sees it.
///
/// Rejected characters are dropped silently; they are never reported as
/// validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputTransform {
    /// Keep input as typed
    #[default]
    None,
    /// Numeric input: drop every non-digit
    Digits,
    /// Mobile number: drop every non-digit, keep at most 11 digits
    Phone,
}

impl InputTransform {
    pub fn apply(self, raw: &str) -> String {
        match self {
            Self::None => raw.to_string(),
            Self::Digits => digits_only(raw),
            Self::Phone => digits_only(raw).chars().take(PHONE_DIGITS).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_keeps_input() {
        assert_eq!(InputTransform::None.apply(" Ali 2 "), " Ali 2 ");
    }

    #[test]
    fn test_digits_strips_everything_else() {
        assert_eq!(InputTransform::Digits.apply("2a5 "), "25");
        assert_eq!(InputTransform::Digits.apply("abc"), "");
    }

    #[test]
    fn test_phone_truncates() {
        assert_eq!(InputTransform::Phone.apply("0912-345-6789-00"), "09123456789");
        assert_eq!(InputTransform::Phone.apply("0912a45678b"), "091245678");
    }
}
