// File: src/error.rs
// Purpose: Validation outcomes and configuration/usage errors

use thiserror::Error;

/// Why a value failed validation.
///
/// These are data, not faults: they end up as the field's error message
/// and in the form's error map.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Required field is empty or whitespace-only
    #[error("{0}")]
    RequiredMissing(String),

    /// Value is longer than the configured bound
    #[error("{0}")]
    LengthExceeded(String),

    /// A custom or domain validator rejected the value
    #[error("{0}")]
    FormatInvalid(String),
}

impl ValidationError {
    /// The user-facing message.
    pub fn message(&self) -> &str {
        match self {
            Self::RequiredMissing(msg) | Self::LengthExceeded(msg) | Self::FormatInvalid(msg) => {
                msg
            }
        }
    }

    pub fn into_message(self) -> String {
        match self {
            Self::RequiredMissing(msg) | Self::LengthExceeded(msg) | Self::FormatInvalid(msg) => {
                msg
            }
        }
    }
}

/// Malformed form or field configuration, rejected at build time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("field name must not be empty")]
    EmptyName,

    #[error("field `{0}` is declared more than once")]
    DuplicateField(String),

    #[error("field `{0}` has a max length of zero")]
    ZeroMaxLength(String),

    #[error("form declares no fields")]
    NoFields,

    #[error("form field `{0}` has no field configuration")]
    MissingFieldConfig(String),

    #[error("field `{0}` is configured but not declared in the form")]
    UndeclaredField(String),
}

/// Misuse of a built form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown field `{0}`")]
    UnknownField(String),
}
