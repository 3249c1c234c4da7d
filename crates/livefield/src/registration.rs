// File: src/registration.rs
// Purpose: The demo registration form (full name, phone, email, age)

use crate::config::Config;
use crate::error::ConfigError;
use crate::field::FieldConfig;
use crate::form::{FieldRule, Form};
use crate::session::FormSession;
use crate::transform::InputTransform;
use crate::validator::Validator;
use livefield_validation::PHONE_DIGITS;

pub const FULL_NAME: &str = "fullName";
pub const PHONE_NUMBER: &str = "phoneNumber";
pub const EMAIL: &str = "email";
pub const AGE: &str = "age";

pub const FULL_NAME_REQUIRED: &str = "Full name is required";
pub const PHONE_REQUIRED: &str = "Phone number is required";

const AGE_MAX_DIGITS: usize = 3;

/// Human-readable rules shown next to the demo form.
pub const RULES: &[(&str, &str)] = &[
    ("Full name", "required"),
    ("Mobile number", "digits only, 11 digits, starts with 09"),
    ("Email", "optional, must look like example@domain.com"),
    ("Age", "optional, digits only, between 1 and 120"),
];

/// Form-level rules.
pub fn registration_form() -> Result<Form, ConfigError> {
    Form::builder()
        .field(FieldRule::required(FULL_NAME, FULL_NAME_REQUIRED))
        .field(FieldRule::required(PHONE_NUMBER, PHONE_REQUIRED).with_validator(Validator::phone()))
        .field(FieldRule::optional(EMAIL).with_validator(Validator::email()))
        .field(FieldRule::optional(AGE).with_validator(Validator::age()))
        .build()
}

/// Per-input configuration, seeded from `config`.
pub fn registration_fields(config: &Config) -> Vec<FieldConfig> {
    vec![
        config
            .field(FULL_NAME)
            .label("Full name")
            .placeholder("e.g. Ali Mohammadi")
            .help_text("Enter your full name")
            .required(),
        config
            .field(PHONE_NUMBER)
            .label("Mobile number")
            .placeholder("09123456789")
            .help_text("Digits only, 11 digits, must start with 09")
            .max_length(PHONE_DIGITS)
            .error_message("Mobile number is not valid")
            .transform(InputTransform::Phone)
            .validator(Validator::phone())
            .required(),
        config
            .field(EMAIL)
            .label("Email")
            .placeholder("your@email.com")
            .help_text("example@domain.com, optional")
            .error_message("Enter a valid email")
            .validator(Validator::email()),
        config
            .field(AGE)
            .label("Age")
            .placeholder("25")
            .help_text("Between 1 and 120, optional")
            .max_length(AGE_MAX_DIGITS)
            .error_message("Age is not valid")
            .transform(InputTransform::Digits)
            .validator(Validator::age()),
    ]
}

pub fn registration_session(config: &Config) -> Result<FormSession, ConfigError> {
    FormSession::new(registration_form()?, registration_fields(config))
}
