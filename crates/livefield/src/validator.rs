// File: src/validator.rs
// Purpose: Shared, clonable validator functions

use std::fmt;
use std::sync::Arc;

type ValidateFn = dyn Fn(&str) -> Result<(), String> + Send + Sync;

/// A validation rule: `Ok(())` when the value is acceptable, otherwise
/// `Err` with the message to show.
///
/// Cloning is cheap; the same validator can back a field and the form
/// rule for that field.
#[derive(Clone)]
pub struct Validator {
    name: &'static str,
    check: Arc<ValidateFn>,
}

impl Validator {
    pub fn new<F>(name: &'static str, check: F) -> Self
    where
        F: Fn(&str) -> Result<(), String> + Send + Sync + 'static,
    {
        Self {
            name,
            check: Arc::new(check),
        }
    }

    /// Runs the rule against `value`.
    pub fn check(&self, value: &str) -> Result<(), String> {
        (self.check)(value)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn phone() -> Self {
        Self::new("phone", livefield_validation::validate_phone)
    }

    pub fn email() -> Self {
        Self::new("email", livefield_validation::validate_email)
    }

    pub fn age() -> Self {
        Self::new("age", livefield_validation::validate_age)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Validator").field(&self.name).finish()
    }
}
