// File: src/field.rs
// Purpose: Field engine - one input's value, touched flag and error

use crate::error::{ConfigError, ValidationError};
use crate::transform::InputTransform;
use crate::validator::Validator;
use livefield_validation::{char_len, is_blank};
use serde::Serialize;
use tracing::debug;

pub const DEFAULT_REQUIRED_MESSAGE: &str = "This field is required";
pub const DEFAULT_INVALID_MESSAGE: &str = "The entered value is not valid";
pub const DEFAULT_WARNING_RATIO: f32 = 0.8;

/// Static configuration of a single field.
///
/// Display metadata (`label`, `placeholder`, `help_text`) is carried for the
/// renderer and never interpreted by the engine.
#[derive(Debug, Clone)]
pub struct FieldConfig {
    pub name: String,
    pub label: String,
    pub placeholder: String,
    pub help_text: Option<String>,
    pub required: bool,
    pub max_length: Option<usize>,
    /// Message reported when `max_length` is exceeded
    pub error_message: String,
    /// Message reported when a required field is empty
    pub required_message: String,
    pub custom_validator: Option<Validator>,
    pub transform: InputTransform,
    /// Fraction of `max_length` above which the counter warns
    pub warning_ratio: f32,
}

impl FieldConfig {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            label: name.clone(),
            name,
            placeholder: String::new(),
            help_text: None,
            required: false,
            max_length: None,
            error_message: DEFAULT_INVALID_MESSAGE.to_string(),
            required_message: DEFAULT_REQUIRED_MESSAGE.to_string(),
            custom_validator: None,
            transform: InputTransform::None,
            warning_ratio: DEFAULT_WARNING_RATIO,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn help_text(mut self, help: impl Into<String>) -> Self {
        self.help_text = Some(help.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn error_message(mut self, msg: impl Into<String>) -> Self {
        self.error_message = msg.into();
        self
    }

    pub fn required_message(mut self, msg: impl Into<String>) -> Self {
        self.required_message = msg.into();
        self
    }

    pub fn validator(mut self, validator: Validator) -> Self {
        self.custom_validator = Some(validator);
        self
    }

    pub fn transform(mut self, transform: InputTransform) -> Self {
        self.transform = transform;
        self
    }

    pub fn warning_ratio(mut self, ratio: f32) -> Self {
        self.warning_ratio = ratio;
        self
    }

    /// Rejects configurations the engine cannot honor.
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::EmptyName);
        }
        if self.max_length == Some(0) {
            return Err(ConfigError::ZeroMaxLength(self.name.clone()));
        }
        Ok(())
    }

    /// The validation pipeline. Order is fixed and the first failure wins:
    /// required, empty-optional pass, max length, custom validator.
    pub fn validate(&self, value: &str) -> Result<(), ValidationError> {
        if self.required && is_blank(value) {
            return Err(ValidationError::RequiredMissing(
                self.required_message.clone(),
            ));
        }

        if value.is_empty() {
            return Ok(());
        }

        if let Some(max) = self.max_length {
            if char_len(value) > max {
                return Err(ValidationError::LengthExceeded(self.error_message.clone()));
            }
        }

        if let Some(validator) = &self.custom_validator {
            validator.check(value).map_err(ValidationError::FormatInvalid)?;
        }

        Ok(())
    }
}

/// What the renderer should show for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayState {
    Neutral,
    Valid,
    Invalid,
}

/// Lifecycle of a field: never returns to `Pristine` except by being
/// recreated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldPhase {
    Pristine,
    TouchedValid,
    TouchedInvalid,
}

/// Character counter severity, only meaningful with a `max_length`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterLevel {
    Normal,
    Warning,
    Exceeded,
}

/// Per-render output of a field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSnapshot {
    pub name: String,
    pub current_value: String,
    pub error: Option<String>,
    pub touched: bool,
    pub is_valid: bool,
    pub is_invalid: bool,
    pub char_count: usize,
    pub counter: Option<CounterLevel>,
}

/// Common surface of owned and delegated fields.
pub trait InputField {
    fn config(&self) -> &FieldConfig;

    /// The value the field currently displays.
    fn value(&self) -> &str;

    fn error(&self) -> Option<&ValidationError>;

    fn is_touched(&self) -> bool;

    /// Sanitizes `raw`, validates it and returns the candidate value for
    /// the parent. Does not mark the field touched.
    fn on_change(&mut self, raw: &str) -> String;

    /// Marks the field touched, validates `current` and returns it for
    /// the parent.
    fn on_blur(&mut self, current: &str) -> String;

    fn name(&self) -> &str {
        &self.config().name
    }

    fn display_state(&self) -> DisplayState {
        if !self.is_touched() {
            return DisplayState::Neutral;
        }
        match self.error() {
            Some(_) => DisplayState::Invalid,
            None if !self.value().is_empty() => DisplayState::Valid,
            None => DisplayState::Neutral,
        }
    }

    fn is_valid(&self) -> bool {
        self.display_state() == DisplayState::Valid
    }

    fn is_invalid(&self) -> bool {
        self.display_state() == DisplayState::Invalid
    }

    fn phase(&self) -> FieldPhase {
        match (self.is_touched(), self.error()) {
            (false, _) => FieldPhase::Pristine,
            (true, Some(_)) => FieldPhase::TouchedInvalid,
            (true, None) => FieldPhase::TouchedValid,
        }
    }

    fn char_count(&self) -> usize {
        char_len(self.value())
    }

    fn counter_level(&self) -> Option<CounterLevel> {
        let max = self.config().max_length?;
        let count = self.char_count();
        Some(if count > max {
            CounterLevel::Exceeded
        } else if count as f32 > max as f32 * self.config().warning_ratio {
            CounterLevel::Warning
        } else {
            CounterLevel::Normal
        })
    }

    fn snapshot(&self) -> FieldSnapshot {
        FieldSnapshot {
            name: self.name().to_string(),
            current_value: self.value().to_string(),
            error: self.error().map(|e| e.message().to_string()),
            touched: self.is_touched(),
            is_valid: self.is_valid(),
            is_invalid: self.is_invalid(),
            char_count: self.char_count(),
            counter: self.counter_level(),
        }
    }
}

/// Touched flag and error shared by both field kinds.
#[derive(Debug, Clone)]
struct FieldCore {
    config: FieldConfig,
    touched: bool,
    error: Option<ValidationError>,
}

impl FieldCore {
    fn new(config: FieldConfig) -> Self {
        Self {
            config,
            touched: false,
            error: None,
        }
    }

    fn revalidate(&mut self, value: &str) {
        self.error = self.config.validate(value).err();
    }

    fn change(&mut self, raw: &str) -> String {
        let candidate = self.config.transform.apply(raw);
        self.revalidate(&candidate);
        debug!(field = %self.config.name, error = ?self.error, "field changed");
        candidate
    }

    fn blur(&mut self, current: &str) {
        self.touched = true;
        self.revalidate(current);
        debug!(field = %self.config.name, error = ?self.error, "field blurred");
    }
}

/// A field that owns its value.
#[derive(Debug, Clone)]
pub struct OwnedField {
    core: FieldCore,
    value: String,
}

impl OwnedField {
    pub fn new(config: FieldConfig) -> Self {
        Self {
            core: FieldCore::new(config),
            value: String::new(),
        }
    }

    /// Starts with `initial` already in place, unvalidated.
    pub fn with_value(config: FieldConfig, initial: impl Into<String>) -> Self {
        Self {
            core: FieldCore::new(config),
            value: initial.into(),
        }
    }

    /// Blurs with the field's own value.
    pub fn blur(&mut self) -> String {
        let current = self.value.clone();
        self.on_blur(&current)
    }
}

impl InputField for OwnedField {
    fn config(&self) -> &FieldConfig {
        &self.core.config
    }

    fn value(&self) -> &str {
        &self.value
    }

    fn error(&self) -> Option<&ValidationError> {
        self.core.error.as_ref()
    }

    fn is_touched(&self) -> bool {
        self.core.touched
    }

    fn on_change(&mut self, raw: &str) -> String {
        let candidate = self.core.change(raw);
        self.value.clone_from(&candidate);
        candidate
    }

    fn on_blur(&mut self, current: &str) -> String {
        self.core.blur(current);
        current.to_string()
    }
}

/// A field whose value is owned by someone else (usually the form).
///
/// The field keeps a mirror of the external value that only changes
/// through [`DelegatedField::observe_external_value`].
#[derive(Debug, Clone)]
pub struct DelegatedField {
    core: FieldCore,
    mirror: String,
}

impl DelegatedField {
    pub fn new(config: FieldConfig, external: impl Into<String>) -> Self {
        Self {
            core: FieldCore::new(config),
            mirror: external.into(),
        }
    }

    /// The owner changed the value. Errors are only recomputed once the
    /// field has been touched, so nothing surfaces before interaction.
    pub fn observe_external_value(&mut self, value: &str) {
        if self.mirror != value {
            self.mirror = value.to_string();
        }
        if self.core.touched {
            self.core.revalidate(value);
        }
    }
}

impl InputField for DelegatedField {
    fn config(&self) -> &FieldConfig {
        &self.core.config
    }

    fn value(&self) -> &str {
        &self.mirror
    }

    fn error(&self) -> Option<&ValidationError> {
        self.core.error.as_ref()
    }

    fn is_touched(&self) -> bool {
        self.core.touched
    }

    fn on_change(&mut self, raw: &str) -> String {
        self.core.change(raw)
    }

    fn on_blur(&mut self, current: &str) -> String {
        self.core.blur(current);
        current.to_string()
    }
}
