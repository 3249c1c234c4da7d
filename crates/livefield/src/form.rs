// File: src/form.rs
// Purpose: Form coordinator - aggregate values/errors and submit eligibility

use crate::error::{ConfigError, FormError};
use crate::field_map::FieldMap;
use crate::validator::Validator;
use livefield_validation::is_blank;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Whether a field must be filled for the form to submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    Optional,
    Required { message: String },
}

/// Form-level rule for one field.
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub name: String,
    pub validator: Option<Validator>,
    pub requirement: Requirement,
}

impl FieldRule {
    pub fn optional(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            validator: None,
            requirement: Requirement::Optional,
        }
    }

    pub fn required(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            validator: None,
            requirement: Requirement::Required {
                message: message.into(),
            },
        }
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn is_required(&self) -> bool {
        matches!(self.requirement, Requirement::Required { .. })
    }

    /// Blur-time check: the registered validator only.
    fn blur_error(&self, value: &str) -> Option<String> {
        self.validator.as_ref().and_then(|v| v.check(value).err())
    }

    /// Submit-time check.
    ///
    /// Required fields run their validator first so a malformed value
    /// reports the specific problem; an empty value then reports the
    /// required message. Optional fields are only validated when non-empty.
    fn submit_error(&self, value: &str) -> Option<String> {
        match &self.requirement {
            Requirement::Required { message } => {
                if let Some(err) = self.blur_error(value) {
                    return Some(err);
                }
                is_blank(value).then(|| message.clone())
            }
            Requirement::Optional if value.is_empty() => None,
            Requirement::Optional => self.blur_error(value),
        }
    }
}

/// Receives the values of a successfully validated form.
pub trait SubmissionSink {
    fn submit(&mut self, values: &FieldMap);
}

impl<F: FnMut(&FieldMap)> SubmissionSink for F {
    fn submit(&mut self, values: &FieldMap) {
        self(values)
    }
}

/// Sink that only logs the submitted values.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn submit(&mut self, values: &FieldMap) {
        info!(?values, "form submitted");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Values were handed to the sink
    Accepted,
    /// Submission blocked; the form's error map holds the reasons
    Rejected { error_count: usize },
}

/// Aggregate state a renderer consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSnapshot {
    pub values: FieldMap,
    pub errors: FieldMap,
    pub submit_attempted: bool,
    pub submit_succeeded: bool,
}

#[derive(Debug, Default)]
pub struct FormBuilder {
    rules: Vec<FieldRule>,
}

impl FormBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, rule: FieldRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn build(self) -> Result<Form, ConfigError> {
        if self.rules.is_empty() {
            return Err(ConfigError::NoFields);
        }

        for (idx, rule) in self.rules.iter().enumerate() {
            if rule.name.trim().is_empty() {
                return Err(ConfigError::EmptyName);
            }
            if self.rules[..idx].iter().any(|r| r.name == rule.name) {
                return Err(ConfigError::DuplicateField(rule.name.clone()));
            }
        }

        let values = empty_values(&self.rules);
        Ok(Form {
            rules: self.rules,
            values,
            errors: FieldMap::new(),
            submit_attempted: false,
            submit_succeeded: false,
        })
    }
}

fn empty_values(rules: &[FieldRule]) -> FieldMap {
    rules.iter().map(|r| (r.name.as_str(), "")).collect()
}

/// Owns every field's value and the form-level error map.
#[derive(Debug, Clone)]
pub struct Form {
    rules: Vec<FieldRule>,
    values: FieldMap,
    errors: FieldMap,
    submit_attempted: bool,
    submit_succeeded: bool,
}

impl Form {
    pub fn builder() -> FormBuilder {
        FormBuilder::new()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.name.as_str())
    }

    pub fn rule(&self, field: &str) -> Option<&FieldRule> {
        self.rules.iter().find(|r| r.name == field)
    }

    pub fn values(&self) -> &FieldMap {
        &self.values
    }

    pub fn errors(&self) -> &FieldMap {
        &self.errors
    }

    pub fn value(&self, field: &str) -> Option<&str> {
        self.values.get(field)
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn submit_attempted(&self) -> bool {
        self.submit_attempted
    }

    pub fn submit_succeeded(&self) -> bool {
        self.submit_succeeded
    }

    fn known_rule(&self, field: &str) -> Result<&FieldRule, FormError> {
        self.rule(field).ok_or_else(|| {
            warn!(field, "event for undeclared field");
            FormError::UnknownField(field.to_string())
        })
    }

    /// Stores a new value. The field's form-level error is cleared and
    /// only comes back on the next blur or submit.
    pub fn set_value(&mut self, field: &str, value: &str) -> Result<(), FormError> {
        self.known_rule(field)?;
        self.values.insert(field, value);
        self.errors.remove(field);
        self.submit_succeeded = false;
        Ok(())
    }

    /// Runs the field's registered validator and records the outcome.
    pub fn set_field_error_from_blur(&mut self, field: &str, value: &str) -> Result<(), FormError> {
        let error = self.known_rule(field)?.blur_error(value);
        debug!(field, ?error, "blur validation");
        match error {
            Some(msg) => self.errors.insert(field, msg),
            None => {
                self.errors.remove(field);
            }
        }
        Ok(())
    }

    /// Validates every field against the current values without touching
    /// any state.
    pub fn validate_all(&self) -> FieldMap {
        let mut errors = FieldMap::new();
        for rule in &self.rules {
            let value = self.values.get(&rule.name).unwrap_or_default();
            if let Some(msg) = rule.submit_error(value) {
                errors.insert(rule.name.as_str(), msg);
            }
        }
        errors
    }

    /// Re-validates everything. Any error blocks the submission and
    /// replaces the error map; otherwise the values go to `sink` once.
    pub fn submit(&mut self, sink: &mut dyn SubmissionSink) -> SubmitOutcome {
        self.submit_attempted = true;
        let errors = self.validate_all();

        if !errors.is_empty() {
            let error_count = errors.len();
            info!(error_count, "submission blocked");
            self.errors = errors;
            self.submit_succeeded = false;
            return SubmitOutcome::Rejected { error_count };
        }

        self.errors.clear();
        self.submit_succeeded = true;
        info!("submission accepted");
        sink.submit(&self.values);
        SubmitOutcome::Accepted
    }

    /// Back to the freshly built state.
    pub fn reset(&mut self) {
        self.values = empty_values(&self.rules);
        self.errors = FieldMap::new();
        self.submit_attempted = false;
        self.submit_succeeded = false;
        info!("form reset");
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            values: self.values.clone(),
            errors: self.errors.clone(),
            submit_attempted: self.submit_attempted,
            submit_succeeded: self.submit_succeeded,
        }
    }
}
