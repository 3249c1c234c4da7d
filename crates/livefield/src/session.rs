// File: src/session.rs
// Purpose: Wires delegated fields to a form and routes input events

use crate::error::{ConfigError, FormError};
use crate::field::{DelegatedField, FieldConfig, FieldSnapshot, InputField};
use crate::form::{Form, FormSnapshot, SubmissionSink, SubmitOutcome};
use serde::Serialize;

/// Everything a renderer needs after an event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub form: FormSnapshot,
    pub fields: Vec<FieldSnapshot>,
}

/// A form plus one delegated field per declared field.
///
/// The form owns the values; each field mirrors its value and keeps its
/// own touched flag and inline error.
#[derive(Debug, Clone)]
pub struct FormSession {
    form: Form,
    configs: Vec<FieldConfig>,
    fields: Vec<DelegatedField>,
}

impl FormSession {
    /// `configs` must cover exactly the fields declared by `form`; they are
    /// reordered to match the form's declaration order.
    pub fn new(form: Form, mut configs: Vec<FieldConfig>) -> Result<Self, ConfigError> {
        for config in &configs {
            config.check()?;
            if form.rule(&config.name).is_none() {
                return Err(ConfigError::UndeclaredField(config.name.clone()));
            }
        }

        let mut ordered = Vec::with_capacity(configs.len());
        for name in form.field_names() {
            let idx = configs
                .iter()
                .position(|c| c.name == name)
                .ok_or_else(|| ConfigError::MissingFieldConfig(name.to_string()))?;
            ordered.push(configs.swap_remove(idx));
        }
        if let Some(extra) = configs.first() {
            return Err(ConfigError::DuplicateField(extra.name.clone()));
        }

        let fields = fresh_fields(&ordered, &form);
        Ok(Self {
            form,
            configs: ordered,
            fields,
        })
    }

    fn index_of(&self, name: &str) -> Result<usize, FormError> {
        self.configs
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }

    /// Raw keystroke input for `name`: sanitize and validate in the field,
    /// store in the form, then feed the stored value back to the field.
    pub fn change(&mut self, name: &str, raw: &str) -> Result<(), FormError> {
        let idx = self.index_of(name)?;
        let candidate = self.fields[idx].on_change(raw);
        self.form.set_value(name, &candidate)?;
        self.fields[idx].observe_external_value(&candidate);
        Ok(())
    }

    /// Focus left `name`.
    pub fn blur(&mut self, name: &str) -> Result<(), FormError> {
        let idx = self.index_of(name)?;
        let current = self.form.value(name).unwrap_or_default().to_string();
        let current = self.fields[idx].on_blur(&current);
        self.form.set_field_error_from_blur(name, &current)
    }

    pub fn submit(&mut self, sink: &mut dyn SubmissionSink) -> SubmitOutcome {
        self.form.submit(sink)
    }

    /// Clears the form and recreates every field, so all of them are
    /// pristine again.
    pub fn reset(&mut self) {
        self.form.reset();
        self.fields = fresh_fields(&self.configs, &self.form);
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn field(&self, name: &str) -> Option<&DelegatedField> {
        self.fields.iter().find(|f| f.name() == name)
    }

    pub fn fields(&self) -> impl Iterator<Item = &DelegatedField> {
        self.fields.iter()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            form: self.form.snapshot(),
            fields: self.fields.iter().map(|f| f.snapshot()).collect(),
        }
    }
}

fn fresh_fields(configs: &[FieldConfig], form: &Form) -> Vec<DelegatedField> {
    configs
        .iter()
        .map(|c| DelegatedField::new(c.clone(), form.value(&c.name).unwrap_or_default()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FieldRule;
    use crate::transform::InputTransform;
    use crate::validator::Validator;

    fn session() -> FormSession {
        let form = Form::builder()
            .field(FieldRule::required("name", "Name is required"))
            .field(FieldRule::optional("age").with_validator(Validator::age()))
            .build()
            .unwrap();
        let configs = vec![
            FieldConfig::new("age")
                .max_length(3)
                .transform(InputTransform::Digits)
                .validator(Validator::age()),
            FieldConfig::new("name").required(),
        ];
        FormSession::new(form, configs).unwrap()
    }

    #[test]
    fn test_configs_follow_form_order() {
        let s = session();
        let names: Vec<_> = s.fields().map(|f| f.name().to_string()).collect();
        assert_eq!(names, vec!["name", "age"]);
    }

    #[test]
    fn test_mismatched_configs_rejected() {
        let form = Form::builder()
            .field(FieldRule::optional("a"))
            .build()
            .unwrap();

        let err = FormSession::new(form.clone(), vec![]).unwrap_err();
        assert_eq!(err, ConfigError::MissingFieldConfig("a".to_string()));

        let err = FormSession::new(form, vec![FieldConfig::new("a"), FieldConfig::new("b")])
            .unwrap_err();
        assert_eq!(err, ConfigError::UndeclaredField("b".to_string()));
    }

    #[test]
    fn test_change_stores_sanitized_value() {
        let mut s = session();
        s.change("age", "4x2").unwrap();
        assert_eq!(s.form().value("age"), Some("42"));
        assert_eq!(s.field("age").unwrap().value(), "42");
    }

    #[test]
    fn test_blur_sets_both_error_levels() {
        let mut s = session();
        s.change("age", "300").unwrap();
        assert!(!s.field("age").unwrap().is_invalid());
        assert_eq!(s.form().error("age"), None);

        s.blur("age").unwrap();
        assert!(s.field("age").unwrap().is_invalid());
        assert!(s.form().error("age").is_some());

        // Typing clears the form-level error until the next blur
        s.change("age", "30").unwrap();
        assert_eq!(s.form().error("age"), None);
        assert!(s.field("age").unwrap().is_valid());
    }

    #[test]
    fn test_unknown_field() {
        let mut s = session();
        assert_eq!(
            s.change("email", "x"),
            Err(FormError::UnknownField("email".to_string()))
        );
        assert!(s.blur("email").is_err());
    }

    #[test]
    fn test_reset_makes_fields_pristine() {
        let mut s = session();
        s.blur("name").unwrap();
        s.change("age", "20").unwrap();
        s.reset();

        assert!(s.fields().all(|f| !f.is_touched() && f.error().is_none()));
        assert!(s.form().values().iter().all(|(_, v)| v.is_empty()));
    }
}
