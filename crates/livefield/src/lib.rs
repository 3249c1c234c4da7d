// Livefield - headless form fields with inline, real-time validation
//
// A field validates on every change and on blur, but only shows errors
// once touched. A form owns the values, clears a field's error while the
// user types and re-validates everything on submit.

pub mod config;
pub mod error;
pub mod field;
pub mod field_map;
pub mod form;
pub mod registration;
pub mod session;
pub mod transform;
pub mod validator;

// Re-export core types
pub use config::Config;
pub use error::{ConfigError, FormError, ValidationError};
pub use field::{
    CounterLevel, DelegatedField, DisplayState, FieldConfig, FieldPhase, FieldSnapshot,
    InputField, OwnedField,
};
pub use field_map::FieldMap;
pub use form::{
    FieldRule, Form, FormBuilder, FormSnapshot, LogSink, Requirement, SubmissionSink,
    SubmitOutcome,
};
pub use session::{FormSession, SessionSnapshot};
pub use transform::InputTransform;
pub use validator::Validator;

// Re-export the validator functions
pub use livefield_validation as validation;
