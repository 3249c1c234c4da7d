// Validation pipeline properties that hold for any configuration.

use livefield::{FieldConfig, InputField, OwnedField, ValidationError, Validator};
use rstest::rstest;

fn reject_all() -> Validator {
    Validator::new("reject_all", |_| Err("rejected".to_string()))
}

#[rstest]
#[case(FieldConfig::new("a").required())]
#[case(FieldConfig::new("a").required().max_length(1))]
#[case(FieldConfig::new("a").required().validator(reject_all()))]
#[case(FieldConfig::new("a").required().max_length(2).validator(reject_all()))]
fn required_blank_is_always_missing(#[case] config: FieldConfig) {
    for value in ["", " ", "   \t"] {
        assert!(matches!(
            config.validate(value),
            Err(ValidationError::RequiredMissing(_))
        ));
    }
}

#[rstest]
#[case(FieldConfig::new("a"))]
#[case(FieldConfig::new("a").max_length(1))]
#[case(FieldConfig::new("a").validator(reject_all()))]
#[case(FieldConfig::new("a").max_length(1).validator(reject_all()))]
fn optional_empty_is_always_valid(#[case] config: FieldConfig) {
    assert_eq!(config.validate(""), Ok(()));
}

#[rstest]
#[case("")]
#[case("x")]
#[case("xxxxxxxx")]
fn validation_is_idempotent(#[case] value: &str) {
    let config = FieldConfig::new("a")
        .required()
        .max_length(4)
        .validator(reject_all());
    assert_eq!(config.validate(value), config.validate(value));

    let mut field = OwnedField::new(config);
    field.on_change(value);
    field.blur();
    let first = field.error().cloned();
    field.blur();
    assert_eq!(field.error().cloned(), first);
}

#[test]
fn never_valid_while_error_present() {
    let mut field = OwnedField::new(FieldConfig::new("a").validator(reject_all()));
    field.on_change("x");
    field.blur();
    assert!(field.is_invalid());
    assert!(!field.is_valid());
}
