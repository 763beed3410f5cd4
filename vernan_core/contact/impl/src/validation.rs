use std::sync::LazyLock;

use regex::Regex;
use vernan_models::{
    field::FieldName,
    form::{ErrorMap, FormState},
};

/// Constraints a single field has to satisfy.
///
/// `message` is reported for every violation except a missing required value.
#[derive(Debug)]
pub struct ValidationRule {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<Regex>,
    pub message: &'static str,
}

static NAME_RULE: LazyLock<ValidationRule> = LazyLock::new(|| ValidationRule {
    required: true,
    min_length: Some(2),
    max_length: Some(100),
    pattern: None,
    message: "Name must be between 2 and 100 characters",
});

static EMAIL_RULE: LazyLock<ValidationRule> = LazyLock::new(|| ValidationRule {
    required: true,
    min_length: None,
    max_length: None,
    pattern: Some(Regex::new(r"^\S+@\S+\.\S+$").unwrap()),
    message: "Please enter a valid email address",
});

static PHONE_RULE: LazyLock<ValidationRule> = LazyLock::new(|| ValidationRule {
    required: true,
    min_length: None,
    max_length: None,
    pattern: Some(Regex::new(r"^\+?[0-9]{7,15}$").unwrap()),
    message: "Phone must be 7-15 digits (optional + prefix)",
});

static MESSAGE_RULE: LazyLock<ValidationRule> = LazyLock::new(|| ValidationRule {
    required: true,
    min_length: Some(10),
    max_length: Some(1000),
    pattern: None,
    message: "Message must be between 10 and 1000 characters",
});

pub fn rule(field: FieldName) -> &'static ValidationRule {
    match field {
        FieldName::Name => &*NAME_RULE,
        FieldName::Email => &*EMAIL_RULE,
        FieldName::Phone => &*PHONE_RULE,
        FieldName::Message => &*MESSAGE_RULE,
    }
}

/// Validate a single value and return the error message, or an empty string
/// if the value is valid.
///
/// Checks run in the order required, minimum length, maximum length, pattern,
/// and only the first failing check is reported. Lengths are counted in UTF-16
/// code units, like a browser's `value.length`.
pub fn validate(field: FieldName, value: &str) -> String {
    let rule = rule(field);

    if rule.required && is_blank(value) {
        return format!("{} is required", field.title());
    }

    let length = value.encode_utf16().count();
    let violated = rule.min_length.is_some_and(|min| length < min)
        || rule.max_length.is_some_and(|max| length > max)
        || rule
            .pattern
            .as_ref()
            .is_some_and(|pattern| !pattern.is_match(value));

    if violated {
        rule.message.into()
    } else {
        String::new()
    }
}

/// Blank after trimming whitespace and byte order marks.
fn is_blank(value: &str) -> bool {
    value
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .is_empty()
}

/// Validate every field of the form.
pub fn validate_all(values: &FormState) -> ErrorMap {
    values
        .iter()
        .map(|(field, value)| (field, validate(field, value)))
        .collect()
}
