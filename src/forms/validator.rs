//! Pure, synchronous validation of form values against a schema.

use super::schema::{FieldKind, FieldSchema, FormSchema};
use super::values::{FieldValue, FormValues};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^([A-Za-z0-9_'+-]+\.)*[A-Za-z0-9_'+-]*[A-Za-z0-9_+-]@([A-Za-z0-9][A-Za-z0-9-]*\.)+[A-Za-z]{2,}$",
    )
    .expect("email pattern is valid")
});

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Every field that failed validation, in schema order, one message each.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} field(s) failed validation", self.errors.len())?;
        for error in &self.errors {
            write!(f, "\n  {}: {}", error.field, error.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Checks `values` against every field of `schema`.
///
/// Missing fields are treated as empty and unknown keys are ignored. Fields
/// hidden by a visibility condition are validated like any other.
pub fn validate(schema: &FormSchema, values: &FormValues) -> Result<(), ValidationErrors> {
    let errors: Vec<FieldError> = schema
        .fields()
        .iter()
        .filter_map(|field| {
            check_field(field, values.get(field.name)).map(|message| FieldError {
                field: field.name,
                message,
            })
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors { errors })
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

fn check_field(field: &FieldSchema, value: Option<&FieldValue>) -> Option<String> {
    if field.kind == FieldKind::MultiChoice {
        let selected: &[String] = match value {
            Some(FieldValue::Selection(items)) => items,
            _ => &[],
        };
        return check_selection(field, selected);
    }

    let text = match value {
        Some(FieldValue::Text(text)) => text.as_str(),
        Some(FieldValue::Selection(_)) => return Some(field.message.to_string()),
        None => "",
    };

    match field.kind {
        FieldKind::Email => (!is_valid_email(text)).then(|| field.message.to_string()),
        FieldKind::Date => NaiveDate::parse_from_str(text, DATE_FORMAT)
            .is_err()
            .then(|| field.message.to_string()),
        FieldKind::Choice => (!field.has_option(text)).then(|| field.message.to_string()),
        FieldKind::Count => None,
        FieldKind::Text | FieldKind::LongText => check_length(field, text),
        FieldKind::Phone => check_phone(field, text),
        FieldKind::MultiChoice => unreachable!("handled above"),
    }
}

fn check_length(field: &FieldSchema, text: &str) -> Option<String> {
    let len = text.chars().count();

    if field.min_len > 0 && (text.trim().is_empty() || len < field.min_len) {
        return Some(field.message.to_string());
    }
    match field.max_len {
        Some(max) if len > max => Some(field.max_len_message(max)),
        _ => None,
    }
}

/// Phone numbers are measured exactly as entered, whitespace included.
fn check_phone(field: &FieldSchema, text: &str) -> Option<String> {
    let len = text.chars().count();
    let too_long = field.max_len.is_some_and(|max| len > max);
    (len < field.min_len || too_long).then(|| field.message.to_string())
}

fn check_selection(field: &FieldSchema, selected: &[String]) -> Option<String> {
    if selected.len() < field.min_selected {
        return Some(field.message.to_string());
    }
    selected
        .iter()
        .find(|s| !field.has_option(s))
        .map(|s| format!("Unknown option '{}' for {}", s, field.label))
}
