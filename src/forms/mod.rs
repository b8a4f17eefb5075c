//! Lead-capture forms
//!
//! Each form the site exposes (event booking, career application, contact,
//! manpower requirement) is described by a static [`FormSchema`]. Input is
//! collected into [`FormValues`], checked by [`validate`], and normalised into
//! the flat [`FormRecord`] envelope that the collector endpoint receives.

pub mod catalog;
pub mod record;
pub mod schema;
pub mod validator;
pub mod values;
pub mod visibility;

pub use record::{FormRecord, RecordError, FORM_TYPE_KEY, TIMESTAMP_KEY};
pub use schema::{schema, ChoiceOption, FieldKind, FieldSchema, FormSchema, SchemaBuilder, VisibleWhen};
pub use validator::{validate, FieldError, ValidationErrors};
pub use values::{FieldValue, FormValues};
pub use visibility::{is_visible, visible_fields};

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The closed set of forms a submission can belong to.
///
/// The serialized form is the tag the collector spreadsheet files rows under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormType {
    #[serde(rename = "Event Booking")]
    Booking,
    #[serde(rename = "Career Application")]
    Career,
    #[serde(rename = "Contact Form")]
    Contact,
    #[serde(rename = "Manpower Requirement")]
    Requirement,
}

impl FormType {
    pub const ALL: [FormType; 4] = [
        FormType::Booking,
        FormType::Career,
        FormType::Contact,
        FormType::Requirement,
    ];

    /// Tag written into the `formType` key of every record.
    pub fn wire_name(self) -> &'static str {
        match self {
            FormType::Booking => "Event Booking",
            FormType::Career => "Career Application",
            FormType::Contact => "Contact Form",
            FormType::Requirement => "Manpower Requirement",
        }
    }

    /// Short name used on the command line.
    pub fn slug(self) -> &'static str {
        match self {
            FormType::Booking => "booking",
            FormType::Career => "career",
            FormType::Contact => "contact",
            FormType::Requirement => "requirement",
        }
    }
}

impl std::fmt::Display for FormType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for FormType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.slug().eq_ignore_ascii_case(s) || t.wire_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| anyhow::anyhow!("Unknown form type: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&FormType::Requirement).unwrap(),
            "\"Manpower Requirement\""
        );
        let parsed: FormType = serde_json::from_str("\"Contact Form\"").unwrap();
        assert_eq!(parsed, FormType::Contact);
    }

    #[test]
    fn test_form_type_from_str() {
        assert_eq!("booking".parse::<FormType>().unwrap(), FormType::Booking);
        assert_eq!("Career Application".parse::<FormType>().unwrap(), FormType::Career);
        assert!("newsletter".parse::<FormType>().is_err());
    }
}
