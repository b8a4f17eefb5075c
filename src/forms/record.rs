//! The flat envelope posted to the collector endpoint.

use super::schema::FormSchema;
use super::values::FormValues;
use super::FormType;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const FORM_TYPE_KEY: &str = "formType";
pub const TIMESTAMP_KEY: &str = "timestamp";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    ReservedKey(String),
}

impl std::fmt::Display for RecordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordError::ReservedKey(key) => write!(f, "'{}' is reserved and cannot be used as a field name", key),
        }
    }
}

impl std::error::Error for RecordError {}

/// One submission: `formType`, `timestamp`, and every form field as a string.
///
/// Serializes to a single flat JSON object, e.g.
/// `{"formType":"Contact Form","timestamp":"2026-10-16T09:30:00.000Z","email":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormRecord {
    #[serde(rename = "formType")]
    form_type: FormType,
    timestamp: String,
    #[serde(flatten)]
    fields: BTreeMap<String, String>,
}

impl FormRecord {
    pub fn new(form_type: FormType, timestamp: impl Into<String>) -> Self {
        Self {
            form_type,
            timestamp: timestamp.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Normalises validated `values` into a record stamped with `at`.
    ///
    /// Only fields declared by `schema` are carried; selections are joined
    /// with `", "`. Callers are expected to have run the validator first.
    pub fn from_values(schema: &FormSchema, values: &FormValues, at: DateTime<Utc>) -> Self {
        let mut record = Self::new(schema.form_type, format_timestamp(at));
        for field in schema.fields() {
            let value = values
                .get(field.name)
                .cloned()
                .unwrap_or_else(|| field.default_value());
            record.fields.insert(field.name.to_string(), value.to_wire());
        }
        record
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Result<(), RecordError> {
        let name = name.into();
        if name == FORM_TYPE_KEY || name == TIMESTAMP_KEY {
            return Err(RecordError::ReservedKey(name));
        }
        self.fields.insert(name, value.into());
        Ok(())
    }

    pub fn form_type(&self) -> FormType {
        self.form_type
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// ISO-8601 UTC with millisecond precision, e.g. `2026-10-16T09:30:00.000Z`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
