use super::schema::{FieldKind, FormSchema};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Separator used when a multi-choice selection is flattened into one cell.
pub const SELECTION_SEPARATOR: &str = ", ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Selection(Vec<String>),
}

impl FieldValue {
    /// Flat string sent to the collector.
    pub fn to_wire(&self) -> String {
        match self {
            FieldValue::Text(text) => text.clone(),
            FieldValue::Selection(items) => items.join(SELECTION_SEPARATOR),
        }
    }
}

/// Live values of one form fill, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    values: BTreeMap<String, FieldValue>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every field of `schema` at its default.
    pub fn defaults(schema: &FormSchema) -> Self {
        let values = schema
            .fields()
            .iter()
            .map(|f| (f.name.to_string(), f.default_value()))
            .collect();
        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Text of a field; empty when unset or when the field holds a selection.
    pub fn text(&self, name: &str) -> &str {
        match self.values.get(name) {
            Some(FieldValue::Text(text)) => text,
            _ => "",
        }
    }

    /// Selected options of a field; empty when unset or when the field holds text.
    pub fn selection(&self, name: &str) -> &[String] {
        match self.values.get(name) {
            Some(FieldValue::Selection(items)) => items,
            _ => &[],
        }
    }

    pub fn is_selected(&self, name: &str, option: &str) -> bool {
        self.selection(name).iter().any(|s| s == option)
    }

    pub fn set_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), FieldValue::Text(value.into()));
    }

    pub fn set_selection(&mut self, name: impl Into<String>, items: Vec<String>) {
        self.values.insert(name.into(), FieldValue::Selection(items));
    }

    /// Adds `option` to the selection of `name`, or removes it if present.
    pub fn toggle(&mut self, name: &str, option: &str) {
        let mut items = self.selection(name).to_vec();
        if let Some(pos) = items.iter().position(|s| s == option) {
            items.remove(pos);
        } else {
            items.push(option.to_string());
        }
        self.set_selection(name, items);
    }

    /// Assigns raw user input to a field of `schema`.
    ///
    /// Multi-choice input is comma separated. Unknown field names are rejected.
    pub fn assign(&mut self, schema: &FormSchema, name: &str, raw: &str) -> Result<()> {
        let field = schema.field(name).ok_or_else(|| {
            anyhow::anyhow!("Unknown field '{}' for form '{}'", name, schema.form_type)
        })?;

        if field.kind == FieldKind::MultiChoice {
            let items = raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            self.set_selection(field.name, items);
        } else {
            self.set_text(field.name, raw);
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}
