//! Which fields are shown for the current values.
//!
//! A view concern only: the validator ignores visibility entirely.

use super::schema::{FieldSchema, FormSchema};
use super::values::FormValues;

pub fn is_visible(field: &FieldSchema, values: &FormValues) -> bool {
    match field.visible_when {
        Some(cond) => values.is_selected(cond.field, cond.option),
        None => true,
    }
}

/// Fields of `schema` to render for `values`, in display order.
pub fn visible_fields<'a>(schema: &'a FormSchema, values: &FormValues) -> Vec<&'a FieldSchema> {
    schema
        .fields()
        .iter()
        .filter(|f| is_visible(f, values))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{schema, validate, FormType};

    fn counts_shown(values: &FormValues) -> Vec<&'static str> {
        visible_fields(schema(FormType::Requirement), values)
            .into_iter()
            .map(|f| f.name)
            .filter(|n| n.ends_with("Count"))
            .collect()
    }

    #[test]
    fn test_counts_hidden_without_selection() {
        let values = FormValues::defaults(schema(FormType::Requirement));
        assert!(counts_shown(&values).is_empty());
        assert_eq!(
            visible_fields(schema(FormType::Requirement), &values).len(),
            schema(FormType::Requirement).fields().len() - 5
        );
    }

    #[test]
    fn test_counts_follow_selection() {
        let mut values = FormValues::defaults(schema(FormType::Requirement));
        values.toggle("staffTypes", "porters");
        values.toggle("staffTypes", "volunteers");
        assert_eq!(counts_shown(&values), vec!["volunteerCount", "porterCount"]);

        values.toggle("staffTypes", "porters");
        assert_eq!(counts_shown(&values), vec!["volunteerCount"]);
    }

    #[test]
    fn test_other_forms_show_everything() {
        let values = FormValues::new();
        for form_type in [FormType::Booking, FormType::Career, FormType::Contact] {
            let schema = schema(form_type);
            assert_eq!(visible_fields(schema, &values).len(), schema.fields().len());
        }
    }

    #[test]
    fn test_hidden_counts_still_validated_as_optional() {
        let schema = schema(FormType::Requirement);
        let mut values = FormValues::defaults(schema);
        values.set_text("anchorCount", "lots");
        let errors = validate(schema, &values).unwrap_err();
        assert!(!errors.contains("anchorCount"));
    }
}
