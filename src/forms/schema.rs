//! Declarative field schemas, one per form type.
//!
//! All four forms are produced by the same [`SchemaBuilder`], so the shared
//! contact fields (name, email, phone) carry identical constraints everywhere.

use super::catalog;
use super::values::FieldValue;
use super::FormType;
use once_cell::sync::Lazy;

/// Accepted length of a phone number, digits and symbols counted as typed.
pub const PHONE_MIN_LEN: usize = 10;
pub const PHONE_MAX_LEN: usize = 15;

/// Default for staff count fields.
pub const DEFAULT_COUNT: &str = "0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
    Date,
    Choice,
    MultiChoice,
    LongText,
    Count,
}

impl FieldKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Phone => "phone",
            FieldKind::Date => "date",
            FieldKind::Choice => "choice",
            FieldKind::MultiChoice => "multi-choice",
            FieldKind::LongText => "long text",
            FieldKind::Count => "count",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Field is only shown while `option` is part of the selection in `field`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleWhen {
    pub field: &'static str,
    pub option: &'static str,
}

#[derive(Debug, Clone)]
pub struct FieldSchema {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub min_len: usize,
    pub max_len: Option<usize>,
    pub min_selected: usize,
    pub options: Vec<ChoiceOption>,
    pub visible_when: Option<VisibleWhen>,
    /// Shown when the field is missing, too short or malformed.
    pub message: &'static str,
}

impl FieldSchema {
    fn new(name: &'static str, label: &'static str, kind: FieldKind, message: &'static str) -> Self {
        Self {
            name,
            label,
            kind,
            min_len: 0,
            max_len: None,
            min_selected: 0,
            options: Vec::new(),
            visible_when: None,
            message,
        }
    }

    pub fn is_required(&self) -> bool {
        match self.kind {
            FieldKind::Email | FieldKind::Phone | FieldKind::Date | FieldKind::Choice => true,
            FieldKind::MultiChoice => self.min_selected > 0,
            FieldKind::Text | FieldKind::LongText => self.min_len > 0,
            FieldKind::Count => false,
        }
    }

    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.value == value)
    }

    pub fn option_label(&self, value: &str) -> Option<&'static str> {
        self.options.iter().find(|o| o.value == value).map(|o| o.label)
    }

    /// Value a freshly opened (or reset) form starts with.
    pub fn default_value(&self) -> FieldValue {
        match self.kind {
            FieldKind::MultiChoice => FieldValue::Selection(Vec::new()),
            FieldKind::Count => FieldValue::Text(DEFAULT_COUNT.to_string()),
            _ => FieldValue::Text(String::new()),
        }
    }

    /// Message for values longer than `max_len`.
    pub fn max_len_message(&self, max: usize) -> String {
        format!("{} must be at most {} characters", self.label, max)
    }
}

#[derive(Debug, Clone)]
pub struct FormSchema {
    pub form_type: FormType,
    fields: Vec<FieldSchema>,
}

impl FormSchema {
    pub fn builder(form_type: FormType) -> SchemaBuilder {
        SchemaBuilder::new(form_type)
    }

    /// Fields in display order.
    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Builds a [`FormSchema`] field by field.
#[derive(Debug)]
pub struct SchemaBuilder {
    form_type: FormType,
    fields: Vec<FieldSchema>,
}

impl SchemaBuilder {
    pub fn new(form_type: FormType) -> Self {
        Self {
            form_type,
            fields: Vec::new(),
        }
    }

    pub fn text(
        mut self,
        name: &'static str,
        label: &'static str,
        min_len: usize,
        max_len: usize,
        message: &'static str,
    ) -> Self {
        let mut field = FieldSchema::new(name, label, FieldKind::Text, message);
        field.min_len = min_len;
        field.max_len = Some(max_len);
        self.fields.push(field);
        self
    }

    pub fn long_text(
        mut self,
        name: &'static str,
        label: &'static str,
        min_len: usize,
        max_len: usize,
        message: &'static str,
    ) -> Self {
        let mut field = FieldSchema::new(name, label, FieldKind::LongText, message);
        field.min_len = min_len;
        field.max_len = Some(max_len);
        self.fields.push(field);
        self
    }

    /// The "Full Name" field shared by the booking, career and contact forms.
    pub fn full_name(self) -> Self {
        self.text("fullName", "Full Name", 2, 100, "Name must be at least 2 characters")
    }

    pub fn email(mut self) -> Self {
        self.fields.push(FieldSchema::new(
            "email",
            "Email Address",
            FieldKind::Email,
            "Please enter a valid email",
        ));
        self
    }

    pub fn phone(mut self) -> Self {
        let mut field = FieldSchema::new(
            "phone",
            "Phone Number",
            FieldKind::Phone,
            "Please enter a valid phone number",
        );
        field.min_len = PHONE_MIN_LEN;
        field.max_len = Some(PHONE_MAX_LEN);
        self.fields.push(field);
        self
    }

    pub fn date(mut self, name: &'static str, label: &'static str, message: &'static str) -> Self {
        let mut field = FieldSchema::new(name, label, FieldKind::Date, message);
        field.min_len = 1;
        self.fields.push(field);
        self
    }

    pub fn choice(
        mut self,
        name: &'static str,
        label: &'static str,
        options: &'static [(&'static str, &'static str)],
        message: &'static str,
    ) -> Self {
        let mut field = FieldSchema::new(name, label, FieldKind::Choice, message);
        field.min_len = 1;
        field.options = to_options(options);
        self.fields.push(field);
        self
    }

    pub fn multi_choice(
        mut self,
        name: &'static str,
        label: &'static str,
        options: &'static [(&'static str, &'static str)],
        min_selected: usize,
        message: &'static str,
    ) -> Self {
        let mut field = FieldSchema::new(name, label, FieldKind::MultiChoice, message);
        field.min_selected = min_selected;
        field.options = to_options(options);
        self.fields.push(field);
        self
    }

    /// Optional free-form count, shown while `visible_when` holds.
    pub fn count(mut self, name: &'static str, label: &'static str, visible_when: VisibleWhen) -> Self {
        let mut field = FieldSchema::new(name, label, FieldKind::Count, "");
        field.visible_when = Some(visible_when);
        self.fields.push(field);
        self
    }

    pub fn build(self) -> FormSchema {
        FormSchema {
            form_type: self.form_type,
            fields: self.fields,
        }
    }
}

fn to_options(options: &'static [(&'static str, &'static str)]) -> Vec<ChoiceOption> {
    options
        .iter()
        .map(|&(value, label)| ChoiceOption { value, label })
        .collect()
}

static BOOKING: Lazy<FormSchema> = Lazy::new(|| {
    SchemaBuilder::new(FormType::Booking)
        .full_name()
        .email()
        .phone()
        .choice("eventType", "Event Type", catalog::EVENT_TYPES, "Please select an event type")
        .date("eventDate", "Event Date", "Please select an event date")
        .choice("guestCount", "Expected Guests", catalog::GUEST_COUNTS, "Please select guest count")
        .text("venue", "Venue / Location", 2, 200, "Please enter venue details")
        .choice("budget", "Budget Range", catalog::BUDGET_RANGES, "Please select your budget range")
        .long_text(
            "requirements",
            "Event Requirements",
            10,
            1000,
            "Please describe your requirements (min 10 characters)",
        )
        .build()
});

static CAREER: Lazy<FormSchema> = Lazy::new(|| {
    SchemaBuilder::new(FormType::Career)
        .full_name()
        .email()
        .phone()
        .choice("position", "Position", catalog::POSITIONS, "Please select a position")
        .choice(
            "experience",
            "Experience Level",
            catalog::EXPERIENCE_LEVELS,
            "Please select your experience level",
        )
        .text("city", "City", 2, 50, "Please enter your city")
        .long_text(
            "about",
            "About Yourself",
            10,
            500,
            "Please tell us about yourself (min 10 characters)",
        )
        .build()
});

static CONTACT: Lazy<FormSchema> = Lazy::new(|| {
    SchemaBuilder::new(FormType::Contact)
        .full_name()
        .email()
        .phone()
        .choice("subject", "Subject", catalog::CONTACT_SUBJECTS, "Please select a subject")
        .long_text("message", "Message", 10, 1000, "Message must be at least 10 characters")
        .build()
});

static REQUIREMENT: Lazy<FormSchema> = Lazy::new(|| {
    let mut builder = SchemaBuilder::new(FormType::Requirement)
        .text(
            "companyName",
            "Company / Organisation Name",
            2,
            100,
            "Company name must be at least 2 characters",
        )
        .text("contactPerson", "Contact Person", 2, 100, "Contact person name is required")
        .email()
        .phone()
        .text("eventName", "Event Name", 2, 200, "Event name is required")
        .date("eventDate", "Event Date", "Please select an event date")
        .text("eventLocation", "Event Location", 2, 200, "Event location is required")
        .multi_choice(
            "staffTypes",
            "Staff Types Required",
            catalog::STAFF_TYPES,
            1,
            "Please select at least one staff type",
        );

    for &(option, name, label) in catalog::STAFF_COUNT_FIELDS {
        builder = builder.count(name, label, VisibleWhen { field: "staffTypes", option });
    }

    builder
        .long_text("additionalRequirements", "Additional Requirements", 0, 1000, "")
        .build()
});

/// The static schema for `form_type`.
pub fn schema(form_type: FormType) -> &'static FormSchema {
    match form_type {
        FormType::Booking => &*BOOKING,
        FormType::Career => &*CAREER,
        FormType::Contact => &*CONTACT,
        FormType::Requirement => &*REQUIREMENT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(form_type: FormType) -> Vec<&'static str> {
        schema(form_type).fields().iter().map(|f| f.name).collect()
    }

    #[test]
    fn test_field_order() {
        assert_eq!(
            names(FormType::Contact),
            vec!["fullName", "email", "phone", "subject", "message"]
        );
        assert_eq!(
            names(FormType::Career),
            vec!["fullName", "email", "phone", "position", "experience", "city", "about"]
        );
        assert_eq!(names(FormType::Booking).len(), 9);
        assert_eq!(
            names(FormType::Requirement),
            vec![
                "companyName",
                "contactPerson",
                "email",
                "phone",
                "eventName",
                "eventDate",
                "eventLocation",
                "staffTypes",
                "volunteerCount",
                "anchorCount",
                "logisticsCount",
                "porterCount",
                "productionCount",
                "additionalRequirements",
            ]
        );
    }

    #[test]
    fn test_shared_contact_fields_match() {
        for form_type in FormType::ALL {
            let phone = schema(form_type).field("phone").unwrap();
            assert_eq!(phone.min_len, PHONE_MIN_LEN);
            assert_eq!(phone.max_len, Some(PHONE_MAX_LEN));
            assert_eq!(schema(form_type).field("email").unwrap().kind, FieldKind::Email);
        }
    }

    #[test]
    fn test_required_flags() {
        let requirement = schema(FormType::Requirement);
        assert!(requirement.field("staffTypes").unwrap().is_required());
        assert!(!requirement.field("volunteerCount").unwrap().is_required());
        assert!(!requirement.field("additionalRequirements").unwrap().is_required());
        assert!(schema(FormType::Booking).field("eventDate").unwrap().is_required());
    }

    #[test]
    fn test_count_defaults_and_visibility() {
        let field = schema(FormType::Requirement).field("porterCount").unwrap();
        assert_eq!(field.default_value(), FieldValue::Text("0".to_string()));
        assert_eq!(
            field.visible_when,
            Some(VisibleWhen { field: "staffTypes", option: "porters" })
        );
    }

    #[test]
    fn test_option_labels() {
        let position = schema(FormType::Career).field("position").unwrap();
        assert_eq!(position.option_label("anchor"), Some("Anchor / Emcee"));
        assert!(!position.has_option("Anchor / Emcee"));
    }

    #[test]
    fn test_event_types_and_subjects_submit_slugs() {
        let event_type = schema(FormType::Booking).field("eventType").unwrap();
        let values: Vec<_> = event_type.options.iter().take(2).map(|o| o.value).collect();
        assert_eq!(values, vec!["wedding-ceremony", "wedding-reception"]);
        assert_eq!(event_type.option_label("corporate-conference"), Some("Corporate Conference"));

        let subject = schema(FormType::Contact).field("subject").unwrap();
        assert!(subject.has_option("event-booking-inquiry"));
        assert!(!subject.has_option("Event Booking Inquiry"));

        let guests = schema(FormType::Booking).field("guestCount").unwrap();
        assert!(guests.has_option("101-250"));
    }
}
