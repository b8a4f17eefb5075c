//! Per-form submission state
//!
//! A [`FormSession`] owns the values of one form fill and moves through
//! `Idle -> Submitting -> {Success, Failure}`. Success clears the values and
//! returns to `Idle`; failure returns to `Idle` with the values intact so the
//! user can resubmit by hand.

use crate::api::SubmissionGateway;
use crate::forms::{
    schema, validate, visible_fields, FieldSchema, FormRecord, FormSchema, FormType, FormValues,
    ValidationErrors,
};
use crate::notify::{failure_notification, success_notification, Notifier};
use chrono::Utc;
use log::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Gateway accepted the record; the form has been reset.
    Submitted(FormRecord),
    /// Gateway reported failure; values are kept.
    Failed(FormRecord),
    /// Nothing was sent.
    Invalid(ValidationErrors),
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    AlreadySubmitting,
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::AlreadySubmitting => write!(f, "A submission is already in progress"),
        }
    }
}

impl std::error::Error for SessionError {}

#[derive(Debug, Clone)]
pub struct FormSession {
    schema: &'static FormSchema,
    values: FormValues,
    state: SubmissionState,
    last_outcome: Option<SubmissionState>,
    resets: u32,
}

impl FormSession {
    pub fn new(form_type: FormType) -> Self {
        let schema = schema(form_type);
        Self {
            schema,
            values: FormValues::defaults(schema),
            state: SubmissionState::Idle,
            last_outcome: None,
            resets: 0,
        }
    }

    pub fn form_type(&self) -> FormType {
        self.schema.form_type
    }

    pub fn schema(&self) -> &'static FormSchema {
        self.schema
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut FormValues {
        &mut self.values
    }

    pub fn set_text(&mut self, name: &str, value: impl Into<String>) {
        self.values.set_text(name, value);
    }

    pub fn set_selection(&mut self, name: &str, items: Vec<String>) {
        self.values.set_selection(name, items);
    }

    pub fn toggle_option(&mut self, name: &str, option: &str) {
        self.values.toggle(name, option);
    }

    /// Fields to show for the current values.
    pub fn visible_fields(&self) -> Vec<&'static FieldSchema> {
        visible_fields(self.schema, &self.values)
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// `Success` or `Failure` of the most recent dispatched submission.
    pub fn last_outcome(&self) -> Option<SubmissionState> {
        self.last_outcome
    }

    /// How many times the form has been cleared.
    pub fn reset_count(&self) -> u32 {
        self.resets
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        validate(self.schema, &self.values)
    }

    /// Clears every field back to its default.
    pub fn reset(&mut self) {
        self.values = FormValues::defaults(self.schema);
        self.state = SubmissionState::Idle;
        self.resets += 1;
    }

    /// Validates, stamps and sends the current values.
    ///
    /// Exactly one notification is emitted for a dispatched submission. Invalid
    /// values produce no notification and never reach the gateway.
    pub async fn submit(
        &mut self,
        gateway: &SubmissionGateway,
        notifier: &dyn Notifier,
    ) -> Result<SubmitOutcome, SessionError> {
        if self.is_submitting() {
            return Err(SessionError::AlreadySubmitting);
        }

        if let Err(errors) = self.validate() {
            debug!("{} blocked by {} invalid field(s)", self.form_type(), errors.len());
            return Ok(SubmitOutcome::Invalid(errors));
        }

        let record = FormRecord::from_values(self.schema, &self.values, Utc::now());
        self.state = SubmissionState::Submitting;

        if gateway.submit(&record).await {
            info!("{} submitted", self.form_type());
            self.state = SubmissionState::Success;
            self.last_outcome = Some(SubmissionState::Success);
            notifier.notify(success_notification(self.form_type()));
            self.reset();
            Ok(SubmitOutcome::Submitted(record))
        } else {
            warn!("{} submission failed, keeping values for retry", self.form_type());
            self.state = SubmissionState::Failure;
            self.last_outcome = Some(SubmissionState::Failure);
            notifier.notify(failure_notification(self.form_type()));
            self.state = SubmissionState::Idle;
            Ok(SubmitOutcome::Failed(record))
        }
    }
}
