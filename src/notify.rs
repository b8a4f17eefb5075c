//! User-facing notifications
//!
//! Submission outcomes are reported through a [`Notifier`] handed to the
//! session, so each front end decides how a notification is shown.

use crate::forms::FormType;
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.severity == Severity::Destructive
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Keeps every notification it receives
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    received: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn received(&self) -> Vec<Notification> {
        self.received.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        if let Ok(mut received) = self.received.lock() {
            received.push(notification);
        }
    }
}

pub fn success_notification(form_type: FormType) -> Notification {
    let (title, description) = match form_type {
        FormType::Booking => (
            "Booking Request Submitted!",
            "Thank you for choosing The Event Hub. Our team will contact you within 24 hours.",
        ),
        FormType::Career => (
            "Application Submitted Successfully!",
            "Thank you for your interest. We will review your application and get back to you soon.",
        ),
        FormType::Contact => (
            "Message Sent Successfully!",
            "Thank you for contacting us. We will get back to you soon.",
        ),
        FormType::Requirement => (
            "Requirement Posted Successfully!",
            "Our team will review your requirements and connect you with suitable candidates.",
        ),
    };
    Notification::new(title, description, Severity::Default)
}

pub fn failure_notification(form_type: FormType) -> Notification {
    let action = match form_type {
        FormType::Booking => "submitting your request",
        FormType::Career => "submitting your application",
        FormType::Contact => "sending your message",
        FormType::Requirement => "posting your requirements",
    };
    Notification::new(
        "Submission Failed",
        format!("There was an error {}. Please try again.", action),
        Severity::Destructive,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_wording() {
        let n = failure_notification(FormType::Contact);
        assert_eq!(n.title, "Submission Failed");
        assert_eq!(n.description, "There was an error sending your message. Please try again.");
        assert!(n.is_destructive());
    }

    #[test]
    fn test_success_is_not_destructive() {
        for form_type in FormType::ALL {
            assert!(!success_notification(form_type).is_destructive());
        }
        assert_eq!(success_notification(FormType::Requirement).title, "Requirement Posted Successfully!");
    }

    #[test]
    fn test_recording_notifier() {
        let notifier = RecordingNotifier::new();
        notifier.notify(success_notification(FormType::Booking));
        notifier.notify(failure_notification(FormType::Booking));
        let received = notifier.received();
        assert_eq!(received.len(), 2);
        assert!(received[1].is_destructive());
    }
}
