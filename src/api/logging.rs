//! Structured log lines for submissions
//!
//! Every submission gets a random id so the started/completed lines of one
//! attempt can be matched up in `event-hub.log`.

use crate::forms::FormType;
use log::{error, info, warn};
use serde_json::json;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Tracking state for one gateway call
#[derive(Debug, Clone)]
pub struct SubmissionContext {
    pub submission_id: String,
    pub form_type: FormType,
    /// "stub" or the delivery mode in use
    pub mode: &'static str,
    pub start_time: Instant,
}

impl SubmissionContext {
    pub fn start(form_type: FormType, mode: &'static str, endpoint: Option<&str>) -> Self {
        let context = Self {
            submission_id: Uuid::new_v4().to_string(),
            form_type,
            mode,
            start_time: Instant::now(),
        };

        let log_data = json!({
            "event": "submission_started",
            "submission_id": context.submission_id,
            "form_type": form_type.wire_name(),
            "mode": mode,
            "endpoint": endpoint.map(redact_endpoint),
            "timestamp": chrono::Utc::now().to_rfc3339()
        });
        info!("Submission Started: {}", log_data);

        context
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn complete(&self, success: bool, status_code: Option<u16>, error_message: Option<String>) {
        let log_data = json!({
            "event": "submission_completed",
            "submission_id": self.submission_id,
            "form_type": self.form_type.wire_name(),
            "mode": self.mode,
            "success": success,
            "status_code": status_code,
            "error_message": error_message,
            "duration_ms": self.elapsed().as_millis(),
            "timestamp": chrono::Utc::now().to_rfc3339()
        });

        if success {
            info!("Submission Completed: {}", log_data);
        } else {
            error!("Submission Failed: {}", log_data);
        }
    }

    /// A response arrived but its status says the collector did not accept it.
    pub fn log_unconfirmed(&self, status_code: u16) {
        let log_data = json!({
            "event": "delivery_unconfirmed",
            "submission_id": self.submission_id,
            "form_type": self.form_type.wire_name(),
            "status_code": status_code,
        });
        warn!("Collector Status Not Successful: {}", log_data);
    }
}

/// Keep scheme and host only; script deployment ids in the path act as keys.
pub fn redact_endpoint(url: &str) -> String {
    match reqwest::Url::parse(url) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) => format!("{}://{}/[REDACTED]", parsed.scheme(), host),
            None => "[REDACTED]".to_string(),
        },
        Err(_) => "[REDACTED]".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_creation() {
        let context = SubmissionContext::start(FormType::Contact, "optimistic", None);
        assert_eq!(context.form_type, FormType::Contact);
        assert_eq!(context.mode, "optimistic");
        assert!(Uuid::parse_str(&context.submission_id).is_ok());
    }

    #[test]
    fn test_submission_ids_are_unique() {
        let a = SubmissionContext::start(FormType::Career, "stub", None);
        let b = SubmissionContext::start(FormType::Career, "stub", None);
        assert_ne!(a.submission_id, b.submission_id);
    }

    #[test]
    fn test_endpoint_redaction() {
        assert_eq!(
            redact_endpoint("https://script.google.com/macros/s/AKfy-secret/exec"),
            "https://script.google.com/[REDACTED]"
        );
        assert_eq!(redact_endpoint("not a url"), "[REDACTED]");
    }
}
