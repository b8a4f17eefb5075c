//! Form session: validate, submit, notify, reset

use anyhow::Result;
use async_trait::async_trait;
use event_hub::api::{DispatchReceipt, SubmissionGateway, Transport};
use event_hub::forms::FormType;
use event_hub::notify::{RecordingNotifier, Severity};
use event_hub::session::{FormSession, SubmissionState, SubmitOutcome};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Counts calls and either answers 200 or fails like an unreachable host
struct CountingTransport {
    calls: AtomicUsize,
    fail: bool,
}

impl CountingTransport {
    fn new(fail: bool) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            fail,
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for CountingTransport {
    async fn post_json(&self, _url: &str, _body: String) -> Result<DispatchReceipt> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            anyhow::bail!("dns error: failed to lookup address information");
        }
        Ok(DispatchReceipt { status: Some(200) })
    }
}

fn gateway(transport: Arc<CountingTransport>) -> SubmissionGateway {
    SubmissionGateway::with_transport(Some("https://collector.test/exec".to_string()), transport)
}

fn filled_requirement() -> FormSession {
    let mut session = FormSession::new(FormType::Requirement);
    session.set_text("companyName", "Sunrise Events Pvt Ltd");
    session.set_text("contactPerson", "Meera Joshi");
    session.set_text("email", "meera@sunrise.example");
    session.set_text("phone", "9876543210");
    session.set_text("eventName", "Diwali Mela 2026");
    session.set_text("eventDate", "2026-11-08");
    session.set_text("eventLocation", "Nagpur");
    session.toggle_option("staffTypes", "volunteers");
    session.toggle_option("staffTypes", "anchors");
    session.set_text("volunteerCount", "30");
    session.set_text("anchorCount", "2");
    session
}

#[tokio::test]
async fn test_success_resets_once_and_notifies() {
    let transport = CountingTransport::new(false);
    let notifier = RecordingNotifier::new();
    let mut session = filled_requirement();

    let outcome = session.submit(&gateway(transport.clone()), &notifier).await.unwrap();

    let SubmitOutcome::Submitted(record) = outcome else {
        panic!("expected submission");
    };
    assert_eq!(record.form_type(), FormType::Requirement);
    assert_eq!(record.get("staffTypes"), Some("volunteers, anchors"));
    assert_eq!(record.get("porterCount"), Some("0"));
    assert!(record.timestamp().ends_with('Z'));

    assert_eq!(transport.calls(), 1);
    assert_eq!(session.reset_count(), 1);
    assert_eq!(session.state(), SubmissionState::Idle);
    assert_eq!(session.last_outcome(), Some(SubmissionState::Success));
    assert_eq!(session.values().text("companyName"), "");
    assert!(session.values().selection("staffTypes").is_empty());

    let received = notifier.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].title, "Requirement Posted Successfully!");
    assert_eq!(received[0].severity, Severity::Default);
}

#[tokio::test]
async fn test_transport_failure_keeps_values() {
    let transport = CountingTransport::new(true);
    let notifier = RecordingNotifier::new();
    let mut session = filled_requirement();
    let before = session.values().clone();

    let outcome = session.submit(&gateway(transport.clone()), &notifier).await.unwrap();

    assert!(matches!(outcome, SubmitOutcome::Failed(_)));
    assert_eq!(transport.calls(), 1);
    assert_eq!(session.reset_count(), 0);
    assert_eq!(session.values(), &before);
    assert_eq!(session.state(), SubmissionState::Idle);
    assert_eq!(session.last_outcome(), Some(SubmissionState::Failure));

    let received = notifier.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].title, "Submission Failed");
    assert!(received[0].is_destructive());
}

#[tokio::test]
async fn test_manual_resubmission_after_failure() {
    let failing = CountingTransport::new(true);
    let working = CountingTransport::new(false);
    let notifier = RecordingNotifier::new();
    let mut session = filled_requirement();

    let first = session.submit(&gateway(failing), &notifier).await.unwrap();
    let second = session.submit(&gateway(working.clone()), &notifier).await.unwrap();

    let (SubmitOutcome::Failed(first), SubmitOutcome::Submitted(second)) = (first, second) else {
        panic!("expected failure then success");
    };
    assert_eq!(first.fields(), second.fields());
    assert_eq!(working.calls(), 1);
    assert_eq!(session.reset_count(), 1);
    assert_eq!(notifier.received().len(), 2);
}

#[tokio::test]
async fn test_invalid_values_never_reach_gateway() {
    let transport = CountingTransport::new(false);
    let notifier = RecordingNotifier::new();
    let mut session = filled_requirement();
    session.set_text("contactPerson", "M");
    session.set_selection("staffTypes", Vec::new());

    let outcome = session.submit(&gateway(transport.clone()), &notifier).await.unwrap();

    let SubmitOutcome::Invalid(errors) = outcome else {
        panic!("expected validation errors");
    };
    assert_eq!(errors.get("contactPerson"), Some("Contact person name is required"));
    assert_eq!(errors.get("staffTypes"), Some("Please select at least one staff type"));
    assert_eq!(transport.calls(), 0);
    assert!(notifier.received().is_empty());
    assert_eq!(session.values().text("contactPerson"), "M");
    assert_eq!(session.last_outcome(), None);
}

#[tokio::test]
async fn test_stub_gateway_submits_any_valid_form() {
    let transport = CountingTransport::new(true);
    let stub = SubmissionGateway::with_transport(None, transport.clone())
        .with_stub_delay(Duration::from_millis(10));
    let notifier = RecordingNotifier::new();

    let mut session = FormSession::new(FormType::Contact);
    session.set_text("fullName", "Kabir");
    session.set_text("email", "a@b.com");
    session.set_text("phone", "+917724965509");
    session.set_text("subject", "career-opportunity");
    session.set_text("message", "Are there openings for anchors in Indore?");

    let outcome = session.submit(&stub, &notifier).await.unwrap();
    assert!(outcome.is_submitted());
    assert_eq!(transport.calls(), 0);
    assert_eq!(notifier.received()[0].title, "Message Sent Successfully!");
}

#[test]
fn test_counts_visible_only_for_selected_staff() {
    let session = filled_requirement();
    let counts: Vec<_> = session
        .visible_fields()
        .into_iter()
        .map(|f| f.name)
        .filter(|n| n.ends_with("Count"))
        .collect();
    assert_eq!(counts, vec!["volunteerCount", "anchorCount"]);
}
