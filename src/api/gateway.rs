//! Submission gateway
//!
//! Posts a [`FormRecord`] to the collector endpoint and reports a boolean
//! outcome. Without an endpoint it runs in stub mode: it waits a fixed delay
//! and reports success, so forms can be exercised offline.
//!
//! The collector (a spreadsheet-backed script) gives no usable
//! acknowledgement, so in [`DeliveryMode::Optimistic`] any response counts as
//! delivered and only transport failures are reported. That means a server-side
//! rejection still reads as success. [`DeliveryMode::Confirmed`] requires a
//! 2xx status instead.

use super::client::CollectorClient;
use super::constants::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_STUB_DELAY_MS};
use super::logging::SubmissionContext;
use super::transport::Transport;
use crate::forms::FormRecord;
use anyhow::Result;
use log::debug;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMode {
    /// Dispatched without a transport error counts as success.
    #[default]
    Optimistic,
    /// Only a 2xx response counts as success.
    Confirmed,
}

impl DeliveryMode {
    pub fn as_str(self) -> &'static str {
        match self {
            DeliveryMode::Optimistic => "optimistic",
            DeliveryMode::Confirmed => "confirmed",
        }
    }
}

impl std::fmt::Display for DeliveryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeliveryMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "optimistic" => Ok(DeliveryMode::Optimistic),
            "confirmed" => Ok(DeliveryMode::Confirmed),
            _ => anyhow::bail!("Unknown delivery mode '{}' (expected 'optimistic' or 'confirmed')", s),
        }
    }
}

/// Everything needed to build a [`SubmissionGateway`] over HTTP
#[derive(Debug, Clone)]
pub struct GatewaySettings {
    pub endpoint: Option<String>,
    pub stub_delay: Duration,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    pub delivery_mode: DeliveryMode,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            endpoint: None,
            stub_delay: Duration::from_millis(DEFAULT_STUB_DELAY_MS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            delivery_mode: DeliveryMode::default(),
        }
    }
}

#[derive(Clone)]
pub struct SubmissionGateway {
    endpoint: Option<String>,
    transport: Arc<dyn Transport>,
    stub_delay: Duration,
    delivery_mode: DeliveryMode,
}

impl SubmissionGateway {
    /// Gateway over HTTP using [`CollectorClient`]
    pub fn new(settings: GatewaySettings) -> Result<Self> {
        let client = CollectorClient::new(settings.request_timeout, settings.connect_timeout)?;
        Ok(Self::with_transport(settings.endpoint, Arc::new(client))
            .with_stub_delay(settings.stub_delay)
            .with_delivery_mode(settings.delivery_mode))
    }

    /// Gateway over an arbitrary transport. Blank endpoints select stub mode.
    pub fn with_transport(endpoint: Option<String>, transport: Arc<dyn Transport>) -> Self {
        let endpoint = endpoint
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty());

        Self {
            endpoint,
            transport,
            stub_delay: Duration::from_millis(DEFAULT_STUB_DELAY_MS),
            delivery_mode: DeliveryMode::default(),
        }
    }

    pub fn with_stub_delay(mut self, delay: Duration) -> Self {
        self.stub_delay = delay;
        self
    }

    pub fn with_delivery_mode(mut self, mode: DeliveryMode) -> Self {
        self.delivery_mode = mode;
        self
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    pub fn is_stub(&self) -> bool {
        self.endpoint.is_none()
    }

    pub fn stub_delay(&self) -> Duration {
        self.stub_delay
    }

    pub fn delivery_mode(&self) -> DeliveryMode {
        self.delivery_mode
    }

    /// Sends `record` once. `true` if it was dispatched (or stubbed).
    pub async fn submit(&self, record: &FormRecord) -> bool {
        let Some(endpoint) = self.endpoint.as_deref() else {
            let context = SubmissionContext::start(record.form_type(), "stub", None);
            debug!(
                "Form data (would be sent to collector): {}",
                record.to_json().unwrap_or_default()
            );
            tokio::time::sleep(self.stub_delay).await;
            context.complete(true, None, None);
            return true;
        };

        let context = SubmissionContext::start(record.form_type(), self.delivery_mode.as_str(), Some(endpoint));

        let body = match record.to_json() {
            Ok(body) => body,
            Err(e) => {
                context.complete(false, None, Some(format!("Failed to serialize record: {}", e)));
                return false;
            }
        };

        match self.transport.post_json(endpoint, body).await {
            Ok(receipt) => {
                let confirmed = receipt.is_success_status();
                if let (Some(status), false) = (receipt.status, confirmed) {
                    context.log_unconfirmed(status);
                }
                let success = match self.delivery_mode {
                    DeliveryMode::Optimistic => true,
                    DeliveryMode::Confirmed => confirmed,
                };
                context.complete(success, receipt.status, None);
                success
            }
            Err(e) => {
                context.complete(false, None, Some(format!("{:#}", e)));
                false
            }
        }
    }
}

impl std::fmt::Debug for SubmissionGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmissionGateway")
            .field("endpoint", &self.endpoint)
            .field("stub_delay", &self.stub_delay)
            .field("delivery_mode", &self.delivery_mode)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::transport::DispatchReceipt;
    use crate::forms::FormType;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::time::Instant;

    /// Records request bodies and answers with a canned result
    struct FakeTransport {
        status: Option<u16>,
        fail: bool,
        bodies: Mutex<Vec<(String, String)>>,
    }

    impl FakeTransport {
        fn answering(status: u16) -> Arc<Self> {
            Arc::new(Self {
                status: Some(status),
                fail: false,
                bodies: Mutex::new(Vec::new()),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                status: None,
                fail: true,
                bodies: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> usize {
            self.bodies.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl Transport for FakeTransport {
        async fn post_json(&self, url: &str, body: String) -> Result<DispatchReceipt> {
            self.bodies.lock().unwrap().push((url.to_string(), body));
            if self.fail {
                anyhow::bail!("connection refused");
            }
            Ok(DispatchReceipt { status: self.status })
        }
    }

    fn record() -> FormRecord {
        let mut record = FormRecord::new(FormType::Contact, "2026-10-16T09:30:00.000Z");
        record.insert("email", "a@b.com").unwrap();
        record
    }

    #[test]
    fn test_blank_endpoint_is_stub() {
        let gateway = SubmissionGateway::with_transport(Some("   ".into()), FakeTransport::answering(200));
        assert!(gateway.is_stub());
        let gateway = SubmissionGateway::with_transport(Some(" https://x.test/exec ".into()), FakeTransport::answering(200));
        assert_eq!(gateway.endpoint(), Some("https://x.test/exec"));
    }

    #[tokio::test]
    async fn test_stub_mode_waits_and_succeeds() {
        let transport = FakeTransport::failing();
        let gateway = SubmissionGateway::with_transport(None, transport.clone())
            .with_stub_delay(Duration::from_millis(50));

        let started = Instant::now();
        assert!(gateway.submit(&record()).await);
        assert!(started.elapsed() >= Duration::from_millis(50));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_posts_serialized_record() {
        let transport = FakeTransport::answering(200);
        let gateway = SubmissionGateway::with_transport(Some("https://x.test/exec".into()), transport.clone());

        assert!(gateway.submit(&record()).await);

        let bodies = transport.bodies.lock().unwrap();
        assert_eq!(bodies.len(), 1);
        assert_eq!(bodies[0].0, "https://x.test/exec");
        assert_eq!(FormRecord::from_json(&bodies[0].1).unwrap(), record());
    }

    #[tokio::test]
    async fn test_transport_error_is_failure() {
        let transport = FakeTransport::failing();
        let gateway = SubmissionGateway::with_transport(Some("https://x.test/exec".into()), transport.clone());
        assert!(!gateway.submit(&record()).await);
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn test_optimistic_ignores_status() {
        let gateway = SubmissionGateway::with_transport(Some("https://x.test/exec".into()), FakeTransport::answering(500));
        assert!(gateway.submit(&record()).await);
    }

    #[tokio::test]
    async fn test_confirmed_requires_2xx() {
        let rejected = SubmissionGateway::with_transport(Some("https://x.test/exec".into()), FakeTransport::answering(500))
            .with_delivery_mode(DeliveryMode::Confirmed);
        assert!(!rejected.submit(&record()).await);

        let accepted = SubmissionGateway::with_transport(Some("https://x.test/exec".into()), FakeTransport::answering(204))
            .with_delivery_mode(DeliveryMode::Confirmed);
        assert!(accepted.submit(&record()).await);
    }

    #[test]
    fn test_delivery_mode_parse() {
        assert_eq!("Confirmed".parse::<DeliveryMode>().unwrap(), DeliveryMode::Confirmed);
        assert_eq!(DeliveryMode::default(), DeliveryMode::Optimistic);
        assert!("eventual".parse::<DeliveryMode>().is_err());
    }
}
