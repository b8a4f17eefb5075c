use anyhow::Result;
use async_trait::async_trait;

/// What is known after a request left the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchReceipt {
    /// HTTP status, when the transport can observe one.
    pub status: Option<u16>,
}

impl DispatchReceipt {
    pub fn is_success_status(&self) -> bool {
        matches!(self.status, Some(code) if (200..300).contains(&code))
    }
}

/// Sends a serialized record to a URL.
///
/// `Err` means the request could not be dispatched at all (unreachable host,
/// DNS failure, timeout, reset connection).
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(&self, url: &str, body: String) -> Result<DispatchReceipt>;
}
