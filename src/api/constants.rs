//! Constants for talking to the collector endpoint

/// Environment variable that overrides the configured collector URL
pub const ENDPOINT_ENV_VAR: &str = "EVENT_HUB_COLLECTOR_URL";

/// Simulated latency when no collector is configured
pub const DEFAULT_STUB_DELAY_MS: u64 = 1000;

/// Whole-request timeout for collector POSTs
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Connection establishment timeout
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

pub const USER_AGENT: &str = concat!("event-hub/", env!("CARGO_PKG_VERSION"));

/// Standard headers for collector requests
pub mod headers {
    /// Content type for the JSON record body
    pub const CONTENT_TYPE_JSON: &str = "application/json";
}
