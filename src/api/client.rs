use super::constants::{headers, USER_AGENT};
use super::transport::{DispatchReceipt, Transport};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;

/// HTTP transport to the collector endpoint
pub struct CollectorClient {
    http_client: reqwest::Client,
}

impl CollectorClient {
    pub fn new(request_timeout: Duration, connect_timeout: Duration) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(2)
            .timeout(request_timeout)
            .connect_timeout(connect_timeout)
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http_client })
    }
}

#[async_trait]
impl Transport for CollectorClient {
    async fn post_json(&self, url: &str, body: String) -> Result<DispatchReceipt> {
        let response = self
            .http_client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, headers::CONTENT_TYPE_JSON)
            .body(body)
            .send()
            .await
            .context("Failed to reach collector endpoint")?;

        let status = response.status();
        log::debug!("Collector responded with status {}", status);

        Ok(DispatchReceipt {
            status: Some(status.as_u16()),
        })
    }
}
