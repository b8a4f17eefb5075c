//! Collector endpoint access
//!
//! The collector is an external spreadsheet-backed script that accepts one
//! JSON object per submission. This module owns the HTTP transport, the
//! submission gateway (including its offline stub mode) and the structured
//! submission log.

pub mod client;
pub mod constants;
pub mod gateway;
pub mod logging;
pub mod transport;

pub use client::CollectorClient;
pub use gateway::{DeliveryMode, GatewaySettings, SubmissionGateway};
pub use logging::SubmissionContext;
pub use transport::{DispatchReceipt, Transport};
