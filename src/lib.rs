//! Lead-capture forms for The Event Hub
//!
//! Validates booking, career, contact and manpower requirement forms against
//! their declarative schemas and submits them to an external collector
//! endpoint as flat JSON records.

pub mod api;
pub mod config;
pub mod forms;
pub mod notify;
pub mod session;
