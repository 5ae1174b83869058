//! Web server module for handling inbound provider callbacks.
//!
//! This module provides a thin web server that:
//! - Receives Globalstar STU and PRV callbacks
//! - Classifies and extracts the XML payload in-request
//! - Returns the provider-mandated XML ack synchronously
//!
//! Internal faults are absorbed into a 200 fail ack; see `handlers`.

pub mod handlers;

pub use handlers::{globalstar_listener, health, HealthResponse};
