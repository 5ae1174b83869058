//! Globalstar callback listener.
//!
//! Receives satellite telemetry (STU) and provisioning (PRV) callbacks over
//! HTTP, parses the XML payload, logs the salient fields, and returns the
//! provider-mandated XML acknowledgment synchronously.
//!
//! ## Architecture
//!
//! ```text
//! Provider POST → web::globalstar_listener → callback::parse_callback
//!                                          → callback::build_ack → XML ack
//! ```

pub mod callback;
pub mod config;
pub mod web;

// Re-export commonly used types
pub use callback::{
    build_ack, parse_callback, AckState, CallbackError, IncomingMessage, MessageKind,
    TelemetryRecord,
};
pub use config::Config;
