//! Callback message types and error taxonomy.
//!
//! This module defines the parsed form of a provider callback and the error
//! kinds the handler maps onto HTTP outcomes.

use thiserror::Error;

/// Sentinel for a telemetry field whose element or text is absent.
pub const MISSING_FIELD: &str = "N/A";

/// Message families the provider delivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Store-and-forward telemetry from a satellite device (STU).
    Telemetry,
    /// Provisioning/administrative notice about a device (PRV).
    Provisioning,
    /// Root tag matches neither family.
    Unknown,
}

/// One telemetry record extracted from a `stuMessage` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryRecord {
    /// Electronic Serial Number of the sending device
    pub esn: String,
    /// Raw device payload
    pub payload: String,
}

/// A parsed provider callback.
#[derive(Debug, Clone)]
pub struct IncomingMessage {
    /// Which family the callback belongs to
    pub kind: MessageKind,
    /// Local name of the root element, namespace stripped
    pub root_tag: String,
    /// Provider-assigned correlation token; empty when the attribute is absent
    pub message_id: String,
    /// Telemetry records in document order; empty for provisioning
    pub records: Vec<TelemetryRecord>,
}

/// Acknowledgment outcome reported back to the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AckState {
    Pass,
    Fail,
}

impl AckState {
    /// The literal the ack document carries in `<state>`.
    pub fn as_str(self) -> &'static str {
        match self {
            AckState::Pass => "pass",
            AckState::Fail => "fail",
        }
    }
}

/// Errors raised while classifying and extracting a callback.
///
/// `EmptyPayload` and `UnknownFormat` are surfaced to the caller as plain
/// 400 responses. Every other kind is absorbed by the handler and answered
/// with a 200 fail ack.
#[derive(Debug, Error)]
pub enum CallbackError {
    #[error("empty request body")]
    EmptyPayload,

    #[error("unrecognized root element `{0}`")]
    UnknownFormat(String),

    #[error("request body is not valid UTF-8: {0}")]
    InvalidEncoding(#[from] std::str::Utf8Error),

    #[error("malformed XML: {0}")]
    MalformedXml(#[from] roxmltree::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ack_state_literals() {
        assert_eq!(AckState::Pass.as_str(), "pass");
        assert_eq!(AckState::Fail.as_str(), "fail");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(CallbackError::EmptyPayload.to_string(), "empty request body");
        assert_eq!(
            CallbackError::UnknownFormat("foo".to_string()).to_string(),
            "unrecognized root element `foo`"
        );
    }
}
