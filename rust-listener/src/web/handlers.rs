//! Callback endpoint handlers.
//!
//! The listener answers synchronously: classification and extraction happen
//! in-request and the ack is built before the response is sent. Internal
//! faults never surface as 5xx; the provider may disable an endpoint that
//! answers with non-200 statuses, so faults are absorbed into a fail ack.

use axum::{
    body::Bytes,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{error, info, warn};

use crate::callback::{
    build_ack, internal_fault_ack, parse_callback, AckState, CallbackError, DEFAULT_STATE_MESSAGE,
};

// =============================================================================
// Health Check
// =============================================================================

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// =============================================================================
// Globalstar Listener
// =============================================================================

/// Reply computed for one callback delivery.
#[derive(Debug, PartialEq, Eq)]
enum ListenerReply {
    /// 200 with an XML ack
    Ack(String),
    /// 400 with a plain-text reason
    Rejected(&'static str),
}

/// Globalstar callback endpoint.
///
/// Every outcome other than an empty body or an unrecognized message family
/// answers HTTP 200 with an XML ack.
pub async fn globalstar_listener(body: Bytes) -> Response {
    info!(payload_length = body.len(), "callback_received");

    match listener_reply(&body) {
        ListenerReply::Ack(xml) => {
            (StatusCode::OK, [(header::CONTENT_TYPE, "text/xml")], xml).into_response()
        }
        ListenerReply::Rejected(reason) => (StatusCode::BAD_REQUEST, reason).into_response(),
    }
}

/// Map a raw payload onto the reply the provider contract requires.
///
/// Empty bodies and unknown root tags are rejected with plain 400s. Both
/// known families get a pass ack. Any other fault is logged and answered
/// with the fail ack, keeping the transport status at 200.
fn listener_reply(payload: &[u8]) -> ListenerReply {
    match parse_callback(payload) {
        Ok(message) => ListenerReply::Ack(build_ack(
            &message.root_tag,
            &message.message_id,
            AckState::Pass,
            DEFAULT_STATE_MESSAGE,
        )),
        Err(CallbackError::EmptyPayload) => {
            warn!("callback_empty_payload");
            ListenerReply::Rejected("No Data")
        }
        Err(CallbackError::UnknownFormat(tag)) => {
            warn!(root_tag = %tag, "callback_unknown_format");
            ListenerReply::Rejected("Unknown Format")
        }
        Err(e) => {
            error!(error = %e, "callback_internal_fault");
            ListenerReply::Ack(internal_fault_ack())
        }
    }
}
