//! Callback payload parsing and classification.
//!
//! The provider wraps telemetry in a `stuMessages` document and provisioning
//! notices in a `prvmsgs` document. Namespace usage varies between
//! deployments, so classification keys on the root element's local name and
//! every element lookup ignores namespaces.

use roxmltree::{Document, Node};
use tracing::info;

use crate::callback::types::{
    CallbackError, IncomingMessage, MessageKind, TelemetryRecord, MISSING_FIELD,
};

/// Classify a local root tag name into a message family.
///
/// Matches by case-sensitive substring containment, telemetry first. The
/// provider's integration keys on tag families rather than exact names, so
/// the containment check is deliberately unanchored.
pub fn classify_root_tag(root_tag: &str) -> MessageKind {
    if root_tag.contains("stuMessages") {
        MessageKind::Telemetry
    } else if root_tag.contains("prvmsgs") {
        MessageKind::Provisioning
    } else {
        MessageKind::Unknown
    }
}

/// Parse and classify a raw callback payload.
///
/// Returns the parsed message for the two known families. Empty payloads and
/// unknown root tags get their own error kinds so the handler can answer
/// them with plain 400 responses; everything else is an internal fault the
/// handler absorbs.
pub fn parse_callback(payload: &[u8]) -> Result<IncomingMessage, CallbackError> {
    if payload.is_empty() {
        return Err(CallbackError::EmptyPayload);
    }

    let text = std::str::from_utf8(payload)?;
    let doc = Document::parse(text)?;
    let root = doc.root_element();
    // roxmltree already splits `{uri}localName`; the local name alone drives
    // classification.
    let root_tag = root.tag_name().name().to_string();

    match classify_root_tag(&root_tag) {
        MessageKind::Telemetry => {
            let message_id = root.attribute("messageID").unwrap_or_default().to_string();
            info!(message_id = %message_id, "stu_message_received");

            let records = extract_records(root);
            for record in &records {
                info!(esn = %record.esn, payload = %record.payload, "stu_record");
            }

            Ok(IncomingMessage {
                kind: MessageKind::Telemetry,
                root_tag,
                message_id,
                records,
            })
        }
        MessageKind::Provisioning => {
            let message_id = root
                .attribute("prvMessageID")
                .unwrap_or_default()
                .to_string();
            info!(message_id = %message_id, "prv_message_received");

            Ok(IncomingMessage {
                kind: MessageKind::Provisioning,
                root_tag,
                message_id,
                records: Vec::new(),
            })
        }
        MessageKind::Unknown => Err(CallbackError::UnknownFormat(root_tag)),
    }
}

/// Collect every `stuMessage` element, at any depth, into a record.
///
/// `descendants()` walks in document order, which fixes record order.
fn extract_records(root: Node) -> Vec<TelemetryRecord> {
    root.descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "stuMessage")
        .map(|msg| TelemetryRecord {
            esn: field_text(msg, "esn"),
            payload: field_text(msg, "payload"),
        })
        .collect()
}

/// Text of the first matching descendant, or the `N/A` sentinel.
///
/// A missing element and an element with no text both resolve to the
/// sentinel.
fn field_text(scope: Node, local_name: &str) -> String {
    find_descendant(scope, local_name)
        .and_then(|n| n.text())
        .unwrap_or(MISSING_FIELD)
        .to_string()
}

/// First descendant of `scope`, at any depth, whose local name matches,
/// ignoring namespaces.
fn find_descendant<'a, 'input>(
    scope: Node<'a, 'input>,
    local_name: &str,
) -> Option<Node<'a, 'input>> {
    scope
        .descendants()
        .find(|n| n.is_element() && n.tag_name().name() == local_name)
}
