//! Acknowledgment XML generation.
//!
//! The provider expects a synchronous XML ack for every classified callback.
//! Pure string construction; no failure modes.

use std::borrow::Cow;

use crate::callback::timestamp::delivery_timestamp;
use crate::callback::types::AckState;

/// State message carried by a normal pass ack.
pub const DEFAULT_STATE_MESSAGE: &str = "Message received";

const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Build the acknowledgment document for a callback.
///
/// The response tag mirrors the classification rule: a root tag containing
/// `stuMessages` is acknowledged with `stuResponseMsg`, everything else with
/// `prvResponseMsg`. `correlationID` always repeats `messageID`; the
/// provider matches acks to deliveries on that pair being identical.
pub fn build_ack(root_tag: &str, message_id: &str, state: AckState, state_message: &str) -> String {
    let response_tag = if root_tag.contains("stuMessages") {
        "stuResponseMsg"
    } else {
        "prvResponseMsg"
    };

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<{tag}
    xmlns:xsi="{xsi}"
    deliveryTimeStamp="{timestamp}"
    messageID="{id}"
    correlationID="{id}">
    <state>{state}</state>
    <stateMessage>{message}</stateMessage>
</{tag}>"#,
        tag = response_tag,
        xsi = XSI_NAMESPACE,
        timestamp = delivery_timestamp(),
        id = escape_xml(message_id),
        state = state.as_str(),
        message = escape_xml(state_message),
    )
}

/// Fail ack returned when processing faults internally.
///
/// Forced to the telemetry response tag with `messageID` 0. The provider
/// penalizes endpoints that answer with non-200 statuses, so this document
/// is the only error surface it ever sees.
pub fn internal_fault_ack() -> String {
    build_ack("stuMessages", "0", AckState::Fail, "Internal Server Error")
}

/// Escape the characters XML reserves in attribute and text content.
fn escape_xml(value: &str) -> Cow<'_, str> {
    if !value
        .chars()
        .any(|c| matches!(c, '&' | '<' | '>' | '"' | '\''))
    {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attr<'a>(doc: &'a roxmltree::Document, name: &str) -> &'a str {
        doc.root_element().attribute(name).unwrap()
    }

    fn child_text<'a>(doc: &'a roxmltree::Document, name: &str) -> &'a str {
        doc.root_element()
            .children()
            .find(|n| n.is_element() && n.tag_name().name() == name)
            .and_then(|n| n.text())
            .unwrap()
    }

    #[test]
    fn test_pass_ack_telemetry_tag() {
        let xml = build_ack("stuMessages", "abc", AckState::Pass, DEFAULT_STATE_MESSAGE);

        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));

        let doc = roxmltree::Document::parse(&xml).unwrap();
        assert_eq!(doc.root_element().tag_name().name(), "stuResponseMsg");
        assert_eq!(child_text(&doc, "state"), "pass");
        assert_eq!(child_text(&doc, "stateMessage"), "Message received");
    }

    #[test]
    fn test_ack_tag_selected_by_containment() {
        let xml = build_ack("prvmsgs", "p1", AckState::Pass, DEFAULT_STATE_MESSAGE);
        let doc = roxmltree::Document::parse(&xml).unwrap();
        assert_eq!(doc.root_element().tag_name().name(), "prvResponseMsg");

        // Any tag without the telemetry marker falls through to prv.
        let xml = build_ack("whatever", "p2", AckState::Pass, DEFAULT_STATE_MESSAGE);
        let doc = roxmltree::Document::parse(&xml).unwrap();
        assert_eq!(doc.root_element().tag_name().name(), "prvResponseMsg");
    }

    #[test]
    fn test_correlation_id_always_equals_message_id() {
        let xml = build_ack("stuMessages", "id-42", AckState::Pass, DEFAULT_STATE_MESSAGE);
        let doc = roxmltree::Document::parse(&xml).unwrap();

        assert_eq!(attr(&doc, "messageID"), "id-42");
        assert_eq!(attr(&doc, "correlationID"), "id-42");
    }

    #[test]
    fn test_attribute_order() {
        let xml = build_ack("stuMessages", "o1", AckState::Pass, DEFAULT_STATE_MESSAGE);

        let xsi = xml.find("xmlns:xsi=").unwrap();
        let ts = xml.find("deliveryTimeStamp=").unwrap();
        let id = xml.find("messageID=").unwrap();
        let corr = xml.find("correlationID=").unwrap();

        assert!(xsi < ts && ts < id && id < corr);
    }

    #[test]
    fn test_delivery_timestamp_attribute_is_well_formed() {
        let xml = build_ack("stuMessages", "t1", AckState::Pass, DEFAULT_STATE_MESSAGE);
        let doc = roxmltree::Document::parse(&xml).unwrap();

        let ts = attr(&doc, "deliveryTimeStamp");
        assert_eq!(ts.len(), 23);
        assert!(ts.ends_with(" GMT"));
    }

    #[test]
    fn test_internal_fault_ack() {
        let xml = internal_fault_ack();
        let doc = roxmltree::Document::parse(&xml).unwrap();

        assert_eq!(doc.root_element().tag_name().name(), "stuResponseMsg");
        assert_eq!(attr(&doc, "messageID"), "0");
        assert_eq!(attr(&doc, "correlationID"), "0");
        assert_eq!(child_text(&doc, "state"), "fail");
        assert_eq!(child_text(&doc, "stateMessage"), "Internal Server Error");
    }

    #[test]
    fn test_reserved_characters_are_escaped() {
        let xml = build_ack(
            "stuMessages",
            r#"a"b<c&d"#,
            AckState::Fail,
            "busy & <retrying>",
        );

        assert!(xml.contains(r#"messageID="a&quot;b&lt;c&amp;d""#));
        assert!(xml.contains("<stateMessage>busy &amp; &lt;retrying&gt;</stateMessage>"));

        // Still well formed after escaping, and values round-trip.
        let doc = roxmltree::Document::parse(&xml).unwrap();
        assert_eq!(attr(&doc, "messageID"), r#"a"b<c&d"#);
        assert_eq!(child_text(&doc, "stateMessage"), "busy & <retrying>");
    }

    #[test]
    fn test_escape_xml_borrows_when_clean() {
        assert!(matches!(escape_xml("plain-id-123"), Cow::Borrowed(_)));
        assert_eq!(escape_xml("a&b"), "a&amp;b");
    }
}
