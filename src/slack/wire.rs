//! Serde shapes for the Slack RTM wire format: the rtm.connect handshake
//! response and the frames exchanged over the websocket.

use serde::{Deserialize, Serialize};

use crate::core::{MessageEvent, RtmEvent};

/// Response body of the `rtm.connect` Web API call.
#[derive(Debug, Deserialize)]
pub struct RtmConnectPayload {
    pub ok: bool,
    /// Websocket URL to connect to; present when `ok`.
    #[serde(default)]
    pub url: Option<String>,
    /// The bot's own identity within the workspace.
    #[serde(rename = "self", default)]
    pub self_info: Option<RtmSelf>,
    #[serde(default)]
    pub team: Option<RtmTeam>,
    /// Slack error code when `ok` is false (e.g. `invalid_auth`).
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RtmSelf {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct RtmTeam {
    pub id: String,
}

/// One inbound websocket frame, decoded loosely. Fields beyond `type` are
/// only meaningful for some frame kinds.
#[derive(Debug, Deserialize)]
struct InboundFrame {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    subtype: Option<String>,
    #[serde(default)]
    channel: Option<String>,
    #[serde(default)]
    user: Option<String>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    ts: Option<String>,
    #[serde(default)]
    team: Option<String>,
}

/// Envelope for outbound messages. `id` must be unique per connection.
#[derive(Debug, Serialize)]
pub struct OutboundMessage {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub channel: String,
    pub text: String,
}

/// Decodes a websocket text frame into an [`RtmEvent`].
///
/// `hello` marks the session as open, `goodbye` announces a server-side
/// disconnect. Message frames with a subtype (edits, joins, bot attachments)
/// or without a sender and text are not plain text messages and yield `None`,
/// as do unknown frame kinds and non-JSON payloads.
pub fn parse_event(raw: &str) -> Option<RtmEvent> {
    let frame: InboundFrame = serde_json::from_str(raw).ok()?;
    match frame.kind.as_deref() {
        Some("hello") => Some(RtmEvent::ConnectionOpened),
        Some("goodbye") => Some(RtmEvent::Disconnected),
        Some("message") if frame.subtype.is_none() => Some(RtmEvent::Message(MessageEvent {
            channel: frame.channel?,
            user: frame.user?,
            text: frame.text?,
            ts: frame.ts?,
            team: frame.team,
        })),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hello_opens_the_connection() {
        assert_eq!(
            parse_event(r#"{"type":"hello"}"#),
            Some(RtmEvent::ConnectionOpened)
        );
    }

    #[test]
    fn goodbye_maps_to_disconnect() {
        assert_eq!(
            parse_event(r#"{"type":"goodbye"}"#),
            Some(RtmEvent::Disconnected)
        );
    }

    #[test]
    fn plain_message_frame_carries_all_fields() {
        let raw = r#"{"type":"message","channel":"C1","user":"U1","text":"<@U0> rate me","ts":"1355517523.000005","team":"T1"}"#;
        let event = parse_event(raw).unwrap();
        assert_eq!(
            event,
            RtmEvent::Message(MessageEvent {
                channel: "C1".to_string(),
                user: "U1".to_string(),
                text: "<@U0> rate me".to_string(),
                ts: "1355517523.000005".to_string(),
                team: Some("T1".to_string()),
            })
        );
    }

    #[test]
    fn message_with_subtype_is_skipped() {
        let raw = r#"{"type":"message","subtype":"message_changed","channel":"C1","ts":"1"}"#;
        assert_eq!(parse_event(raw), None);
    }

    #[test]
    fn message_missing_sender_or_text_is_skipped() {
        assert_eq!(
            parse_event(r#"{"type":"message","channel":"C1","ts":"1"}"#),
            None
        );
    }

    #[test]
    fn unknown_frames_and_garbage_are_skipped() {
        assert_eq!(parse_event(r#"{"type":"user_typing","channel":"C1"}"#), None);
        assert_eq!(parse_event(r#"{"reply_to":1,"ok":true}"#), None);
        assert_eq!(parse_event("not json"), None);
    }

    #[test]
    fn outbound_message_serializes_with_message_type() {
        let envelope = OutboundMessage {
            id: 7,
            kind: "message",
            channel: "C1".to_string(),
            text: "Hey!".to_string(),
        };
        let json = serde_json::to_string(&envelope).unwrap();
        assert_eq!(
            json,
            r#"{"id":7,"type":"message","channel":"C1","text":"Hey!"}"#
        );
    }
}
