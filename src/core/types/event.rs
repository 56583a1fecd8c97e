//! Inbound transport events and the message payload they carry.

use serde::{Deserialize, Serialize};

/// A plain text message received over the RTM connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageEvent {
    /// Channel the message was posted in.
    pub channel: String,
    /// Slack user id of the sender.
    pub user: String,
    /// Raw message text, mentions included (`<@U123> rate me`).
    pub text: String,
    /// Slack timestamp of the message (`"1355517523.000005"`).
    pub ts: String,
    /// Team/workspace id; absent on some message kinds.
    pub team: Option<String>,
}

/// Typed events delivered by the RTM transport, one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RtmEvent {
    /// The rtm.connect handshake succeeded; carries the bot's own identity.
    Authenticated {
        self_id: String,
        self_name: String,
        team: Option<String>,
    },
    /// The websocket session is established (server `hello`).
    ConnectionOpened,
    /// The transport lost or closed the connection. No automatic reconnect.
    Disconnected,
    /// A plain text message event.
    Message(MessageEvent),
}
