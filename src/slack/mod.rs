//! Slack RTM transport.

pub mod transport;
pub mod wire;

pub use transport::{RtmConnection, RtmSender, SlackRtmTransport};
pub use wire::{OutboundMessage, RtmConnectPayload};
