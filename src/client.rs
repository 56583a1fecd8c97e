//! Connection manager: owns the connection lifecycle and dispatches inbound
//! events to the handler chain.
//!
//! Events are processed strictly one at a time; the rating store is only
//! ever touched from this context. Replies returned by the chain are sent
//! back to the originating channel, fire-and-forget.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, error, info};

use crate::chain::HandlerChain;
use crate::core::{ConnectionStatus, HandlerResponse, QbotError, Result, RtmEvent, Sender};
use crate::slack::SlackRtmTransport;

/// Drives one RTM session: status state machine, event dispatch, replies.
pub struct Client {
    status: ConnectionStatus,
    chain: HandlerChain,
    /// Shared with the rating handler; written on `Authenticated`.
    bot_user_id: Arc<RwLock<Option<String>>>,
    sender: Option<Arc<dyn Sender>>,
}

impl Client {
    pub fn new(chain: HandlerChain, bot_user_id: Arc<RwLock<Option<String>>>) -> Self {
        Self {
            status: ConnectionStatus::Disconnected,
            chain,
            bot_user_id,
            sender: None,
        }
    }

    /// Creates a client with a pre-wired sender, for tests that drive
    /// [`Client::dispatch_event`] directly without a transport.
    pub fn with_sender(
        chain: HandlerChain,
        bot_user_id: Arc<RwLock<Option<String>>>,
        sender: Arc<dyn Sender>,
    ) -> Self {
        Self {
            status: ConnectionStatus::Disconnected,
            chain,
            bot_user_id,
            sender: Some(sender),
        }
    }

    pub fn status(&self) -> ConnectionStatus {
        self.status
    }

    /// Connects to Slack and runs the event loop until the transport
    /// disconnects. Allowed only from `Disconnected`; calling it in any
    /// other state returns [`QbotError::InvalidStateTransition`] and the
    /// caller decides whether to terminate.
    pub async fn start(&mut self, transport: &SlackRtmTransport) -> Result<()> {
        if self.status != ConnectionStatus::Disconnected {
            return Err(QbotError::InvalidStateTransition {
                status: self.status,
            });
        }
        self.status = ConnectionStatus::Connecting;
        info!("connecting to slack rtm");

        let mut connection = match transport.connect().await {
            Ok(connection) => connection,
            Err(e) => {
                self.status = ConnectionStatus::Disconnected;
                return Err(e);
            }
        };
        self.sender = Some(connection.sender.clone());

        while let Some(event) = connection.events.recv().await {
            if let Err(e) = self.dispatch_event(event).await {
                error!(error = %e, "event dispatch failed");
            }
            if self.status == ConnectionStatus::Disconnected {
                break;
            }
        }
        // Covers the stream ending without an explicit disconnect event.
        self.status = ConnectionStatus::Disconnected;
        Ok(())
    }

    /// Applies one inbound event: advances the status machine, filters out
    /// the bot's own messages, and runs the handler chain for the rest.
    pub async fn dispatch_event(&mut self, event: RtmEvent) -> Result<()> {
        match event {
            RtmEvent::Authenticated {
                self_id,
                self_name,
                team,
            } => {
                self.status = ConnectionStatus::Authenticated;
                *self.bot_user_id.write().await = Some(self_id.clone());
                info!(self_id = %self_id, self_name = %self_name, ?team, "authenticated with slack");
            }
            RtmEvent::ConnectionOpened => {
                self.status = ConnectionStatus::Connected;
                info!("rtm connection open");
            }
            RtmEvent::Disconnected => {
                // Ratings are kept; only the connection state resets.
                self.status = ConnectionStatus::Disconnected;
                info!("rtm connection lost");
            }
            RtmEvent::Message(message) => {
                let own_id = self.bot_user_id.read().await.clone();
                if own_id.as_deref() == Some(message.user.as_str()) {
                    debug!(ts = %message.ts, "ignoring own message");
                    return Ok(());
                }
                if let HandlerResponse::Reply(text) = self.chain.handle(&message).await? {
                    match &self.sender {
                        Some(sender) => {
                            if let Err(e) = sender.send_message(&text, &message.channel).await {
                                error!(
                                    error = %e,
                                    channel = %message.channel,
                                    "failed to send reply"
                                );
                            }
                        }
                        None => error!(channel = %message.channel, "no sender wired, dropping reply"),
                    }
                }
            }
        }
        Ok(())
    }
}
