//! Slack RTM transport: rtm.connect handshake over HTTPS, then a websocket
//! session split into a reader task (inbound events) and a writer task
//! (outbound messages).

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::Message as WsMessage};
use tracing::{debug, error, info};

use crate::config::BotConfig;
use crate::core::{QbotError, Result, RtmEvent, Sender};
use crate::slack::wire::{self, OutboundMessage, RtmConnectPayload};

const EVENT_BUFFER: usize = 64;

/// An established RTM session: the inbound event stream and the outbound
/// sender handle.
pub struct RtmConnection {
    /// Inbound events, delivered one at a time. The first event is always
    /// `Authenticated`, carrying the bot's own user id for self-message
    /// filtering and mention checks; the stream ends after `Disconnected`.
    pub events: mpsc::Receiver<RtmEvent>,
    pub sender: Arc<RtmSender>,
}

/// Connects to the Slack RTM service for a single session.
pub struct SlackRtmTransport {
    http: reqwest::Client,
    token: String,
    api_base: String,
}

impl SlackRtmTransport {
    pub fn new(config: &BotConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            token: config.slack_token.clone(),
            api_base: config.slack_api_url.clone(),
        }
    }

    /// Calls the `rtm.connect` Web API method and returns the decoded
    /// payload. Fails on HTTP errors and on `ok: false` responses.
    pub async fn rtm_connect(&self) -> Result<RtmConnectPayload> {
        let url = format!("{}/api/rtm.connect", self.api_base);
        let response = self
            .http
            .post(&url)
            .form(&[("token", self.token.as_str())])
            .send()
            .await
            .map_err(|e| QbotError::Transport(format!("rtm.connect request failed: {}", e)))?;

        let payload: RtmConnectPayload = response
            .json()
            .await
            .map_err(|e| QbotError::Transport(format!("rtm.connect response invalid: {}", e)))?;

        if !payload.ok {
            return Err(QbotError::Transport(format!(
                "rtm.connect rejected: {}",
                payload.error.as_deref().unwrap_or("unknown error")
            )));
        }

        Ok(payload)
    }

    /// Performs the handshake and opens the websocket session.
    ///
    /// The returned connection already carries the `Authenticated` event;
    /// `ConnectionOpened` follows once the server sends `hello`. When the
    /// socket closes or fails, a final `Disconnected` is delivered and the
    /// stream ends. No reconnect is attempted.
    pub async fn connect(&self) -> Result<RtmConnection> {
        let payload = self.rtm_connect().await?;
        let ws_url = payload
            .url
            .ok_or_else(|| QbotError::Transport("rtm.connect response missing url".to_string()))?;
        let me = payload
            .self_info
            .ok_or_else(|| QbotError::Transport("rtm.connect response missing self".to_string()))?;
        let team = payload.team.map(|t| t.id);

        let (ws_stream, _) = connect_async(ws_url.as_str())
            .await
            .map_err(|e| QbotError::Transport(format!("websocket connect failed: {}", e)))?;
        let (mut write, mut read) = ws_stream.split();

        info!(self_id = %me.id, self_name = %me.name, "rtm session established");

        let (event_tx, event_rx) = mpsc::channel(EVENT_BUFFER);
        let (out_tx, mut out_rx) = mpsc::channel::<WsMessage>(EVENT_BUFFER);

        event_tx
            .send(RtmEvent::Authenticated {
                self_id: me.id,
                self_name: me.name,
                team,
            })
            .await
            .map_err(|_| QbotError::Transport("event channel closed".to_string()))?;

        let reader_tx = event_tx.clone();
        tokio::spawn(async move {
            while let Some(frame) = read.next().await {
                match frame {
                    Ok(WsMessage::Text(text)) => {
                        if let Some(event) = wire::parse_event(&text) {
                            if reader_tx.send(event).await.is_err() {
                                return;
                            }
                        } else {
                            debug!("skipping unrecognized rtm frame");
                        }
                    }
                    Ok(WsMessage::Close(_)) => break,
                    Err(e) => {
                        error!(error = %e, "websocket read failed");
                        break;
                    }
                    _ => {}
                }
            }
            let _ = reader_tx.send(RtmEvent::Disconnected).await;
        });

        tokio::spawn(async move {
            while let Some(message) = out_rx.recv().await {
                if let Err(e) = write.send(message).await {
                    error!(error = %e, "websocket write failed");
                    break;
                }
            }
        });

        Ok(RtmConnection {
            events: event_rx,
            sender: Arc::new(RtmSender {
                out: out_tx,
                next_id: AtomicU64::new(1),
            }),
        })
    }
}

/// Outbound half of an RTM session. Messages are queued to the writer task;
/// delivery is not confirmed.
pub struct RtmSender {
    out: mpsc::Sender<WsMessage>,
    next_id: AtomicU64,
}

#[async_trait]
impl Sender for RtmSender {
    async fn send_message(&self, text: &str, channel: &str) -> Result<()> {
        let envelope = OutboundMessage {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            kind: "message",
            channel: channel.to_string(),
            text: text.to_string(),
        };
        let json = serde_json::to_string(&envelope)
            .map_err(|e| QbotError::Transport(format!("failed to encode message: {}", e)))?;
        self.out
            .send(WsMessage::Text(json.into()))
            .await
            .map_err(|_| QbotError::Transport("websocket writer closed".to_string()))
    }
}
