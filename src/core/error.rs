//! Error types for the bot core.
//!
//! [`QbotError`] covers the two process-level failure surfaces: calling
//! `start` in the wrong connection state, and failures reported by the
//! Slack transport. The rating workflow itself cannot fail.

use thiserror::Error;

use super::types::ConnectionStatus;

/// Top-level error for qbot.
#[derive(Error, Debug)]
pub enum QbotError {
    /// `start` was invoked while a previous connection attempt or session
    /// was still underway. Recoverable: the caller decides whether to
    /// terminate or wait for the transport to report a disconnect.
    #[error("cannot start: connection status is {status:?}, expected Disconnected")]
    InvalidStateTransition { status: ConnectionStatus },

    /// Failure surfaced by the Slack transport (handshake rejection,
    /// websocket failure, closed writer).
    #[error("transport error: {0}")]
    Transport(String),
}

/// Result type for core operations; uses [`QbotError`].
pub type Result<T> = std::result::Result<T, QbotError>;
