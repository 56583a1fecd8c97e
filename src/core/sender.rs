//! Outbound message seam.
//!
//! The RTM transport implements [`Sender`] in production; tests substitute a
//! recording implementation to assert on what the bot would have said.

use async_trait::async_trait;

use super::error::Result;

/// Delivers outbound text messages to a channel.
#[async_trait]
pub trait Sender: Send + Sync {
    /// Sends `text` to `channel`. Fire-and-forget: no delivery confirmation
    /// is tracked and callers do not wait on an acknowledgment.
    async fn send_message(&self, text: &str, channel: &str) -> Result<()>;
}
