//! Handler result type for the chain.

/// Outcome of a handler run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass the message to the next handler.
    Continue,
    /// Consume the message; no reply is sent.
    Stop,
    /// Consume the message and send `text` back to the originating channel.
    Reply(String),
}
