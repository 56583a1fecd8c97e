//! Handler trait for inbound messages.

use async_trait::async_trait;

use super::{event::MessageEvent, response::HandlerResponse};

/// Processes one inbound message. Return `Stop` or `Reply` to end the chain;
/// `Continue` passes the message on.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, message: &MessageEvent) -> crate::core::error::Result<HandlerResponse>;
}
