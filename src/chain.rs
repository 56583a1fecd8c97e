//! Runs the registered handlers in order for each inbound message.
//!
//! The first handler that returns `Stop` or `Reply` ends the run; `Continue`
//! falls through to the next handler.

use std::sync::Arc;

use tracing::debug;

use crate::core::{Handler, HandlerResponse, MessageEvent, Result};

/// Ordered list of message handlers.
#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a handler (runs in insertion order).
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Runs the chain for one message. Returns the first `Stop` or `Reply`,
    /// or `Continue` when every handler passed.
    pub async fn handle(&self, message: &MessageEvent) -> Result<HandlerResponse> {
        for handler in &self.handlers {
            let response = handler.handle(message).await?;
            match response {
                HandlerResponse::Stop | HandlerResponse::Reply(_) => {
                    debug!(
                        user = %message.user,
                        channel = %message.channel,
                        "handler chain stopped by handler"
                    );
                    return Ok(response);
                }
                HandlerResponse::Continue => continue,
            }
        }
        Ok(HandlerResponse::Continue)
    }
}

// Unit tests live in tests/handler_chain_test.rs
