//! Core of the bot: types, errors, the handler and sender seams, and
//! tracing initialization. Transport-agnostic.

pub mod error;
pub mod logger;
pub mod sender;
pub mod types;

pub use error::{QbotError, Result};
pub use logger::init_tracing;
pub use sender::Sender;
pub use types::{ConnectionStatus, Handler, HandlerResponse, MessageEvent, RtmEvent};
