//! # qbot
//!
//! A Slack bot that hands out pseudo-random star ratings on request,
//! throttled to one fresh rating per user per hour. Connects over the RTM
//! websocket, dispatches mention events through a handler chain, and keeps
//! its ratings in memory for the life of the process.

pub mod chain;
pub mod cli;
pub mod client;
pub mod config;
pub mod core;
pub mod handlers;
pub mod mention;
pub mod ratings;
pub mod runner;
pub mod slack;

pub use chain::HandlerChain;
pub use cli::{load_config, Cli, Commands};
pub use client::Client;
pub use config::BotConfig;
pub use handlers::{RatingHandler, RESET_REPLY, SCORE_FLAVOR};
pub use mention::{has_command, is_bot_mentioned, mention_tag, RATE_COMMAND, RESET_COMMAND};
pub use ratings::{Rating, Ratings, RATING_COOLDOWN_MS};
pub use runner::run_bot;
pub use slack::{RtmConnection, RtmSender, SlackRtmTransport};

pub use crate::core::{
    init_tracing, ConnectionStatus, Handler, HandlerResponse, MessageEvent, QbotError, Result,
    RtmEvent, Sender,
};
