//! Entry wiring: config → tracing → store, handler chain, transport, client.

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::{Mutex, RwLock};
use tracing::info;

use crate::chain::HandlerChain;
use crate::client::Client;
use crate::config::BotConfig;
use crate::core::init_tracing;
use crate::handlers::RatingHandler;
use crate::ratings::Ratings;
use crate::slack::SlackRtmTransport;

/// Builds the bot and runs it until the RTM connection ends. There is no
/// automatic reconnect; a disconnect ends the process normally.
pub async fn run_bot(config: BotConfig) -> Result<()> {
    if let Some(dir) = std::path::Path::new(&config.log_file).parent() {
        std::fs::create_dir_all(dir)?;
    }
    init_tracing(&config.log_file)?;
    info!(api_base = %config.slack_api_url, "starting qbot");

    let ratings = Arc::new(Mutex::new(Ratings::new()));
    let bot_user_id = Arc::new(RwLock::new(None));
    let handler = RatingHandler::new(ratings, bot_user_id.clone());
    let chain = HandlerChain::new().add_handler(Arc::new(handler));

    let transport = SlackRtmTransport::new(&config);
    let mut client = Client::new(chain, bot_user_id);
    client.start(&transport).await?;

    info!("rtm session ended, shutting down");
    Ok(())
}
