//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::BotConfig;

#[derive(Parser)]
#[command(name = "qbot")]
#[command(about = "Slack bot that hands out star ratings", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot (token from SLACK_API_TOKEN or slack_token.json; --token overrides).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
}

/// Load [`BotConfig`] from the environment. If `token` is provided it
/// overrides `SLACK_API_TOKEN` and the credential file.
pub fn load_config(token: Option<String>) -> Result<BotConfig> {
    BotConfig::load(token)
}
