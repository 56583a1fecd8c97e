//! Bot configuration loaded from the environment.
//!
//! The token comes from `SLACK_API_TOKEN`, falling back to a
//! `slack_token.json` credential file next to the binary. `SLACK_API_URL`
//! overrides the Web API base so tests can point the handshake at a mock
//! server; `LOG_FILE` overrides the log path.

use std::env;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_SLACK_API_URL: &str = "https://slack.com";
const TOKEN_FILE: &str = "slack_token.json";

/// Credential file shape: `{"token": "xoxb-..."}`.
#[derive(Debug, Deserialize)]
struct TokenFile {
    token: String,
}

pub struct BotConfig {
    pub slack_token: String,
    pub slack_api_url: String,
    pub log_file: String,
}

impl BotConfig {
    /// Loads config from the environment. If `token` is given it takes
    /// precedence over `SLACK_API_TOKEN` and the credential file.
    pub fn load(token: Option<String>) -> Result<Self> {
        let slack_token = match token {
            Some(token) => token,
            None => match env::var("SLACK_API_TOKEN") {
                Ok(token) => token,
                Err(_) => token_from_file(Path::new(TOKEN_FILE))?,
            },
        };
        let slack_api_url =
            env::var("SLACK_API_URL").unwrap_or_else(|_| DEFAULT_SLACK_API_URL.to_string());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/qbot.log".to_string());

        Ok(Self {
            slack_token,
            slack_api_url,
            log_file,
        })
    }
}

/// Reads the token from a JSON credential file, the fallback used when
/// `SLACK_API_TOKEN` is unset.
pub fn token_from_file(path: &Path) -> Result<String> {
    let raw = std::fs::read_to_string(path).with_context(|| {
        format!(
            "SLACK_API_TOKEN is not set and {} could not be read",
            path.display()
        )
    })?;
    let parsed: TokenFile = serde_json::from_str(&raw)
        .with_context(|| format!("invalid token file {}", path.display()))?;
    Ok(parsed.token)
}
