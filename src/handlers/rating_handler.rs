//! Rating handler: answers mentions containing "rate me" or "reset".
//!
//! Commands are checked in that order; a mention with neither phrase is a
//! silent no-op. Replies are composed here and sent by the client.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info};

use crate::core::{Handler, HandlerResponse, MessageEvent, Result};
use crate::mention::{has_command, is_bot_mentioned, mention_tag, RATE_COMMAND, RESET_COMMAND};
use crate::ratings::{Ratings, RATING_COOLDOWN_MS};

/// Confirmation sent after a reset command.
pub const RESET_REPLY: &str = "I have reset all ratings.";

/// Flavor line appended to a fresh rating, indexed by score (0 = lowest).
pub const SCORE_FLAVOR: [&str; 5] = [
    "I feel bad, but I'm sure you'll do better next time! Hang in there!",
    "I know it might not sound great, but it's better than 1 star!",
    "Above average! Now that's not too bad, is it?",
    "Ooh, I like you. You're pretty cool you know!",
    "You... are... *AWESOME*! Sometimes I can't believe you even exist!",
];

/// Handles mention-triggered rating requests against the shared [`Ratings`]
/// store. The bot's own user id is filled in once the transport has
/// authenticated; until then every message passes through untouched.
pub struct RatingHandler {
    ratings: Arc<Mutex<Ratings>>,
    bot_user_id: Arc<RwLock<Option<String>>>,
}

impl RatingHandler {
    pub fn new(ratings: Arc<Mutex<Ratings>>, bot_user_id: Arc<RwLock<Option<String>>>) -> Self {
        Self {
            ratings,
            bot_user_id,
        }
    }

    /// Produces the reply for a "rate me" request: a fresh rating when none
    /// exists or the cooldown has elapsed, otherwise the cached one with the
    /// remaining wait.
    async fn rate_user(&self, user_id: &str) -> String {
        let now = Utc::now();
        let mut ratings = self.ratings.lock().await;

        if let Some(existing) = ratings.get(user_id) {
            let elapsed_ms = (now - existing.created_at).num_milliseconds();
            if elapsed_ms < RATING_COOLDOWN_MS {
                let remaining_ms = RATING_COOLDOWN_MS - elapsed_ms;
                info!(
                    user_id,
                    value = existing.value,
                    remaining_ms,
                    "returning cached rating"
                );
                return cached_reply(user_id, existing.value, remaining_ms);
            }
        }

        let rating = ratings.create(user_id, now);
        info!(user_id, value = rating.value, "issued fresh rating");
        fresh_reply(user_id, rating.value)
    }
}

#[async_trait]
impl Handler for RatingHandler {
    async fn handle(&self, message: &MessageEvent) -> Result<HandlerResponse> {
        let bot_user_id = match self.bot_user_id.read().await.clone() {
            Some(id) => id,
            // Not authenticated yet; own identity unknown.
            None => return Ok(HandlerResponse::Continue),
        };

        if !is_bot_mentioned(&message.text, &bot_user_id) {
            return Ok(HandlerResponse::Continue);
        }

        if has_command(&message.text, RATE_COMMAND) {
            let reply = self.rate_user(&message.user).await;
            return Ok(HandlerResponse::Reply(reply));
        }

        if has_command(&message.text, RESET_COMMAND) {
            let mut ratings = self.ratings.lock().await;
            let cleared = ratings.len();
            ratings.reset();
            info!(cleared, user = %message.user, "cleared all ratings");
            return Ok(HandlerResponse::Reply(RESET_REPLY.to_string()));
        }

        debug!(user = %message.user, "mention without a recognized command");
        Ok(HandlerResponse::Continue)
    }
}

/// `1 star` / `2 stars`; quantity 1 is singular, 0 and 2+ are plural.
fn pluralize(value: i64, unit: &str) -> String {
    if value == 1 {
        format!("{} {}", value, unit)
    } else {
        format!("{} {}s", value, unit)
    }
}

fn fresh_reply(user_id: &str, value: u8) -> String {
    format!(
        "Hey {}! I have given you a rating of {}!\n{}",
        mention_tag(user_id),
        pluralize(i64::from(value) + 1, "star"),
        SCORE_FLAVOR[usize::from(value)]
    )
}

fn cached_reply(user_id: &str, value: u8, remaining_ms: i64) -> String {
    let wait = if remaining_ms < 60_000 {
        pluralize(remaining_ms / 1000, "second")
    } else {
        pluralize(remaining_ms / 60_000, "minute")
    };
    format!(
        "Hey {}! I have already rated you with a score of {}!\nYou can get a new rating in {}!",
        mention_tag(user_id),
        pluralize(i64::from(value) + 1, "star"),
        wait
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pluralize_singular_only_for_one() {
        assert_eq!(pluralize(1, "star"), "1 star");
        assert_eq!(pluralize(0, "star"), "0 stars");
        assert_eq!(pluralize(2, "star"), "2 stars");
        assert_eq!(pluralize(1, "minute"), "1 minute");
        assert_eq!(pluralize(59, "second"), "59 seconds");
    }

    #[test]
    fn fresh_reply_uses_displayed_star_count_and_flavor() {
        let reply = fresh_reply("U1", 0);
        assert_eq!(
            reply,
            format!(
                "Hey <@U1>! I have given you a rating of 1 star!\n{}",
                SCORE_FLAVOR[0]
            )
        );
        let reply = fresh_reply("U1", 4);
        assert!(reply.starts_with("Hey <@U1>! I have given you a rating of 5 stars!\n"));
        assert!(reply.ends_with(SCORE_FLAVOR[4]));
    }

    #[test]
    fn cached_reply_renders_seconds_below_one_minute() {
        let reply = cached_reply("U1", 2, 59_999);
        assert_eq!(
            reply,
            "Hey <@U1>! I have already rated you with a score of 3 stars!\nYou can get a new rating in 59 seconds!"
        );
    }

    #[test]
    fn cached_reply_renders_whole_minutes_otherwise() {
        let reply = cached_reply("U1", 2, 3_300_000);
        assert_eq!(
            reply,
            "Hey <@U1>! I have already rated you with a score of 3 stars!\nYou can get a new rating in 55 minutes!"
        );
        // 60s exactly is rendered in minutes, singular.
        let reply = cached_reply("U1", 0, 60_000);
        assert!(reply.ends_with("You can get a new rating in 1 minute!"));
        assert!(reply.contains("a score of 1 star!"));
    }
}
