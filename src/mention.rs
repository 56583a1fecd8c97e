//! Pure helpers for detecting @-mentions of the bot and its command phrases.
//!
//! Matching is a case-sensitive substring search on the raw message text,
//! not a word-boundary match; "rate meters" matches [`RATE_COMMAND`]. That
//! is the long-observed behavior of this bot and is kept as-is.

/// Command phrase that triggers the rating workflow. Checked first.
pub const RATE_COMMAND: &str = "rate me";

/// Command phrase that clears all stored ratings.
pub const RESET_COMMAND: &str = "reset";

/// Formats the mention tag Slack embeds in message text for a user id.
pub fn mention_tag(user_id: &str) -> String {
    format!("<@{}>", user_id)
}

/// Returns true if `text` contains the mention tag of `bot_user_id`.
#[inline]
pub fn is_bot_mentioned(text: &str, bot_user_id: &str) -> bool {
    text.contains(&mention_tag(bot_user_id))
}

/// Returns true if `text` contains `command` anywhere.
#[inline]
pub fn has_command(text: &str, command: &str) -> bool {
    text.contains(command)
}
