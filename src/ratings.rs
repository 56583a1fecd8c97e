//! In-memory rating store.
//!
//! One rating per user at most, each stamped with its creation time so the
//! bot can decide when a replacement may be drawn. Nothing here survives a
//! process restart.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Minimum interval between fresh ratings for a given user.
pub const RATING_COOLDOWN_MS: i64 = 60 * 60 * 1000;

/// A user's current score and when it was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    /// Score in `0..=4`; displayed to users as `value + 1` stars.
    pub value: u8,
    pub created_at: DateTime<Utc>,
}

/// Map from user id to current [`Rating`]. Owned by the bot; handlers reach
/// it only through the reference they are given.
#[derive(Debug, Default)]
pub struct Ratings {
    by_user: HashMap<String, Rating>,
}

impl Ratings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current rating for `user_id`, if one has been drawn.
    pub fn get(&self, user_id: &str) -> Option<Rating> {
        self.by_user.get(user_id).copied()
    }

    /// Draws a new uniform score in `0..=4` for `user_id`, replacing any
    /// prior rating, and returns it.
    pub fn create(&mut self, user_id: &str, now: DateTime<Utc>) -> Rating {
        let rating = Rating {
            value: rand::thread_rng().gen_range(0..5),
            created_at: now,
        };
        self.by_user.insert(user_id.to_string(), rating);
        debug!(user_id, value = rating.value, "stored rating");
        rating
    }

    /// Stores a specific rating for `user_id` (seeding known state).
    pub fn insert(&mut self, user_id: &str, rating: Rating) {
        self.by_user.insert(user_id.to_string(), rating);
    }

    /// Clears all ratings.
    pub fn reset(&mut self) {
        self.by_user.clear();
    }

    pub fn len(&self) -> usize {
        self.by_user.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_user.is_empty()
    }
}
