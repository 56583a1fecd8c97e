//! Message handlers.

pub mod rating_handler;

pub use rating_handler::{RatingHandler, RESET_REPLY, SCORE_FLAVOR};
