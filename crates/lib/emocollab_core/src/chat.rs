//! Chat history lookup.
//!
//! There is no message store yet: every lookup yields the same two-message
//! conversation, stamped relative to the injected clock.

use std::sync::Arc;

use chrono::TimeDelta;
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::error::ChatError;
use crate::models::ChatMessage;

/// Parses a user id taken from a request path.
pub fn parse_user_id(raw: &str) -> Result<i64, ChatError> {
    raw.parse::<i64>()
        .map_err(|_| ChatError::InvalidUserId(raw.to_string()))
}

/// Serves chat histories.
#[derive(Clone)]
pub struct ChatService {
    clock: Arc<dyn Clock>,
}

impl ChatService {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Chat history visible to `user_id`.
    ///
    /// The id does not influence the result.
    pub fn history(&self, user_id: i64) -> Vec<ChatMessage> {
        let now = self.clock.now();
        debug!(user_id, "building chat history");

        vec![
            ChatMessage {
                id: 1,
                sender_id: 1,
                receiver_id: 2,
                message: "Halo, ada yang bisa dibantu?".to_string(),
                created_at: now - TimeDelta::hours(2),
            },
            ChatMessage {
                id: 2,
                sender_id: 2,
                receiver_id: 1,
                message: "Saya ingin konsultasi.".to_string(),
                created_at: now - TimeDelta::hours(1),
            },
        ]
    }
}

impl Default for ChatService {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}
