//! Chat domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single message exchanged between two users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: i64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
