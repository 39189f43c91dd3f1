//! Post model for persistence.
//!
//! Maps to the `posts` table used by PostRepository.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A full row of the `posts` table.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PostRecord {
    pub id: i64,
    pub message_reference: i64,
    pub source_chat_id: i64,
    pub created_at: DateTime<Utc>,
}

/// What the delivery path needs to redeliver a post: the message id and the chat it lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::FromRow)]
pub struct PostRef {
    pub message_reference: i64,
    pub source_chat_id: i64,
}
