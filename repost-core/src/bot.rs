//! Bot abstraction for the outbound half of the transport.
//!
//! [`Bot`] is transport-agnostic; repost-telegram implements it via teloxide, tests substitute a recorder.

use crate::error::{HandlerError, Result};
use crate::types::{Chat, Message, ProfilePhoto};
use async_trait::async_trait;

/// Outbound operations the handlers need. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()>;
    /// Sends an already-uploaded photo (by transport file id) to the given chat.
    async fn send_photo(&self, chat: &Chat, photo: &ProfilePhoto) -> Result<()>;
    /// Redelivers message `message_id` of chat `from_chat_id` into `to` without re-sending its content.
    async fn forward_message(&self, to: &Chat, from_chat_id: i64, message_id: i32) -> Result<()>;
    /// Highest-resolution size of the user's current profile photo; `None` when the user has none.
    async fn get_user_profile_photo(&self, user_id: i64) -> Result<Option<ProfilePhoto>>;
}

/// Parses a message id string into an i32. Used when storing and forwarding posts.
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| HandlerError::InvalidMessageId(s.to_string()).into())
}
