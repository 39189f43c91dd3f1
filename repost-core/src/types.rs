//! Core types: user, chat, message, profile photo, handler response, and Handler trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User identity (id, username, names).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// First and last name joined by a space; empty parts are skipped.
    pub fn display_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Chat (channel or private) identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

impl Chat {
    /// Private chat with a user; in Telegram its id equals the user id.
    pub fn private(id: i64) -> Self {
        Self {
            id,
            chat_type: "private".to_string(),
        }
    }
}

/// A single inbound message. `id` is the transport message id; `content` is the text or empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    /// "text", "photo", "video", ... ; anything that is not "text" has no usable `content`.
    pub message_type: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn is_text(&self) -> bool {
        self.message_type == "text"
    }
}

/// One size of a profile photo as the transport describes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePhoto {
    pub file_id: String,
    pub width: u32,
    pub height: u32,
}

impl ProfilePhoto {
    /// Picks the size with the most pixels.
    pub fn largest(sizes: impl IntoIterator<Item = ProfilePhoto>) -> Option<ProfilePhoto> {
        sizes
            .into_iter()
            .max_by_key(|p| u64::from(p.width) * u64::from(p.height))
    }
}

/// Handler result for the chain. `Reply(text)` carries the response body so later handlers can use it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; no response body.
    Stop,
    /// Stop the chain and attach the reply text that was sent.
    Reply(String),
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// Single handler concept: optional before / handle / after. Chain runs all before → handle until Stop/Reply → all after (reverse).
#[async_trait]
pub trait Handler: Send + Sync {
    /// Runs before the handle phase. Return false to stop the chain.
    async fn before(&self, _message: &Message) -> crate::error::Result<bool> {
        Ok(true)
    }
    /// Processes the message. Return Stop or Reply to end the handle phase. Default: Continue.
    async fn handle(&self, _message: &Message) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }
    /// Runs after the handle phase (reverse order), with the final response.
    async fn after(
        &self,
        _message: &Message,
        _response: &HandlerResponse,
    ) -> crate::error::Result<()> {
        Ok(())
    }
}

/// True when `text` is the bot command `name`, optionally followed by arguments.
///
/// A `/name@SomeBot` suffix must match `bot_username` (case-insensitive), so commands addressed to
/// another bot in a group are not claimed. When the username is unknown any suffix is accepted.
pub fn is_command(text: &str, name: &str, bot_username: Option<&str>) -> bool {
    let first = match text.split_whitespace().next() {
        Some(word) => word,
        None => return false,
    };
    let Some(cmd) = first.strip_prefix('/') else {
        return false;
    };
    match cmd.split_once('@') {
        Some((cmd, target)) => {
            cmd == name && bot_username.map_or(true, |me| me.eq_ignore_ascii_case(target))
        }
        None => cmd == name,
    }
}
