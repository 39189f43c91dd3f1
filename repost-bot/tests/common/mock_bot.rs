//! Mock implementation of [`repost_bot::Bot`] for integration tests.
//!
//! Records every outbound call so tests can assert on replies, forwards and photos without
//! hitting Telegram. Forwarding and profile-photo lookups can be made to fail.

use std::sync::Mutex;

use async_trait::async_trait;
use repost_bot::{Bot, Chat, Message, ProfilePhoto, RepostError, Result};

/// One recorded outbound call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCall {
    Text { chat_id: i64, text: String },
    Photo { chat_id: i64, file_id: String },
    Forward { to_chat_id: i64, from_chat_id: i64, message_id: i32 },
}

#[derive(Default)]
pub struct MockBot {
    calls: Mutex<Vec<BotCall>>,
    profile_photo: Option<ProfilePhoto>,
    fail_forward: Option<String>,
    fail_profile_photo: bool,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile_photo(mut self, photo: ProfilePhoto) -> Self {
        self.profile_photo = Some(photo);
        self
    }

    /// Every forward fails with `RepostError::Bot(reason)`.
    pub fn failing_forward(mut self, reason: &str) -> Self {
        self.fail_forward = Some(reason.to_string());
        self
    }

    pub fn failing_profile_photo(mut self) -> Self {
        self.fail_profile_photo = true;
        self
    }

    pub fn calls(&self) -> Vec<BotCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Texts sent to `chat_id`, in order.
    pub fn texts_to(&self, chat_id: i64) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                BotCall::Text { chat_id: id, text } if id == chat_id => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn forwards(&self) -> Vec<BotCall> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, BotCall::Forward { .. }))
            .collect()
    }

    fn record(&self, call: BotCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.record(BotCall::Text {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }

    async fn send_photo(&self, chat: &Chat, photo: &ProfilePhoto) -> Result<()> {
        self.record(BotCall::Photo {
            chat_id: chat.id,
            file_id: photo.file_id.clone(),
        });
        Ok(())
    }

    async fn forward_message(&self, to: &Chat, from_chat_id: i64, message_id: i32) -> Result<()> {
        if let Some(reason) = &self.fail_forward {
            return Err(RepostError::Bot(reason.clone()));
        }
        self.record(BotCall::Forward {
            to_chat_id: to.id,
            from_chat_id,
            message_id,
        });
        Ok(())
    }

    async fn get_user_profile_photo(&self, _user_id: i64) -> Result<Option<ProfilePhoto>> {
        if self.fail_profile_photo {
            return Err(RepostError::Bot("profile photos unavailable".to_string()));
        }
        Ok(self.profile_photo.clone())
    }
}
