//! Wraps teloxide::Bot and implements [`repost_core::Bot`]. Production code talks to Telegram; tests substitute another Bot impl.

use async_trait::async_trait;
use repost_core::{Bot as CoreBot, Chat, Message, ProfilePhoto, RepostError, Result};
use teloxide::{
    prelude::*,
    types::{ChatId, FileId, InputFile, MessageId, UserId},
};
use tracing::debug;

/// Thin wrapper around teloxide::Bot that implements repost-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

fn bot_error(e: impl std::fmt::Display) -> RepostError {
    RepostError::Bot(e.to_string())
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(bot_error)?;
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }

    async fn send_photo(&self, chat: &Chat, photo: &ProfilePhoto) -> Result<()> {
        self.bot
            .send_photo(
                ChatId(chat.id),
                InputFile::file_id(FileId(photo.file_id.clone())),
            )
            .await
            .map_err(bot_error)?;
        Ok(())
    }

    async fn forward_message(&self, to: &Chat, from_chat_id: i64, message_id: i32) -> Result<()> {
        self.bot
            .forward_message(ChatId(to.id), ChatId(from_chat_id), MessageId(message_id))
            .await
            .map_err(bot_error)?;
        Ok(())
    }

    async fn get_user_profile_photo(&self, user_id: i64) -> Result<Option<ProfilePhoto>> {
        let photos = self
            .bot
            .get_user_profile_photos(UserId(user_id as u64))
            .await
            .map_err(bot_error)?;

        debug!(
            user_id = user_id,
            total_count = photos.total_count,
            "Fetched user profile photos"
        );

        // The first set is the current photo; each set lists the same image in several sizes.
        let current = photos.photos.into_iter().next();
        Ok(current.and_then(|sizes| {
            ProfilePhoto::largest(sizes.into_iter().map(|size| ProfilePhoto {
                file_id: size.file.id.to_string(),
                width: size.width,
                height: size.height,
            }))
        }))
    }
}
