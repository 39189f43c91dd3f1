//! Shared fixtures for repost-bot integration tests.

#![allow(dead_code)]

pub mod mock_bot;

use std::sync::Arc;

use chrono::Utc;
use repost_bot::{BotComponents, BotConfig, SessionMap};
use repost_bot::{Chat, Message, User};
use repost_telegram::TelegramConfig;
use storage::{PostRepository, PostStore};

pub use mock_bot::{BotCall, MockBot};

pub const ADMIN_ID: i64 = 1000;
pub const USER_ID: i64 = 2000;

/// A text message from `user_id` in their private chat.
pub fn message(id: i32, user_id: i64, content: &str) -> Message {
    Message {
        id: id.to_string(),
        user: User {
            id: user_id,
            username: Some(format!("user{}", user_id)),
            first_name: Some("Test".to_string()),
            last_name: Some("User".to_string()),
        },
        chat: Chat::private(user_id),
        content: content.to_string(),
        message_type: "text".to_string(),
        created_at: Utc::now(),
    }
}

/// A non-text message (e.g. a photo) from `user_id`.
pub fn media_message(id: i32, user_id: i64, message_type: &str) -> Message {
    Message {
        content: String::new(),
        message_type: message_type.to_string(),
        ..message(id, user_id, "")
    }
}

pub fn test_config(onboarding_notify: bool) -> BotConfig {
    BotConfig {
        telegram: TelegramConfig::with_token("test_bot_token_12345".to_string()),
        admin_id: ADMIN_ID,
        database_url: "sqlite::memory:".to_string(),
        log_file: "logs/test.log".to_string(),
        onboarding_notify,
    }
}

pub async fn memory_store() -> Arc<PostRepository> {
    Arc::new(
        PostRepository::new("sqlite::memory:")
            .await
            .expect("in-memory repository"),
    )
}

pub const BOT_USERNAME: &str = "repost_bot";

pub fn components(bot: Arc<MockBot>, store: Arc<dyn PostStore>) -> BotComponents {
    BotComponents {
        bot,
        store,
        sessions: SessionMap::new(),
        bot_username: Some(BOT_USERNAME.to_string()),
    }
}
