//! Onboarding: `/start` greets the user and, when enabled, tells the admin who arrived.

use std::sync::Arc;

use async_trait::async_trait;
use repost_core::{
    is_command, Bot, Chat, Handler, HandlerResponse, Message, ProfilePhoto, Result, User,
};
use tracing::{error, info, instrument, warn};

pub const START_COMMAND: &str = "start";

pub const WELCOME_REPLIES: [&str; 2] = [
    "Hello! Send me any message and I will share a random post with you.",
    "Admins can use /fill to add a new post.",
];

/// Admin notification text for a newly started user.
pub fn format_user_summary(user: &User, has_photo: bool) -> String {
    let name = user.display_name();
    let username = match user.username.as_deref() {
        Some(u) if !u.is_empty() => format!("@{}", u),
        _ => "not set".to_string(),
    };
    format!(
        "New user started the bot\nName: {}\nID: {}\nUsername: {}\nProfile photo: {}",
        if name.is_empty() { "unknown" } else { name.as_str() },
        user.id,
        username,
        if has_photo { "attached" } else { "not available" },
    )
}

pub struct StartHandler {
    bot: Arc<dyn Bot>,
    admin_id: i64,
    notify_admin: bool,
    bot_username: Option<String>,
}

impl StartHandler {
    pub fn new(bot: Arc<dyn Bot>, admin_id: i64, notify_admin: bool) -> Self {
        Self {
            bot,
            admin_id,
            notify_admin,
            bot_username: None,
        }
    }

    pub fn with_bot_username(mut self, bot_username: Option<String>) -> Self {
        self.bot_username = bot_username;
        self
    }

    /// A failed lookup is treated like a user without a photo.
    async fn profile_photo(&self, user: &User) -> Option<ProfilePhoto> {
        match self.bot.get_user_profile_photo(user.id).await {
            Ok(photo) => photo,
            Err(e) => {
                warn!(error = %e, user_id = user.id, "Profile photo lookup failed");
                None
            }
        }
    }

    async fn notify(&self, user: &User) -> Result<()> {
        let photo = self.profile_photo(user).await;
        let admin_chat = Chat::private(self.admin_id);

        let summary = format_user_summary(user, photo.is_some());
        self.bot.send_message(&admin_chat, &summary).await?;
        if let Some(photo) = photo {
            self.bot.send_photo(&admin_chat, &photo).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Handler for StartHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let username = self.bot_username.as_deref();
        if !message.is_text() || !is_command(&message.content, START_COMMAND, username) {
            return Ok(HandlerResponse::Continue);
        }

        if self.notify_admin {
            // The user is still greeted when the admin cannot be reached.
            match self.notify(&message.user).await {
                Ok(()) => info!(user_id = message.user.id, "step: admin notified"),
                Err(e) => {
                    error!(error = %e, user_id = message.user.id, "Admin notification failed")
                }
            }
        }

        for text in WELCOME_REPLIES {
            self.bot.reply_to(message, text).await?;
        }
        Ok(HandlerResponse::Stop)
    }
}
