//! Submission gate: `/fill` from the admin arms a session; the admin's next message becomes a post.

use std::sync::Arc;

use async_trait::async_trait;
use repost_core::{
    is_command, parse_message_id, Bot, Handler, HandlerError, HandlerResponse, Message,
    RepostError, Result,
};
use storage::PostStore;
use tracing::{error, info, instrument, warn};

use crate::session::{SessionMap, SessionState};

pub const FILL_COMMAND: &str = "fill";

const AWAITING_POST_REPLY: &str = "Please send the post you want to add.";

/// Claims `/fill` and every message from a user whose session is awaiting a post.
pub struct SubmissionHandler {
    bot: Arc<dyn Bot>,
    store: Arc<dyn PostStore>,
    sessions: SessionMap,
    admin_id: i64,
    bot_username: Option<String>,
}

impl SubmissionHandler {
    pub fn new(
        bot: Arc<dyn Bot>,
        store: Arc<dyn PostStore>,
        sessions: SessionMap,
        admin_id: i64,
    ) -> Self {
        Self {
            bot,
            store,
            sessions,
            admin_id,
            bot_username: None,
        }
    }

    /// Only `/fill@<username>` is claimed in groups once the bot knows its own username.
    pub fn with_bot_username(mut self, bot_username: Option<String>) -> Self {
        self.bot_username = bot_username;
        self
    }

    fn is_admin(&self, message: &Message) -> bool {
        message.user.id == self.admin_id
    }

    async fn refuse(&self, message: &Message) -> Result<HandlerResponse> {
        warn!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            "Unauthorized submission attempt"
        );
        let text = HandlerError::Unauthorized.to_string();
        self.bot.reply_to(message, &text).await?;
        Ok(HandlerResponse::Reply(text))
    }

    async fn start_submission(&self, message: &Message) -> Result<HandlerResponse> {
        if !self.is_admin(message) {
            self.sessions.reset(message.user.id).await;
            return self.refuse(message).await;
        }

        self.bot.reply_to(message, AWAITING_POST_REPLY).await?;
        self.sessions.begin_submission(message.user.id).await;
        info!(user_id = message.user.id, "step: awaiting post");
        Ok(HandlerResponse::Reply(AWAITING_POST_REPLY.to_string()))
    }

    async fn complete_submission(&self, message: &Message) -> Result<HandlerResponse> {
        if !self.is_admin(message) {
            return self.refuse(message).await;
        }

        let message_reference = parse_message_id(&message.id)?;
        let id = self
            .store
            .append(i64::from(message_reference), message.chat.id)
            .await
            .map_err(|e| {
                error!(error = %e, user_id = message.user.id, "Failed to save post");
                RepostError::Database(e.to_string())
            })?;

        info!(
            id = id,
            message_reference = message_reference,
            chat_id = message.chat.id,
            message_type = %message.message_type,
            "step: post added"
        );

        let text = format!("Post added with message ID: {}", message_reference);
        self.bot.reply_to(message, &text).await?;
        Ok(HandlerResponse::Reply(text))
    }
}

#[async_trait]
impl Handler for SubmissionHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        // Taking the session consumes it whatever happens next.
        if self.sessions.take(message.user.id).await == SessionState::AwaitingPost {
            return self.complete_submission(message).await;
        }

        let username = self.bot_username.as_deref();
        if message.is_text() && is_command(&message.content, FILL_COMMAND, username) {
            return self.start_submission(message).await;
        }

        Ok(HandlerResponse::Continue)
    }
}
