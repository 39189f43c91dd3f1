//! Delivery selector: answers any other text with a uniformly random stored post.

use std::sync::Arc;

use async_trait::async_trait;
use rand::seq::SliceRandom;
use rand::Rng;
use repost_core::{Bot, Handler, HandlerError, HandlerResponse, Message, RepostError, Result};
use storage::{PostRef, PostStore};
use tracing::{error, info, instrument, warn};

/// Picks one post with equal probability; `None` only when `posts` is empty.
pub fn choose_post<R: Rng + ?Sized>(posts: &[PostRef], rng: &mut R) -> Option<PostRef> {
    posts.choose(rng).copied()
}

/// Forwards a random post into the requesting chat. Non-text messages pass through untouched.
pub struct DeliveryHandler {
    bot: Arc<dyn Bot>,
    store: Arc<dyn PostStore>,
}

impl DeliveryHandler {
    pub fn new(bot: Arc<dyn Bot>, store: Arc<dyn PostStore>) -> Self {
        Self { bot, store }
    }

    async fn redeliver(
        &self,
        message: &Message,
        post: PostRef,
    ) -> std::result::Result<(), HandlerError> {
        let message_id = i32::try_from(post.message_reference).map_err(|_| {
            HandlerError::Redelivery(format!(
                "message reference {} is out of range",
                post.message_reference
            ))
        })?;

        self.bot
            .forward_message(&message.chat, post.source_chat_id, message_id)
            .await
            .map_err(|e| HandlerError::Redelivery(e.to_string()))
    }
}

#[async_trait]
impl Handler for DeliveryHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !message.is_text() {
            return Ok(HandlerResponse::Continue);
        }

        let posts = self.store.list_all().await.map_err(|e| {
            error!(error = %e, "Failed to list posts");
            RepostError::Database(e.to_string())
        })?;

        let post = {
            let mut rng = rand::thread_rng();
            choose_post(&posts, &mut rng)
        };

        let Some(post) = post else {
            let text = HandlerError::EmptyStore.to_string();
            self.bot.reply_to(message, &text).await?;
            return Ok(HandlerResponse::Reply(text));
        };

        match self.redeliver(message, post).await {
            Ok(()) => {
                info!(
                    chat_id = message.chat.id,
                    message_reference = post.message_reference,
                    source_chat_id = post.source_chat_id,
                    candidates = posts.len(),
                    "step: post redelivered"
                );
                Ok(HandlerResponse::Stop)
            }
            Err(HandlerError::Redelivery(detail)) => {
                warn!(
                    error = %detail,
                    chat_id = message.chat.id,
                    message_reference = post.message_reference,
                    "Redelivery failed"
                );
                let text = format!("An error occurred: {}", detail);
                self.bot.reply_to(message, &text).await?;
                Ok(HandlerResponse::Reply(text))
            }
            Err(other) => Err(other.into()),
        }
    }
}
