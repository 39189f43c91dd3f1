//! Component factory: opens the store and assembles the handler chain.

use anyhow::Result;
use handler_chain::HandlerChain;
use repost_core::Bot;
use std::sync::Arc;
use storage::{PostRepository, PostStore};
use tracing::{error, info, instrument};

use crate::config::BotConfig;
use crate::handlers::{DeliveryHandler, LoggingHandler, StartHandler, SubmissionHandler};
use crate::session::SessionMap;

/// Shared dependencies of the handlers.
#[derive(Clone)]
pub struct BotComponents {
    pub bot: Arc<dyn Bot>,
    pub store: Arc<dyn PostStore>,
    pub sessions: SessionMap,
    /// The bot's own username from `getMe`; `None` when it could not be fetched.
    pub bot_username: Option<String>,
}

/// Opens the post repository (creating the schema if absent).
#[instrument]
pub async fn open_store(database_url: &str) -> Result<Arc<PostRepository>> {
    let repo = PostRepository::new(database_url).await.map_err(|e| {
        error!(error = %e, database_url = %database_url, "Failed to initialize post storage");
        anyhow::anyhow!("Failed to initialize post storage: {}", e)
    })?;
    info!(database_url = %database_url, "Post storage ready");
    Ok(Arc::new(repo))
}

/// Builds the chain: logging → submission gate → onboarding → delivery.
///
/// The gate comes first so a user who is mid-submission always has their next message stored.
pub fn build_handler_chain(config: &BotConfig, components: &BotComponents) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(
            SubmissionHandler::new(
                components.bot.clone(),
                components.store.clone(),
                components.sessions.clone(),
                config.admin_id,
            )
            .with_bot_username(components.bot_username.clone()),
        ))
        .add_handler(Arc::new(
            StartHandler::new(
                components.bot.clone(),
                config.admin_id,
                config.onboarding_notify,
            )
            .with_bot_username(components.bot_username.clone()),
        ))
        .add_handler(Arc::new(DeliveryHandler::new(
            components.bot.clone(),
            components.store.clone(),
        )))
}
