use anyhow::Result;
use repost_core::init_tracing;
use repost_telegram::{fetch_bot_username, run_repl, TelegramBotAdapter};
use std::sync::Arc;
use storage::{PostRecord, PostStore};
use tracing::{info, instrument};

use crate::components::{build_handler_chain, open_store, BotComponents};
use crate::config::BotConfig;
use crate::session::SessionMap;

/// Main entry: validate config, init logging, open the store, build the chain, then run the REPL.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;

    info!(
        database_url = %config.database_url,
        admin_id = config.admin_id,
        onboarding_notify = config.onboarding_notify,
        "Initializing bot"
    );

    let store = open_store(&config.database_url).await?;
    info!(posts = store.count().await?, "Existing posts loaded");

    let teloxide_bot = config.telegram.build_bot();
    let bot_username = fetch_bot_username(&teloxide_bot).await;
    let components = BotComponents {
        bot: Arc::new(TelegramBotAdapter::new(teloxide_bot.clone())),
        store,
        sessions: SessionMap::new(),
        bot_username,
    };
    let handler_chain = build_handler_chain(&config, &components);

    info!("Bot started successfully");

    run_repl(teloxide_bot, handler_chain).await
}

/// One line per post, as printed by `repost stats`.
pub fn format_post(post: &PostRecord) -> String {
    format!(
        "#{}  message {} from chat {}  added {}",
        post.id,
        post.message_reference,
        post.source_chat_id,
        post.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    )
}

/// Prints a single post when `id` is given, otherwise the post count and the `limit` most recent
/// posts.
pub async fn print_stats(database_url: &str, limit: i64, id: Option<i64>) -> Result<()> {
    let repo = open_store(database_url).await?;

    if let Some(id) = id {
        match repo.get_post_by_id(id).await? {
            Some(post) => println!("{}", format_post(&post)),
            None => println!("No post with id {} in {}", id, database_url),
        }
        return Ok(());
    }

    let total = repo.count().await?;
    println!("{} post(s) stored in {}", total, database_url);

    for post in repo.recent_posts(limit).await? {
        println!("{}", format_post(&post));
    }
    Ok(())
}
