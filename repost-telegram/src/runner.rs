//! REPL runner: converts teloxide messages to core::Message and passes them to HandlerChain.

use anyhow::Result;
use handler_chain::HandlerChain;
use repost_core::ToCoreMessage;
use teloxide::prelude::*;
use tracing::{error, info, instrument};

use super::adapters::TelegramMessageWrapper;

/// Asks Telegram who the bot is. Returns `None` (logged) when `getMe` fails or the bot has no
/// username.
#[instrument(skip(bot))]
pub async fn fetch_bot_username(bot: &teloxide::Bot) -> Option<String> {
    match bot.get_me().await {
        Ok(me) => {
            info!(username = ?me.user.username, "Bot identity confirmed");
            me.user.username.clone()
        }
        Err(e) => {
            error!(error = %e, "get_me failed; commands addressed to other bots will be accepted");
            None
        }
    }
}

/// Starts the long-polling REPL with the given teloxide Bot and HandlerChain.
///
/// teloxide delivers updates of one chat sequentially, so the chain is awaited inline: a `/fill`
/// and the post that follows it are always handled in order. Chain errors are logged, never fatal.
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    let chain = handler_chain;
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();

            info!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                message_id = %core_msg.id,
                message_type = %core_msg.message_type,
                "Received message"
            );

            if let Err(e) = chain.handle(&core_msg).await {
                error!(error = %e, user_id = core_msg.user.id, "Handler chain failed");
            }

            respond(())
        }
    })
    .await;

    Ok(())
}
