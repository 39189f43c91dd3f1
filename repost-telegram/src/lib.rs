//! # repost-telegram
//!
//! Telegram transport layer: adapters, [`repost_core::Bot`] implementation, minimal config, REPL runner.
//! Handles only Telegram connectivity and handler-chain execution; no persistence or submission logic.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{message_type, TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use config::TelegramConfig;
pub use runner::{fetch_bot_username, run_repl};
