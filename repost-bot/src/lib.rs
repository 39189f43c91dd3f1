//! # Repost bot application
//!
//! Wires handler-chain, the post store, and the Telegram transport. The admin submits posts with
//! `/fill`; everyone else gets a random stored post forwarded back on any text message.

pub mod cli;
pub mod components;
pub mod config;
pub mod handlers;
pub mod runner;
pub mod session;

pub use cli::{load_config, Cli, Commands};
pub use components::{build_handler_chain, open_store, BotComponents};
pub use config::BotConfig;
pub use handlers::{
    choose_post, format_user_summary, DeliveryHandler, LoggingHandler, StartHandler,
    SubmissionHandler,
};
pub use runner::{format_post, print_stats, run_bot};
pub use session::{SessionMap, SessionState};

pub use repost_core::{
    Bot, Chat, Handler, HandlerError, HandlerResponse, Message, ProfilePhoto, RepostError, Result,
    User,
};
