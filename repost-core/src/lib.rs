//! # repost-core
//!
//! Core types and traits for the repost bot: [`Bot`], [`Handler`], message, user and photo types,
//! and tracing initialization. Transport-agnostic; used by repost-telegram, handler-chain and repost-bot.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{parse_message_id, Bot};
pub use error::{HandlerError, RepostError, Result};
pub use logger::init_tracing;
pub use types::{
    is_command, Chat, Handler, HandlerResponse, Message, ProfilePhoto, ToCoreMessage, ToCoreUser,
    User,
};
