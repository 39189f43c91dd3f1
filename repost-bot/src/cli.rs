//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::BotConfig;

#[derive(Parser)]
#[command(name = "repost")]
#[command(about = "Telegram bot that forwards random admin-submitted posts", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Print how many posts are stored and the most recent ones, or a single post by id.
    Stats {
        /// Database to inspect; defaults to DATABASE_URL or posts.db.
        #[arg(short, long)]
        database_url: Option<String>,
        #[arg(short, long, default_value = "10")]
        limit: i64,
        /// Show only the post with this store id.
        #[arg(long)]
        id: Option<i64>,
    },
}

/// Load BotConfig from environment. If `token` is provided it overrides BOT_TOKEN.
pub fn load_config(token: Option<String>) -> Result<BotConfig> {
    BotConfig::load(token)
}
