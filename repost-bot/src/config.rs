//! Application config, loaded from environment variables (after `.env` via dotenvy).

use anyhow::{bail, Context, Result};
use repost_telegram::TelegramConfig;
use std::env;

pub const DEFAULT_DATABASE_URL: &str = "posts.db";
pub const DEFAULT_LOG_FILE: &str = "logs/repost-bot.log";

/// Repost bot configuration.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    /// Telegram user id allowed to submit posts; also receives onboarding notifications.
    pub admin_id: i64,
    /// SQLite file path or `sqlite:` URL. Env: `DATABASE_URL`.
    pub database_url: String,
    /// Env: `LOG_FILE`.
    pub log_file: String,
    /// Send the admin a summary when a user sends `/start`. Env: `ONBOARDING_NOTIFY`.
    pub onboarding_notify: bool,
}

impl BotConfig {
    /// Loads config from env. `token` overrides BOT_TOKEN when given.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::load(token)?;
        let admin_id = env::var("ADMIN_ID")
            .context("ADMIN_ID not set")?
            .trim()
            .parse::<i64>()
            .context("ADMIN_ID must be a numeric Telegram user id")?;
        let onboarding_notify = match env::var("ONBOARDING_NOTIFY") {
            Ok(v) => parse_bool(&v).context("ONBOARDING_NOTIFY must be true or false")?,
            Err(_) => true,
        };

        Ok(Self {
            telegram,
            admin_id,
            database_url: database_url_from_env(),
            log_file: env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string()),
            onboarding_notify,
        })
    }

    /// Checks values that parse but cannot work.
    pub fn validate(&self) -> Result<()> {
        if self.telegram.bot_token.trim().is_empty() {
            bail!("BOT_TOKEN is empty");
        }
        if self.database_url.trim().is_empty() {
            bail!("DATABASE_URL is empty");
        }
        if self.log_file.trim().is_empty() {
            bail!("LOG_FILE is empty");
        }
        Ok(())
    }
}

/// `DATABASE_URL` or the default `posts.db`.
pub fn database_url_from_env() -> String {
    env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("invalid boolean: {}", other),
    }
}
