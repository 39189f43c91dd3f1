//! `repost` binary: runs the bot or inspects its store.

use anyhow::Result;
use clap::Parser;
use repost_bot::config::database_url_from_env;
use repost_bot::{load_config, print_stats, run_bot, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = load_config(token)?;
            run_bot(config).await
        }
        Commands::Stats {
            database_url,
            limit,
            id,
        } => {
            let database_url = database_url.unwrap_or_else(database_url_from_env);
            print_stats(&database_url, limit, id).await
        }
    }
}
