use std::sync::Arc;

use teloxide::dispatching::dialogue::InMemStorage;
use teloxide::prelude::*;
use tracing_subscriber::EnvFilter;

mod bot;
mod catalog;
mod config;
mod format;
mod store;

use bot::state::State;
use config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("📚 Starting courses bot...");

    // Load config
    let config = AppConfig::from_env()?;

    // Initialize the course store
    let store = store::from_config(&config)?;
    tracing::info!("Course store ready ('{}' backend).", config.courses_backend);

    // Build shared application state
    let state = Arc::new(bot::AppState {
        config: config.clone(),
        store,
    });

    // Create the Telegram bot
    let bot = Bot::new(&config.telegram_bot_token);

    // Build the dispatcher
    let handler = bot::build_handler();

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state, InMemStorage::<State>::new()])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
