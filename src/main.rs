mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod util;

use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    tracing::info!("Starting levelboard");

    // Initialize the Discord client and extract shared handles before the
    // scheduler needs them
    let (bot_client, discord_http, discord_cache) =
        bot::start::init_bot(&config, db.clone()).await?;

    // Start the voice flush sweep on its own schedule
    scheduler::voice_flush::start_scheduler(db, discord_http, discord_cache).await?;

    // Connect to the gateway (this blocks until shutdown)
    bot::start::start_bot(bot_client).await?;

    Ok(())
}
