use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};
use serenity::cache::Cache;
use serenity::http::Http;

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;

/// Initializes the Discord client without starting it.
///
/// Builds the serenity client with the gateway intents the leveling engine
/// needs and returns it together with cloned handles to its HTTP client and
/// gateway cache. The handles are shared with the voice-flush scheduler so it
/// can apply role changes and read live voice state without a second Discord
/// connection.
///
/// # Arguments
/// - `config` - Application configuration containing the bot token
/// - `db` - Database connection for the event handler
///
/// # Returns
/// - `Ok((Client, Arc<Http>, Arc<Cache>))` - Initialized client and shared handles
/// - `Err(AppError)` - Client initialization failed
pub async fn init_bot(
    config: &Config,
    db: DatabaseConnection,
) -> Result<(Client, Arc<Http>, Arc<Cache>), AppError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_VOICE_STATES
        | GatewayIntents::GUILD_MEMBERS;

    let handler = Handler::new(db);

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    let http = client.http.clone();
    let cache = client.cache.clone();

    Ok((client, http, cache))
}

/// Starts the Discord bot in a blocking manner
///
/// Connects the initialized client to the gateway and processes events until
/// shutdown.
///
/// # Arguments
/// - `client` - Client produced by `init_bot`
///
/// # Returns
/// - `Ok(())` if the bot runs to shutdown
/// - `Err(AppError)` if the gateway connection fails
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
