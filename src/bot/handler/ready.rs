//! Ready event handler for bot initialization.
//!
//! Fired once per connection after the gateway handshake. Used to log the
//! connection, set the bot's activity, and register the `/level` slash
//! command.

use serenity::all::{
    ActivityData, Command, CommandOptionType, Context, CreateCommand, CreateCommandOption, Ready,
};

/// Handles the ready event when the bot connects to Discord.
///
/// Registers the global `/level` command on every connection; re-registering
/// an unchanged command is a cheap idempotent call on Discord's side.
///
/// # Arguments
/// - `ctx` - Discord context for command registration and activity status
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::watching("the chat")));

    let level_command = CreateCommand::new("level")
        .description("Show a member's activity level")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::User,
                "member",
                "Member to look up (defaults to you)",
            )
            .required(false),
        );

    if let Err(e) = Command::create_global_command(&ctx.http, level_command).await {
        tracing::error!("Failed to register level command: {:?}", e);
    }
}
