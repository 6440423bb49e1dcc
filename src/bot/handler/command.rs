//! Slash command handling.

use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, CreateInteractionResponseMessage,
    Interaction, ResolvedValue,
};

use crate::error::AppError;
use crate::service::{level_settings::LevelSettingsService, leveling::LevelingService};

/// Handle slash-command interactions
pub async fn handle_interaction(db: &DatabaseConnection, ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    if command.data.name != "level" {
        return;
    }

    let content = match level_reply(db, &command).await {
        Ok(content) => content,
        Err(e) => {
            tracing::error!(
                "Failed to build level reply for user {}: {:?}",
                command.user.id,
                e
            );
            "Something went wrong looking up that level.".to_string()
        }
    };

    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new().content(content),
    );

    if let Err(e) = command.create_response(&ctx.http, response).await {
        tracing::error!("Failed to respond to level command: {:?}", e);
    }
}

/// Builds the reply for a `/level` invocation.
///
/// The optional `member` option selects another member; the default target is
/// the invoker. Disabled guilds and members without an activity record get a
/// plain explanatory message rather than an error.
async fn level_reply(
    db: &DatabaseConnection,
    command: &CommandInteraction,
) -> Result<String, AppError> {
    let Some(guild_id) = command.guild_id else {
        return Ok("This command can only be used in a server.".to_string());
    };
    let guild_id = guild_id.get();

    let mut target = command.user.clone();
    for option in command.data.options() {
        if option.name == "member" {
            if let ResolvedValue::User(user, _) = option.value {
                target = user.clone();
            }
        }
    }

    let Some(settings) = LevelSettingsService::new(db).resolve(guild_id).await? else {
        return Ok(
            "The leveling feature is not enabled on this server. Please enable it to use this command."
                .to_string(),
        );
    };

    let leveling = LevelingService::new(db);
    let Some((activity, standing)) = leveling
        .standing(target.id.get(), guild_id, &settings)
        .await?
    else {
        return Ok(format!("No data found for {}.", target.display_name()));
    };

    Ok(format!(
        "{} is at level {}\n{}\n\n{} messages sent, and {:.2} minutes in voice chat.",
        target.display_name(),
        standing.level,
        standing.progress_bar(),
        activity.message_count,
        activity.voice_minutes,
    ))
}
