use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::all::{Context, Message};

use crate::service::{level_settings::LevelSettingsService, leveling::LevelingService};

/// Handle message creation in a channel
///
/// Grants cooldown-gated message XP and, when a grant happened, re-syncs the
/// author's level roles. Guilds without an enabled leveling module produce no
/// store writes at all.
pub async fn handle_message(db: &DatabaseConnection, ctx: Context, message: Message) {
    if message.author.bot {
        return;
    }

    // Only track messages in guild channels (not DMs)
    let Some(guild_id) = message.guild_id else {
        return;
    };
    let guild_id = guild_id.get();
    let user_id = message.author.id.get();

    let settings = match LevelSettingsService::new(db).resolve(guild_id).await {
        Ok(Some(settings)) => settings,
        Ok(None) => return, // leveling not enabled in this guild
        Err(e) => {
            tracing::error!(
                "Failed to resolve leveling settings for guild {}: {:?}",
                guild_id,
                e
            );
            return;
        }
    };

    let leveling = LevelingService::new(db);

    let granted = match leveling
        .grant_message_xp(user_id, guild_id, &settings, Utc::now())
        .await
    {
        Ok(granted) => granted,
        Err(e) => {
            tracing::error!(
                "Failed to grant message XP to user {} in guild {}: {:?}",
                user_id,
                guild_id,
                e
            );
            return;
        }
    };

    if !granted {
        // cooldown has not elapsed
        return;
    }

    if let Err(e) = leveling
        .sync_level_roles(&ctx.http, guild_id, user_id, &settings)
        .await
    {
        tracing::error!(
            "Failed to sync level roles for user {} in guild {}: {:?}",
            user_id,
            guild_id,
            e
        );
    }
}
