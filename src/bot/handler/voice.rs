use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::all::{Context, VoiceState};

use crate::model::level::VoiceContext;
use crate::service::{level_settings::LevelSettingsService, leveling::LevelingService};

/// Handle voice state transitions
///
/// Joining a channel opens a voice session; leaving closes it, credits the
/// final interval, and re-syncs level roles. Moves between channels and
/// mute toggles leave the open session untouched; elapsed time is settled by
/// the periodic flush, not here.
pub async fn handle_voice_state_update(
    db: &DatabaseConnection,
    ctx: Context,
    old: Option<VoiceState>,
    new: VoiceState,
) {
    let Some(guild_id) = new.guild_id else {
        return;
    };
    let guild_id = guild_id.get();
    let user_id = new.user_id.get();

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

    let was_in_channel = old.as_ref().and_then(|state| state.channel_id).is_some();
    let now_in_channel = new.channel_id.is_some();

    let leveling = LevelingService::new(db);
    let now = Utc::now();

    if !was_in_channel && now_in_channel {
        // Member joined a voice channel
        if let Err(e) = leveling.open_voice_session(user_id, guild_id, now).await {
            tracing::error!(
                "Failed to open voice session for user {} in guild {}: {:?}",
                user_id,
                guild_id,
                e
            );
        }
    } else if was_in_channel && !now_in_channel {
        // Member left voice: settle the final interval and close the session.
        // No eligibility filter applies here: the member no longer has a
        // live voice state to inspect.
        if let Err(e) = leveling
            .end_voice_session(user_id, guild_id, &settings, now, &VoiceContext::default())
            .await
        {
            tracing::error!(
                "Failed to end voice session for user {} in guild {}: {:?}",
                user_id,
                guild_id,
                e
            );
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
}
