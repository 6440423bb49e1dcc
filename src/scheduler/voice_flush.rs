use std::sync::Arc;

use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::all::{GuildId, UserId};
use serenity::cache::Cache;
use serenity::http::Http;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    data::member_activity::MemberActivityRepository,
    error::AppError,
    model::{level::VoiceContext, member_activity::MemberActivity},
    service::{level_settings::LevelSettingsService, leveling::LevelingService},
};

/// Starts the voice session flush scheduler
///
/// This scheduler runs every minute and settles every open voice session:
/// elapsed time is credited incrementally so long-running sessions accrue XP
/// without waiting for the member to leave. The sweep runs as its own task
/// and never blocks gateway event intake.
///
/// # Arguments
/// - `db`: Database connection
/// - `discord_http`: Discord HTTP client for applying role changes
/// - `discord_cache`: Gateway cache for reading live voice state
pub async fn start_scheduler(
    db: DatabaseConnection,
    discord_http: Arc<Http>,
    discord_cache: Arc<Cache>,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    // Clone resources for the job
    let job_db = db.clone();
    let job_http = discord_http.clone();
    let job_cache = discord_cache.clone();

    // Schedule job to run every minute
    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let db = job_db.clone();
        let http = job_http.clone();
        let cache = job_cache.clone();

        Box::pin(async move {
            if let Err(e) = flush_open_voice_sessions(&db, &http, &cache).await {
                tracing::error!("Error flushing voice sessions: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Voice flush scheduler started");

    Ok(())
}

/// Flushes every open voice session, one member at a time
///
/// Takes a snapshot of open sessions from the store, then processes each
/// member independently. Failures are isolated per member: one failed lookup
/// or update is logged and the sweep moves on to the next open session.
async fn flush_open_voice_sessions(
    db: &DatabaseConnection,
    http: &Arc<Http>,
    cache: &Arc<Cache>,
) -> Result<(), AppError> {
    let open_sessions = MemberActivityRepository::new(db).find_open_sessions().await?;

    if open_sessions.is_empty() {
        return Ok(());
    }

    tracing::debug!("Flushing {} open voice sessions", open_sessions.len());

    for session in open_sessions {
        if let Err(e) = flush_member(db, http, cache, &session).await {
            tracing::error!(
                "Failed to flush voice session for user {} in guild {}: {:?}",
                session.user_id,
                session.guild_id,
                e
            );
        }
    }

    Ok(())
}

/// Settles one member's open voice session and re-syncs their level roles
async fn flush_member(
    db: &DatabaseConnection,
    http: &Arc<Http>,
    cache: &Arc<Cache>,
    session: &MemberActivity,
) -> Result<(), AppError> {
    let Some(settings) = LevelSettingsService::new(db)
        .resolve(session.guild_id)
        .await?
    else {
        // leveling was disabled after the session opened; leave it for the
        // leave event to clear
        return Ok(());
    };

    let voice = voice_context(cache, session.guild_id, session.user_id);

    let leveling = LevelingService::new(db);
    leveling
        .close_voice_session(session.user_id, session.guild_id, &settings, Utc::now(), &voice)
        .await?;

    leveling
        .sync_level_roles(http, session.guild_id, session.user_id, &settings)
        .await
}

/// Reads a member's live voice state from the gateway cache.
///
/// A member the cache no longer shows in voice gets the default (eligible)
/// context; the store's open session is still settled so no time is lost.
fn voice_context(cache: &Cache, guild_id: u64, user_id: u64) -> VoiceContext {
    let Some(guild) = cache.guild(GuildId::new(guild_id)) else {
        return VoiceContext::default();
    };

    let Some(state) = guild.voice_states.get(&UserId::new(user_id)) else {
        return VoiceContext::default();
    };

    let alone_in_channel = state
        .channel_id
        .map(|channel_id| {
            guild
                .voice_states
                .values()
                .filter(|vs| vs.channel_id == Some(channel_id))
                .count()
                == 1
        })
        .unwrap_or(false);

    VoiceContext {
        self_muted: state.self_mute,
        alone_in_channel,
    }
}
