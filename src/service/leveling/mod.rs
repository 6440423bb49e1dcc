//! Leveling engine orchestration.
//!
//! `LevelingService` ties the accrual rules, the level curve, and role
//! reconciliation to the activity store and the Discord API. Event handlers
//! and the voice-flush sweep call into this service; the pure rules live in
//! the `curve`, `roles`, and `xp` submodules.

pub mod curve;
pub mod roles;
pub mod xp;

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use serenity::all::{GuildId, RoleId, UserId};
use serenity::http::Http;

use crate::{
    data::member_activity::MemberActivityRepository,
    error::AppError,
    model::{
        level::{LevelStanding, VoiceContext},
        level_settings::LevelSettings,
        member_activity::MemberActivity,
    },
};

pub struct LevelingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LevelingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Grants message XP to a member, subject to the guild's cooldown.
    ///
    /// The read-path check short-circuits without a write when the cooldown
    /// has clearly not elapsed; the repository's conditional increment
    /// re-checks the same predicate atomically, so two concurrent messages
    /// cannot both grant inside one window.
    ///
    /// # Arguments
    /// - `user_id`: Discord user ID of the message author
    /// - `guild_id`: Guild the message was sent in
    /// - `settings`: Guild's validated leveling settings
    /// - `now`: Message timestamp
    ///
    /// # Returns
    /// - `Ok(true)`: XP granted
    /// - `Ok(false)`: Cooldown has not elapsed; nothing written
    /// - `Err(AppError)`: Store error during the grant
    pub async fn grant_message_xp(
        &self,
        user_id: u64,
        guild_id: u64,
        settings: &LevelSettings,
        now: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        let repo = MemberActivityRepository::new(self.db);

        if let Some(activity) = repo.find(user_id, guild_id).await? {
            if !xp::cooldown_elapsed(
                activity.last_message_at,
                settings.message_xp_cooldown_secs,
                now,
            ) {
                return Ok(false);
            }
        }

        repo.grant_message_xp(user_id, guild_id, now, settings.message_xp_cooldown_secs)
            .await
    }

    /// Opens a voice session for a member who just joined a channel.
    pub async fn open_voice_session(
        &self,
        user_id: u64,
        guild_id: u64,
        now: DateTime<Utc>,
    ) -> Result<(), AppError> {
        MemberActivityRepository::new(self.db)
            .open_voice_session(user_id, guild_id, now)
            .await
    }

    /// Closes the member's open voice interval, crediting eligible minutes.
    ///
    /// No-op when the member has no record or no open session. When the
    /// guild's eligibility filters discard the interval (self-muted or alone),
    /// the minutes are dropped but the session start still moves to `now`;
    /// otherwise the discarded interval would be counted again at the next
    /// close. The session stays open either way; this is also the flush path
    /// for long-running sessions.
    ///
    /// # Arguments
    /// - `user_id`: Discord user ID
    /// - `guild_id`: Guild the session belongs to
    /// - `settings`: Guild's validated leveling settings
    /// - `now`: Close timestamp; becomes the new session start
    /// - `voice`: The member's live voice context for the eligibility filter
    ///
    /// # Returns
    /// - `Ok(())`: Interval credited, discarded, or nothing was open
    /// - `Err(AppError)`: Store error during the update
    pub async fn close_voice_session(
        &self,
        user_id: u64,
        guild_id: u64,
        settings: &LevelSettings,
        now: DateTime<Utc>,
        voice: &VoiceContext,
    ) -> Result<(), AppError> {
        let repo = MemberActivityRepository::new(self.db);

        let Some(activity) = repo.find(user_id, guild_id).await? else {
            return Ok(());
        };
        let Some(started_at) = activity.voice_session_started_at else {
            return Ok(());
        };

        if xp::interval_discarded(settings, voice) {
            return repo.reset_voice_session(user_id, guild_id, now).await;
        }

        let minutes = xp::voice_interval_minutes(started_at, now);
        repo.flush_voice_session(user_id, guild_id, minutes, now)
            .await
    }

    /// Closes and clears a member's voice session when they leave voice.
    pub async fn end_voice_session(
        &self,
        user_id: u64,
        guild_id: u64,
        settings: &LevelSettings,
        now: DateTime<Utc>,
        voice: &VoiceContext,
    ) -> Result<(), AppError> {
        self.close_voice_session(user_id, guild_id, settings, now, voice)
            .await?;

        MemberActivityRepository::new(self.db)
            .clear_voice_session(user_id, guild_id)
            .await
    }

    /// Computes a member's current standing from their stored counters.
    ///
    /// # Returns
    /// - `Ok(Some((activity, standing)))`: Counters and the derived standing
    /// - `Ok(None)`: The member has no activity record
    /// - `Err(AppError)`: Store error during lookup
    pub async fn standing(
        &self,
        user_id: u64,
        guild_id: u64,
        settings: &LevelSettings,
    ) -> Result<Option<(MemberActivity, LevelStanding)>, AppError> {
        let Some(activity) = MemberActivityRepository::new(self.db)
            .find(user_id, guild_id)
            .await?
        else {
            return Ok(None);
        };

        let standing = curve::evaluate(settings, xp::total_xp(settings, &activity));

        Ok(Some((activity, standing)))
    }

    /// Brings a member's Discord roles in line with their current level.
    ///
    /// Fetches the member's live role set, computes the delta for the guild's
    /// policy, and applies only the delta. A rejected role change (missing
    /// permission, role hierarchy) is logged and skipped; the XP state already
    /// persisted is never rolled back, and the next sync converges.
    ///
    /// # Arguments
    /// - `http`: Discord HTTP client
    /// - `guild_id`: Guild to reconcile in
    /// - `user_id`: Member to reconcile
    /// - `settings`: Guild's validated leveling settings
    ///
    /// # Returns
    /// - `Ok(())`: Reconciliation attempted (individual role failures logged)
    /// - `Err(AppError)`: Store lookup or member fetch failed
    pub async fn sync_level_roles(
        &self,
        http: &Http,
        guild_id: u64,
        user_id: u64,
        settings: &LevelSettings,
    ) -> Result<(), AppError> {
        if settings.level_roles.is_empty() {
            return Ok(());
        }

        let Some((_, standing)) = self.standing(user_id, guild_id, settings).await? else {
            return Ok(());
        };

        let guild = GuildId::new(guild_id);
        let user = UserId::new(user_id);

        let member = http.get_member(guild, user).await?;
        let current_roles: HashSet<RoleId> = member.roles.iter().copied().collect();

        let delta = roles::reconcile(settings, standing.level, &current_roles);
        if delta.is_empty() {
            return Ok(());
        }

        for role_id in &delta.add {
            if let Err(e) = http
                .add_member_role(guild, user, *role_id, Some("Level role sync"))
                .await
            {
                tracing::error!(
                    "Failed to add level role {} to user {} in guild {}: {:?}",
                    role_id,
                    user_id,
                    guild_id,
                    e
                );
            }
        }

        for role_id in &delta.remove {
            if let Err(e) = http
                .remove_member_role(guild, user, *role_id, Some("Level role sync"))
                .await
            {
                tracing::error!(
                    "Failed to remove level role {} from user {} in guild {}: {:?}",
                    role_id,
                    user_id,
                    guild_id,
                    e
                );
            }
        }

        tracing::debug!(
            "Synced level roles for user {} in guild {} (level {}, +{} -{})",
            user_id,
            guild_id,
            standing.level,
            delta.add.len(),
            delta.remove.len()
        );

        Ok(())
    }
}
