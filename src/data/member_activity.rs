//! Member activity repository.
//!
//! All counter updates in this repository are expressed as single conditional
//! `UPDATE` statements with column-expression increments rather than
//! read-then-write, so concurrent events for the same (user, guild) key
//! serialize at the store and cannot lose updates.

use chrono::{DateTime, Duration, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    ExprTrait, QueryFilter,
};

use crate::{error::AppError, model::member_activity::MemberActivity};

/// Repository for member activity counter operations.
pub struct MemberActivityRepository<'a> {
    /// Database connection for executing queries.
    db: &'a DatabaseConnection,
}

impl<'a> MemberActivityRepository<'a> {
    /// Creates a new repository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection for executing queries
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a member's activity record.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(Some(MemberActivity))` - The member has an activity record
    /// - `Ok(None)` - No record yet (no qualifying event has occurred)
    /// - `Err(AppError)` - Database error during lookup
    pub async fn find(&self, user_id: u64, guild_id: u64) -> Result<Option<MemberActivity>, AppError> {
        let row = entity::prelude::MemberActivity::find()
            .filter(entity::member_activity::Column::UserId.eq(user_id.to_string()))
            .filter(entity::member_activity::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await?;

        row.map(MemberActivity::from_entity).transpose()
    }

    /// Grants one message's worth of XP if the cooldown window has elapsed.
    ///
    /// Issues a conditional increment: the message count goes up by one and
    /// `last_message_at` moves to `now` only when the stored timestamp is
    /// absent or at least `cooldown_secs` old (closed-open: a message exactly
    /// at the boundary is granted). When no record exists yet, one is created
    /// with a count of one.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID
    /// - `guild_id` - Discord guild ID
    /// - `now` - Grant timestamp
    /// - `cooldown_secs` - Guild's message-XP cooldown window
    ///
    /// # Returns
    /// - `Ok(true)` - XP was granted (record updated or created)
    /// - `Ok(false)` - Cooldown has not elapsed; nothing written
    /// - `Err(AppError)` - Database error during update or insert
    pub async fn grant_message_xp(
        &self,
        user_id: u64,
        guild_id: u64,
        now: DateTime<Utc>,
        cooldown_secs: i64,
    ) -> Result<bool, AppError> {
        let threshold = now - Duration::seconds(cooldown_secs);

        let updated = entity::prelude::MemberActivity::update_many()
            .col_expr(
                entity::member_activity::Column::MessageCount,
                Expr::col(entity::member_activity::Column::MessageCount).add(1),
            )
            .col_expr(
                entity::member_activity::Column::LastMessageAt,
                Expr::value(now),
            )
            .filter(entity::member_activity::Column::UserId.eq(user_id.to_string()))
            .filter(entity::member_activity::Column::GuildId.eq(guild_id.to_string()))
            .filter(
                Condition::any()
                    .add(entity::member_activity::Column::LastMessageAt.is_null())
                    .add(entity::member_activity::Column::LastMessageAt.lte(threshold)),
            )
            .exec(self.db)
            .await?;

        if updated.rows_affected > 0 {
            return Ok(true);
        }

        // Zero rows means either the cooldown blocked the grant or no record
        // exists yet; only the latter creates one.
        if self.find(user_id, guild_id).await?.is_some() {
            return Ok(false);
        }

        entity::member_activity::ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
            guild_id: ActiveValue::Set(guild_id.to_string()),
            message_count: ActiveValue::Set(1),
            voice_minutes: ActiveValue::Set(0.0),
            last_message_at: ActiveValue::Set(Some(now)),
            voice_session_started_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(true)
    }

    /// Opens a voice session by stamping its start time.
    ///
    /// Creates the activity record if the member has none yet. An already-open
    /// session is overwritten; the gateway is authoritative about when the
    /// member joined.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID
    /// - `guild_id` - Discord guild ID
    /// - `now` - Session start timestamp
    ///
    /// # Returns
    /// - `Ok(())` - Session start recorded
    /// - `Err(AppError)` - Database error during update or insert
    pub async fn open_voice_session(
        &self,
        user_id: u64,
        guild_id: u64,
        now: DateTime<Utc>,
    ) -> Result<(), AppError> {
        let updated = entity::prelude::MemberActivity::update_many()
            .col_expr(
                entity::member_activity::Column::VoiceSessionStartedAt,
                Expr::value(now),
            )
            .filter(entity::member_activity::Column::UserId.eq(user_id.to_string()))
            .filter(entity::member_activity::Column::GuildId.eq(guild_id.to_string()))
            .exec(self.db)
            .await?;

        if updated.rows_affected == 0 {
            entity::member_activity::ActiveModel {
                user_id: ActiveValue::Set(user_id.to_string()),
                guild_id: ActiveValue::Set(guild_id.to_string()),
                message_count: ActiveValue::Set(0),
                voice_minutes: ActiveValue::Set(0.0),
                last_message_at: ActiveValue::Set(None),
                voice_session_started_at: ActiveValue::Set(Some(now)),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    /// Credits a closed voice interval and restarts the session window.
    ///
    /// Adds `minutes` to the member's voice total and moves the session start
    /// to `now`, so a continuing session accrues incrementally without double
    /// counting. No-op when the member has no activity record.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID
    /// - `guild_id` - Discord guild ID
    /// - `minutes` - Eligible minutes to credit, already clamped non-negative
    /// - `now` - New session start timestamp
    ///
    /// # Returns
    /// - `Ok(())` - Interval credited (or no record existed)
    /// - `Err(AppError)` - Database error during update
    pub async fn flush_voice_session(
        &self,
        user_id: u64,
        guild_id: u64,
        minutes: f64,
        now: DateTime<Utc>,
    ) -> Result<(), AppError> {
        entity::prelude::MemberActivity::update_many()
            .col_expr(
                entity::member_activity::Column::VoiceMinutes,
                Expr::col(entity::member_activity::Column::VoiceMinutes).add(minutes),
            )
            .col_expr(
                entity::member_activity::Column::VoiceSessionStartedAt,
                Expr::value(now),
            )
            .filter(entity::member_activity::Column::UserId.eq(user_id.to_string()))
            .filter(entity::member_activity::Column::GuildId.eq(guild_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Restarts the session window without crediting any time.
    ///
    /// Used when an interval is discarded by an eligibility filter: the
    /// elapsed minutes are dropped, but the start must still move to `now` or
    /// the discarded interval would be counted again at the next close.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID
    /// - `guild_id` - Discord guild ID
    /// - `now` - New session start timestamp
    ///
    /// # Returns
    /// - `Ok(())` - Session start moved (or no record existed)
    /// - `Err(AppError)` - Database error during update
    pub async fn reset_voice_session(
        &self,
        user_id: u64,
        guild_id: u64,
        now: DateTime<Utc>,
    ) -> Result<(), AppError> {
        entity::prelude::MemberActivity::update_many()
            .col_expr(
                entity::member_activity::Column::VoiceSessionStartedAt,
                Expr::value(now),
            )
            .filter(entity::member_activity::Column::UserId.eq(user_id.to_string()))
            .filter(entity::member_activity::Column::GuildId.eq(guild_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Clears a member's open voice session marker.
    ///
    /// Called when the member leaves voice, after the final interval has been
    /// credited. No-op when no session is open.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(())` - Session marker cleared (or none was set)
    /// - `Err(AppError)` - Database error during update
    pub async fn clear_voice_session(&self, user_id: u64, guild_id: u64) -> Result<(), AppError> {
        entity::prelude::MemberActivity::update_many()
            .col_expr(
                entity::member_activity::Column::VoiceSessionStartedAt,
                Expr::value(Option::<DateTime<Utc>>::None),
            )
            .filter(entity::member_activity::Column::UserId.eq(user_id.to_string()))
            .filter(entity::member_activity::Column::GuildId.eq(guild_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Snapshots every member with an open voice session, across all guilds.
    ///
    /// The periodic flush sweep iterates this snapshot and processes each
    /// member independently.
    ///
    /// # Returns
    /// - `Ok(Vec<MemberActivity>)` - All records with a session start set
    /// - `Err(AppError)` - Database error during query
    pub async fn find_open_sessions(&self) -> Result<Vec<MemberActivity>, AppError> {
        let rows = entity::prelude::MemberActivity::find()
            .filter(entity::member_activity::Column::VoiceSessionStartedAt.is_not_null())
            .all(self.db)
            .await?;

        rows.into_iter().map(MemberActivity::from_entity).collect()
    }
}
