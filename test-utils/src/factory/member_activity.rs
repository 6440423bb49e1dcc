//! Member activity factory for creating test activity records.
//!
//! This module provides factory methods for creating member activity entities
//! with sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test member activity records with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::member_activity::MemberActivityFactory;
///
/// let activity = MemberActivityFactory::new(&db, 123456789, 987654321)
///     .message_count(30)
///     .voice_minutes(12.5)
///     .build()
///     .await?;
/// ```
pub struct MemberActivityFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: u64,
    guild_id: u64,
    message_count: i64,
    voice_minutes: f64,
    last_message_at: Option<DateTime<Utc>>,
    voice_session_started_at: Option<DateTime<Utc>>,
}

impl<'a> MemberActivityFactory<'a> {
    /// Creates a new MemberActivityFactory with default values.
    ///
    /// Defaults:
    /// - message_count: `0`
    /// - voice_minutes: `0.0`
    /// - last_message_at: `None`
    /// - voice_session_started_at: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Discord user ID
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `MemberActivityFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, user_id: u64, guild_id: u64) -> Self {
        Self {
            db,
            user_id,
            guild_id,
            message_count: 0,
            voice_minutes: 0.0,
            last_message_at: None,
            voice_session_started_at: None,
        }
    }

    /// Sets the message count.
    ///
    /// # Arguments
    /// - `message_count` - Number of XP-earning messages
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn message_count(mut self, message_count: i64) -> Self {
        self.message_count = message_count;
        self
    }

    /// Sets the accrued voice minutes.
    ///
    /// # Arguments
    /// - `voice_minutes` - Eligible voice minutes, fractional
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn voice_minutes(mut self, voice_minutes: f64) -> Self {
        self.voice_minutes = voice_minutes;
        self
    }

    /// Sets the last message-XP grant timestamp.
    ///
    /// # Arguments
    /// - `last_message_at` - Optional grant timestamp
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn last_message_at(mut self, last_message_at: Option<DateTime<Utc>>) -> Self {
        self.last_message_at = last_message_at;
        self
    }

    /// Sets the open voice session start timestamp.
    ///
    /// # Arguments
    /// - `voice_session_started_at` - Optional session start
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn voice_session_started_at(
        mut self,
        voice_session_started_at: Option<DateTime<Utc>>,
    ) -> Self {
        self.voice_session_started_at = voice_session_started_at;
        self
    }

    /// Builds and inserts the member activity entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::member_activity::Model)` - Created entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::member_activity::Model, DbErr> {
        entity::member_activity::ActiveModel {
            user_id: ActiveValue::Set(self.user_id.to_string()),
            guild_id: ActiveValue::Set(self.guild_id.to_string()),
            message_count: ActiveValue::Set(self.message_count),
            voice_minutes: ActiveValue::Set(self.voice_minutes),
            last_message_at: ActiveValue::Set(self.last_message_at),
            voice_session_started_at: ActiveValue::Set(self.voice_session_started_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a member activity record with default (zeroed) counters.
///
/// Shorthand for `MemberActivityFactory::new(db, user_id, guild_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Discord user ID
/// - `guild_id` - Discord guild ID
///
/// # Returns
/// - `Ok(entity::member_activity::Model)` - Created entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_member_activity(
    db: &DatabaseConnection,
    user_id: u64,
    guild_id: u64,
) -> Result<entity::member_activity::Model, DbErr> {
    MemberActivityFactory::new(db, user_id, guild_id).build().await
}
