//! Guild level settings factory for creating test configuration rows.
//!
//! This module provides factory methods for creating guild leveling module
//! rows with a sensible default settings document, reducing boilerplate in
//! tests. The factory supports customization through a builder pattern.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::{json, Value};

/// Factory for creating test guild leveling settings with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use serde_json::json;
/// use test_utils::factory::guild_level_settings::GuildLevelSettingsFactory;
///
/// let row = GuildLevelSettingsFactory::new(&db)
///     .guild_id("987654321")
///     .enabled(true)
///     .settings(json!({ "MESSAGE_XP": 10, /* ... */ }))
///     .build()
///     .await?;
/// ```
pub struct GuildLevelSettingsFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    enabled: bool,
    settings: Value,
}

/// Default settings document used by the factory.
///
/// Matches the shape the administrative surface writes: SCREAMING_CASE keys,
/// level-role thresholds keyed by stringified level.
pub fn default_settings_document() -> Value {
    json!({
        "MESSAGE_XP": 5,
        "VOICE_XP": 2,
        "BASE_XP": 100,
        "EXPONENT": 1.15,
        "MESSAGE_XP_COOLDOWN": 60,
        "STACK_ROLES": true,
        "REQUIRES_NOT_MUTED": false,
        "REQUIRES_NOT_ALONE": false,
        "LEVEL_ROLES": {},
    })
}

impl<'a> GuildLevelSettingsFactory<'a> {
    /// Creates a new GuildLevelSettingsFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: auto-incremented unique ID
    /// - enabled: `true`
    /// - settings: `default_settings_document()`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `GuildLevelSettingsFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id().to_string(),
            enabled: true,
            settings: default_settings_document(),
        }
    }

    /// Sets the guild ID.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID as string
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    /// Sets whether the leveling module is enabled.
    ///
    /// # Arguments
    /// - `enabled` - Module enabled flag
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Replaces the whole settings document.
    ///
    /// # Arguments
    /// - `settings` - Raw settings JSON
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn settings(mut self, settings: Value) -> Self {
        self.settings = settings;
        self
    }

    /// Sets the `LEVEL_ROLES` map inside the settings document.
    ///
    /// # Arguments
    /// - `level_roles` - Map of level thresholds to role IDs as JSON
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn level_roles(mut self, level_roles: Value) -> Self {
        if let Some(doc) = self.settings.as_object_mut() {
            doc.insert("LEVEL_ROLES".to_string(), level_roles);
        }
        self
    }

    /// Builds and inserts the guild level settings entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guild_level_settings::Model)` - Created entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild_level_settings::Model, DbErr> {
        entity::guild_level_settings::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            enabled: ActiveValue::Set(self.enabled),
            settings: ActiveValue::Set(self.settings),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an enabled guild leveling settings row with default values.
///
/// Shorthand for `GuildLevelSettingsFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::guild_level_settings::Model)` - Created entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_guild_settings(
    db: &DatabaseConnection,
) -> Result<entity::guild_level_settings::Model, DbErr> {
    GuildLevelSettingsFactory::new(db).build().await
}

/// Creates an enabled guild leveling settings row for a specific guild ID.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID as string or number
///
/// # Returns
/// - `Ok(entity::guild_level_settings::Model)` - Created entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_guild_settings_with_id(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
) -> Result<entity::guild_level_settings::Model, DbErr> {
    GuildLevelSettingsFactory::new(db).guild_id(guild_id).build().await
}
