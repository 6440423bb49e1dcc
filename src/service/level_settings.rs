//! Guild leveling configuration resolution.

use sea_orm::DatabaseConnection;

use crate::{
    data::guild_level_settings::GuildLevelSettingsRepository, error::AppError,
    model::level_settings::LevelSettings,
};

/// Resolves per-guild leveling configuration.
pub struct LevelSettingsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LevelSettingsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves the validated leveling settings for a guild.
    ///
    /// `Ok(None)` means the feature is off for this guild (no module row
    /// exists, or the module is disabled), and every downstream operation
    /// must treat the event as a no-op. An enabled module with a missing or
    /// malformed setting is a configuration error, not a default.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(Some(LevelSettings))` - Module enabled, settings valid
    /// - `Ok(None)` - Module absent or disabled
    /// - `Err(AppError::ConfigErr)` - Module enabled but settings invalid
    /// - `Err(AppError)` - Database error during lookup
    pub async fn resolve(&self, guild_id: u64) -> Result<Option<LevelSettings>, AppError> {
        let repo = GuildLevelSettingsRepository::new(self.db);

        let Some(module) = repo.find_by_guild_id(guild_id).await? else {
            return Ok(None);
        };

        if !module.enabled {
            return Ok(None);
        }

        let settings = LevelSettings::from_document(guild_id, &module.settings)?;

        Ok(Some(settings))
    }
}
