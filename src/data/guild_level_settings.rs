//! Guild leveling settings repository.

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::{error::AppError, model::level_settings::GuildLevelModule};

/// Repository for guild leveling module rows.
///
/// The engine only reads this table; rows are written by the administrative
/// configuration surface.
pub struct GuildLevelSettingsRepository<'a> {
    /// Database connection for executing queries.
    db: &'a DatabaseConnection,
}

impl<'a> GuildLevelSettingsRepository<'a> {
    /// Creates a new repository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection for executing queries
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a guild's leveling module row.
    ///
    /// The returned module's settings document is raw JSON; interpreting it is
    /// the service layer's job so a malformed document surfaces as a
    /// configuration error there, not a database error here.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(Some(GuildLevelModule))` - The guild has a leveling module row
    /// - `Ok(None)` - No row for this guild
    /// - `Err(AppError)` - Database error during lookup
    pub async fn find_by_guild_id(&self, guild_id: u64) -> Result<Option<GuildLevelModule>, AppError> {
        let row = entity::prelude::GuildLevelSettings::find()
            .filter(entity::guild_level_settings::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await?;

        row.map(GuildLevelModule::from_entity).transpose()
    }
}
