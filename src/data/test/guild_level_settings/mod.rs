use crate::data::guild_level_settings::GuildLevelSettingsRepository;
use crate::error::AppError;
use test_utils::{builder::TestBuilder, factory};

mod find_by_guild_id;
