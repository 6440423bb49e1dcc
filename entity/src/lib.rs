pub mod guild_level_settings;
pub mod member_activity;
pub mod prelude;
