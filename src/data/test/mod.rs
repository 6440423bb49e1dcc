mod guild_level_settings;
mod member_activity;
