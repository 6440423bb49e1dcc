pub use super::guild_level_settings::Entity as GuildLevelSettings;
pub use super::member_activity::Entity as MemberActivity;
