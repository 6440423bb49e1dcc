use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check
    /// the documentation or `.env.example` file for required configuration
    /// variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// A guild's leveling module is enabled but its settings document lacks a
    /// required key.
    ///
    /// Absent keys are a hard error, never a silent default: coercing a missing
    /// rate or cooldown into zero would corrupt every downstream calculation.
    #[error("Guild {guild_id} leveling settings are missing required key '{key}'")]
    MissingSetting { guild_id: u64, key: &'static str },

    /// A guild's leveling settings document contains a key with the wrong type
    /// or an out-of-range value.
    #[error("Guild {guild_id} leveling setting '{key}' is invalid: {reason}")]
    InvalidSetting {
        guild_id: u64,
        key: &'static str,
        reason: String,
    },

    /// Two entries in a guild's level-role mapping resolve to the same level.
    ///
    /// Which role would win is undefined, so the whole document is rejected.
    #[error("Guild {guild_id} leveling settings map level {level} to more than one role")]
    DuplicateLevelThreshold { guild_id: u64, level: u32 },
}
