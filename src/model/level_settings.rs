//! Per-guild leveling configuration.
//!
//! Guild settings are stored as a raw JSON document written by the
//! administrative configuration surface. `LevelSettings::from_document` is the
//! single place that document is interpreted: every required key is validated
//! here, and the rest of the engine only ever sees the typed struct.

use serde_json::Value;
use serenity::all::RoleId;

use crate::{error::config::ConfigError, error::AppError, util::parse::parse_u64_from_string};

/// A guild's leveling module row as stored, before settings are interpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildLevelModule {
    pub guild_id: u64,
    pub enabled: bool,
    /// Raw settings document; parsed by `LevelSettings::from_document`.
    pub settings: Value,
}

impl GuildLevelModule {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(GuildLevelModule)` - The converted domain model
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored guild ID is not
    ///   a valid u64
    pub fn from_entity(entity: entity::guild_level_settings::Model) -> Result<Self, AppError> {
        let guild_id = parse_u64_from_string(entity.guild_id)?;

        Ok(Self {
            guild_id,
            enabled: entity.enabled,
            settings: entity.settings,
        })
    }
}

/// One level threshold and the role it awards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelRole {
    pub level: u32,
    pub role_id: RoleId,
}

/// Validated leveling parameters for one guild.
///
/// Read-only to the engine; mutated only through administrative
/// configuration. All numeric fields are required once the module is enabled.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelSettings {
    /// XP granted per counted message.
    pub message_xp: i64,
    /// XP granted per minute of eligible voice presence.
    pub voice_xp: i64,
    /// XP cost of the first level; later levels scale by `exponent`.
    pub base_xp: i64,
    /// Growth exponent of the level cost curve.
    pub exponent: f64,
    /// Minimum seconds between two message-XP grants.
    pub message_xp_cooldown_secs: i64,
    /// Whether members keep every threshold role they have passed, or only
    /// the single highest one.
    pub stack_roles: bool,
    /// Discard voice intervals spent self-muted.
    pub requires_not_muted: bool,
    /// Discard voice intervals spent alone in a channel.
    pub requires_not_alone: bool,
    /// Level thresholds and their awarded roles, sorted by level descending.
    pub level_roles: Vec<LevelRole>,
}

impl LevelSettings {
    /// Parses and validates a guild's raw settings document.
    ///
    /// Every required key must be present and well-typed: a missing key is a
    /// `MissingSetting` error, never a silent default. Rates and the cooldown
    /// must be non-negative, and `base_xp`/`exponent` must be positive so the
    /// curve walk terminates.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the document belongs to, for error context
    /// - `doc` - Raw settings JSON from the store
    ///
    /// # Returns
    /// - `Ok(LevelSettings)` - Validated settings with thresholds sorted
    ///   highest-first
    /// - `Err(ConfigError)` - Missing, malformed, or duplicated setting
    pub fn from_document(guild_id: u64, doc: &Value) -> Result<Self, ConfigError> {
        let message_xp = require_non_negative(guild_id, doc, "MESSAGE_XP")?;
        let voice_xp = require_non_negative(guild_id, doc, "VOICE_XP")?;
        let base_xp = require_i64(guild_id, doc, "BASE_XP")?;
        let exponent = require_f64(guild_id, doc, "EXPONENT")?;
        let message_xp_cooldown_secs = require_non_negative(guild_id, doc, "MESSAGE_XP_COOLDOWN")?;
        let stack_roles = require_bool(guild_id, doc, "STACK_ROLES")?;
        let requires_not_muted = require_bool(guild_id, doc, "REQUIRES_NOT_MUTED")?;
        let requires_not_alone = require_bool(guild_id, doc, "REQUIRES_NOT_ALONE")?;
        let level_roles = parse_level_roles(guild_id, doc)?;

        if base_xp <= 0 {
            return Err(ConfigError::InvalidSetting {
                guild_id,
                key: "BASE_XP",
                reason: "must be positive".to_string(),
            });
        }
        if exponent <= 0.0 {
            return Err(ConfigError::InvalidSetting {
                guild_id,
                key: "EXPONENT",
                reason: "must be positive".to_string(),
            });
        }

        Ok(Self {
            message_xp,
            voice_xp,
            base_xp,
            exponent,
            message_xp_cooldown_secs,
            stack_roles,
            requires_not_muted,
            requires_not_alone,
            level_roles,
        })
    }
}

fn require<'a>(guild_id: u64, doc: &'a Value, key: &'static str) -> Result<&'a Value, ConfigError> {
    doc.get(key)
        .ok_or(ConfigError::MissingSetting { guild_id, key })
}

fn require_i64(guild_id: u64, doc: &Value, key: &'static str) -> Result<i64, ConfigError> {
    require(guild_id, doc, key)?
        .as_i64()
        .ok_or_else(|| ConfigError::InvalidSetting {
            guild_id,
            key,
            reason: "expected an integer".to_string(),
        })
}

fn require_non_negative(guild_id: u64, doc: &Value, key: &'static str) -> Result<i64, ConfigError> {
    let value = require_i64(guild_id, doc, key)?;
    if value < 0 {
        return Err(ConfigError::InvalidSetting {
            guild_id,
            key,
            reason: "must not be negative".to_string(),
        });
    }
    Ok(value)
}

fn require_f64(guild_id: u64, doc: &Value, key: &'static str) -> Result<f64, ConfigError> {
    require(guild_id, doc, key)?
        .as_f64()
        .ok_or_else(|| ConfigError::InvalidSetting {
            guild_id,
            key,
            reason: "expected a number".to_string(),
        })
}

fn require_bool(guild_id: u64, doc: &Value, key: &'static str) -> Result<bool, ConfigError> {
    require(guild_id, doc, key)?
        .as_bool()
        .ok_or_else(|| ConfigError::InvalidSetting {
            guild_id,
            key,
            reason: "expected a boolean".to_string(),
        })
}

/// Parses the `LEVEL_ROLES` map of level thresholds to role IDs.
///
/// The document stores the map as `{"10": "123456789", ...}` with string
/// keys; role IDs may be strings or numbers. Entries are returned sorted by
/// level descending. Two keys that parse to the same level (such as `"10"`
/// and `"010"`) are rejected as a duplicate threshold.
fn parse_level_roles(guild_id: u64, doc: &Value) -> Result<Vec<LevelRole>, ConfigError> {
    const KEY: &str = "LEVEL_ROLES";

    let map = require(guild_id, doc, KEY)?
        .as_object()
        .ok_or_else(|| ConfigError::InvalidSetting {
            guild_id,
            key: KEY,
            reason: "expected an object mapping levels to role IDs".to_string(),
        })?;

    let mut level_roles = Vec::with_capacity(map.len());
    for (level_key, role_value) in map {
        let level = level_key.trim().parse::<u32>().map_err(|_| {
            ConfigError::InvalidSetting {
                guild_id,
                key: KEY,
                reason: format!("level key '{}' is not a non-negative integer", level_key),
            }
        })?;

        let role_id = match role_value {
            Value::String(s) => s.parse::<u64>().ok(),
            Value::Number(n) => n.as_u64(),
            _ => None,
        }
        .filter(|id| *id != 0)
        .ok_or_else(|| ConfigError::InvalidSetting {
            guild_id,
            key: KEY,
            reason: format!("role ID for level {} is not a valid snowflake", level),
        })?;

        level_roles.push(LevelRole {
            level,
            role_id: RoleId::new(role_id),
        });
    }

    level_roles.sort_by(|a, b| b.level.cmp(&a.level));

    for pair in level_roles.windows(2) {
        if pair[0].level == pair[1].level {
            return Err(ConfigError::DuplicateLevelThreshold {
                guild_id,
                level: pair[0].level,
            });
        }
    }

    Ok(level_roles)
}
