//! Member activity domain model.

use chrono::{DateTime, Utc};

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// Accumulated activity counters for one member in one guild.
///
/// Rows are created lazily on the first qualifying event and never deleted by
/// the engine. Total XP is not a field here: it is derived from the counters
/// and the guild's rates at evaluation time.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberActivity {
    /// Discord user ID.
    pub user_id: u64,
    /// Discord guild ID.
    pub guild_id: u64,
    /// Messages that earned XP (cooldown-gated, not raw message volume).
    pub message_count: i64,
    /// Eligible voice minutes, fractional.
    pub voice_minutes: f64,
    /// When the member last earned message XP.
    pub last_message_at: Option<DateTime<Utc>>,
    /// Start of the member's open voice session, present iff one is open.
    pub voice_session_started_at: Option<DateTime<Utc>>,
}

impl MemberActivity {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(MemberActivity)` - The converted domain model
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored user or guild ID
    ///   is not a valid u64
    pub fn from_entity(entity: entity::member_activity::Model) -> Result<Self, AppError> {
        let user_id = parse_u64_from_string(entity.user_id)?;
        let guild_id = parse_u64_from_string(entity.guild_id)?;

        Ok(Self {
            user_id,
            guild_id,
            message_count: entity.message_count,
            voice_minutes: entity.voice_minutes,
            last_message_at: entity.last_message_at,
            voice_session_started_at: entity.voice_session_started_at,
        })
    }
}
