//! XP accrual rules.
//!
//! Pure decision functions for the accrual engine: the message cooldown gate,
//! the voice interval measurement, the voice eligibility filter, and the
//! total-XP combination. The repository enforces the cooldown predicate again
//! inside its conditional update; these functions are the readable statement
//! of the same rules.

use chrono::{DateTime, Duration, Utc};

use crate::model::{
    level::VoiceContext, level_settings::LevelSettings, member_activity::MemberActivity,
};

/// Whether a message-XP grant is allowed at `now`.
///
/// Closed-open semantics: a message exactly at the cooldown boundary is
/// granted; only a strictly shorter gap blocks.
pub fn cooldown_elapsed(
    last_message_at: Option<DateTime<Utc>>,
    cooldown_secs: i64,
    now: DateTime<Utc>,
) -> bool {
    match last_message_at {
        None => true,
        Some(last) => now - last >= Duration::seconds(cooldown_secs),
    }
}

/// Minutes elapsed in a voice interval, clamped to zero.
///
/// The clamp defends against clock skew: a session start recorded ahead of
/// `now` yields zero minutes, never a negative credit.
pub fn voice_interval_minutes(started_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let seconds = (now - started_at).num_milliseconds() as f64 / 1000.0;
    (seconds / 60.0).max(0.0)
}

/// Whether a voice interval is discarded by the guild's eligibility filters.
pub fn interval_discarded(settings: &LevelSettings, voice: &VoiceContext) -> bool {
    (voice.self_muted && settings.requires_not_muted)
        || (voice.alone_in_channel && settings.requires_not_alone)
}

/// Total XP derived from a member's counters at this guild's rates.
///
/// Never stored; recomputed at every evaluation so a rate change applies
/// retroactively to the whole history.
pub fn total_xp(settings: &LevelSettings, activity: &MemberActivity) -> f64 {
    activity.message_count as f64 * settings.message_xp as f64
        + activity.voice_minutes * settings.voice_xp as f64
}
