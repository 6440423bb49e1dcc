use crate::data::member_activity::MemberActivityRepository;
use crate::error::AppError;
use chrono::{DateTime, TimeZone, Utc};
use test_utils::{builder::TestBuilder, factory};

mod clear_voice_session;
mod find;
mod find_open_sessions;
mod flush_voice_session;
mod grant_message_xp;
mod open_voice_session;
mod reset_voice_session;

/// Fixed reference instant for deterministic timestamps.
fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
}
