use sea_orm::entity::prelude::*;

/// Accumulated activity counters for one member in one guild.
///
/// One row per (user_id, guild_id) pair, created lazily on the first
/// qualifying event. `voice_session_started_at` is set while the member has
/// an open voice session and cleared when the session closes.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "member_activity")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: String,
    pub guild_id: String,
    pub message_count: i64,
    pub voice_minutes: f64,
    pub last_message_at: Option<DateTimeUtc>,
    pub voice_session_started_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
