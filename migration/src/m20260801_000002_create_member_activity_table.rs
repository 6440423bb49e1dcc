use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MemberActivity::Table)
                    .if_not_exists()
                    .col(pk_auto(MemberActivity::Id))
                    .col(string(MemberActivity::UserId))
                    .col(string(MemberActivity::GuildId))
                    .col(big_integer(MemberActivity::MessageCount))
                    .col(double(MemberActivity::VoiceMinutes))
                    .col(timestamp_with_time_zone_null(MemberActivity::LastMessageAt))
                    .col(timestamp_with_time_zone_null(
                        MemberActivity::VoiceSessionStartedAt,
                    ))
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_member_activity_user_guild_unique")
                            .col(MemberActivity::UserId)
                            .col(MemberActivity::GuildId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MemberActivity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MemberActivity {
    Table,
    Id,
    UserId,
    GuildId,
    MessageCount,
    VoiceMinutes,
    LastMessageAt,
    VoiceSessionStartedAt,
}
