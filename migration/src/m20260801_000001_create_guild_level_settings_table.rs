use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildLevelSettings::Table)
                    .if_not_exists()
                    .col(pk_auto(GuildLevelSettings::Id))
                    .col(string_uniq(GuildLevelSettings::GuildId))
                    .col(boolean(GuildLevelSettings::Enabled))
                    .col(json(GuildLevelSettings::Settings))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildLevelSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildLevelSettings {
    Table,
    Id,
    GuildId,
    Enabled,
    Settings,
}
