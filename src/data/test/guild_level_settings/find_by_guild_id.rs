use super::*;

/// Tests finding a leveling module row that exists.
///
/// Verifies that the repository returns the module with its enabled flag and
/// raw settings document intact.
///
/// Expected: Ok(Some(module))
#[tokio::test]
async fn finds_existing_module() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildLevelSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let _created = factory::guild_level_settings::GuildLevelSettingsFactory::new(db)
        .guild_id("123456789")
        .build()
        .await?;

    let repo = GuildLevelSettingsRepository::new(db);
    let module = repo.find_by_guild_id(123456789).await?;

    let module = module.expect("module should exist");
    assert_eq!(module.guild_id, 123456789);
    assert!(module.enabled);
    assert_eq!(module.settings["MESSAGE_XP"], 5);

    Ok(())
}

/// Tests finding a leveling module row that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_module() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildLevelSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildLevelSettingsRepository::new(db);
    let module = repo.find_by_guild_id(999999999).await?;

    assert!(module.is_none());

    Ok(())
}

/// Tests that a disabled module row is still returned.
///
/// Whether a disabled module short-circuits processing is the resolver's
/// decision, not the repository's.
///
/// Expected: Ok(Some(module)) with enabled = false
#[tokio::test]
async fn returns_disabled_module() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildLevelSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::guild_level_settings::GuildLevelSettingsFactory::new(db)
        .enabled(false)
        .build()
        .await?;

    let repo = GuildLevelSettingsRepository::new(db);
    let module = repo
        .find_by_guild_id(created.guild_id.parse().unwrap())
        .await?;

    let module = module.expect("module should exist");
    assert!(!module.enabled);

    Ok(())
}
