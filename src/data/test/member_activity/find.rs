use super::*;

/// Tests finding an activity record that exists.
///
/// Verifies that the repository converts the stored row into the domain
/// model with parsed IDs.
///
/// Expected: Ok(Some(activity))
#[tokio::test]
async fn finds_existing_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MemberActivity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let _created = factory::member_activity::MemberActivityFactory::new(db, 123, 456)
        .message_count(7)
        .voice_minutes(3.25)
        .build()
        .await?;

    let repo = MemberActivityRepository::new(db);
    let activity = repo.find(123, 456).await?;

    let activity = activity.expect("record should exist");
    assert_eq!(activity.user_id, 123);
    assert_eq!(activity.guild_id, 456);
    assert_eq!(activity.message_count, 7);
    assert_eq!(activity.voice_minutes, 3.25);

    Ok(())
}

/// Tests finding an activity record that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MemberActivity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberActivityRepository::new(db);
    let activity = repo.find(123, 456).await?;

    assert!(activity.is_none());

    Ok(())
}

/// Tests that lookups are scoped to the (user, guild) pair.
///
/// The same user's activity in another guild must not be returned.
///
/// Expected: Ok with per-guild records kept separate
#[tokio::test]
async fn scopes_lookup_to_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MemberActivity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let _guild_a = factory::member_activity::MemberActivityFactory::new(db, 123, 111)
        .message_count(5)
        .build()
        .await?;
    let _guild_b = factory::member_activity::MemberActivityFactory::new(db, 123, 222)
        .message_count(9)
        .build()
        .await?;

    let repo = MemberActivityRepository::new(db);

    let in_a = repo.find(123, 111).await?.unwrap();
    let in_b = repo.find(123, 222).await?.unwrap();

    assert_eq!(in_a.message_count, 5);
    assert_eq!(in_b.message_count, 9);

    Ok(())
}
