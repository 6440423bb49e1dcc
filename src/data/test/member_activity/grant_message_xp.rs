use super::*;

/// Tests the first grant for a member with no record.
///
/// Verifies that a record is created lazily with a count of one and the
/// grant timestamp set.
///
/// Expected: Ok(true) with a new record
#[tokio::test]
async fn creates_record_on_first_grant() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MemberActivity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberActivityRepository::new(db);
    let granted = repo.grant_message_xp(123, 456, at(0), 60).await?;

    assert!(granted);

    let activity = repo.find(123, 456).await?.unwrap();
    assert_eq!(activity.message_count, 1);
    assert_eq!(activity.last_message_at, Some(at(0)));
    assert_eq!(activity.voice_minutes, 0.0);
    assert!(activity.voice_session_started_at.is_none());

    Ok(())
}

/// Tests granting once the cooldown window has elapsed.
///
/// Expected: Ok(true) with the count incremented and timestamp moved
#[tokio::test]
async fn increments_when_cooldown_elapsed() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MemberActivity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberActivityRepository::new(db);
    repo.grant_message_xp(123, 456, at(0), 60).await?;
    let granted = repo.grant_message_xp(123, 456, at(120), 60).await?;

    assert!(granted);

    let activity = repo.find(123, 456).await?.unwrap();
    assert_eq!(activity.message_count, 2);
    assert_eq!(activity.last_message_at, Some(at(120)));

    Ok(())
}

/// Tests that a grant strictly inside the cooldown window writes nothing.
///
/// Expected: Ok(false) with the record unchanged
#[tokio::test]
async fn blocks_within_cooldown() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MemberActivity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberActivityRepository::new(db);
    repo.grant_message_xp(123, 456, at(0), 60).await?;
    let granted = repo.grant_message_xp(123, 456, at(59), 60).await?;

    assert!(!granted);

    let activity = repo.find(123, 456).await?.unwrap();
    assert_eq!(activity.message_count, 1);
    assert_eq!(activity.last_message_at, Some(at(0)));

    Ok(())
}

/// Tests the closed-open cooldown boundary.
///
/// A second grant exactly `cooldown` seconds after the first is allowed;
/// only a strictly shorter gap blocks.
///
/// Expected: Ok(true) at the boundary
#[tokio::test]
async fn allows_grant_exactly_at_cooldown_boundary() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MemberActivity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberActivityRepository::new(db);
    repo.grant_message_xp(123, 456, at(0), 60).await?;
    let granted = repo.grant_message_xp(123, 456, at(60), 60).await?;

    assert!(granted);

    let activity = repo.find(123, 456).await?.unwrap();
    assert_eq!(activity.message_count, 2);

    Ok(())
}

/// Tests granting to an existing record that has never earned message XP.
///
/// A record created by a voice session has no last-message timestamp; the
/// first message grant must succeed against it.
///
/// Expected: Ok(true) with the existing record incremented
#[tokio::test]
async fn grants_when_last_message_absent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MemberActivity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let _created = factory::member_activity::MemberActivityFactory::new(db, 123, 456)
        .voice_minutes(10.0)
        .build()
        .await?;

    let repo = MemberActivityRepository::new(db);
    let granted = repo.grant_message_xp(123, 456, at(0), 60).await?;

    assert!(granted);

    let activity = repo.find(123, 456).await?.unwrap();
    assert_eq!(activity.message_count, 1);
    assert_eq!(activity.voice_minutes, 10.0);

    Ok(())
}

/// Tests that grants do not leak across guilds.
///
/// Expected: Ok with only the addressed guild's record changed
#[tokio::test]
async fn grants_only_in_the_addressed_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MemberActivity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberActivityRepository::new(db);
    repo.grant_message_xp(123, 111, at(0), 60).await?;
    repo.grant_message_xp(123, 222, at(0), 60).await?;
    repo.grant_message_xp(123, 111, at(120), 60).await?;

    let in_a = repo.find(123, 111).await?.unwrap();
    let in_b = repo.find(123, 222).await?.unwrap();

    assert_eq!(in_a.message_count, 2);
    assert_eq!(in_b.message_count, 1);

    Ok(())
}
