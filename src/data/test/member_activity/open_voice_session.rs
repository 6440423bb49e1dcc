use super::*;

/// Tests opening a session for a member with no record.
///
/// Verifies that a record is created lazily with only the session start set.
///
/// Expected: Ok with a new record carrying the session start
#[tokio::test]
async fn creates_record_with_session_start() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MemberActivity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberActivityRepository::new(db);
    repo.open_voice_session(123, 456, at(0)).await?;

    let activity = repo.find(123, 456).await?.unwrap();
    assert_eq!(activity.voice_session_started_at, Some(at(0)));
    assert_eq!(activity.message_count, 0);
    assert_eq!(activity.voice_minutes, 0.0);
    assert!(activity.last_message_at.is_none());

    Ok(())
}

/// Tests opening a session for a member with an existing record.
///
/// Expected: Ok with the session start set and counters untouched
#[tokio::test]
async fn sets_start_on_existing_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MemberActivity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let _created = factory::member_activity::MemberActivityFactory::new(db, 123, 456)
        .message_count(12)
        .voice_minutes(5.5)
        .build()
        .await?;

    let repo = MemberActivityRepository::new(db);
    repo.open_voice_session(123, 456, at(0)).await?;

    let activity = repo.find(123, 456).await?.unwrap();
    assert_eq!(activity.voice_session_started_at, Some(at(0)));
    assert_eq!(activity.message_count, 12);
    assert_eq!(activity.voice_minutes, 5.5);

    Ok(())
}

/// Tests that re-opening overwrites an already-open session.
///
/// The gateway is authoritative about joins; a second join event moves the
/// start forward.
///
/// Expected: Ok with the later start stored
#[tokio::test]
async fn overwrites_already_open_session() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MemberActivity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberActivityRepository::new(db);
    repo.open_voice_session(123, 456, at(0)).await?;
    repo.open_voice_session(123, 456, at(300)).await?;

    let activity = repo.find(123, 456).await?.unwrap();
    assert_eq!(activity.voice_session_started_at, Some(at(300)));

    Ok(())
}
