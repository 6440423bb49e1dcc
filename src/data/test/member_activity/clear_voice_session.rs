use super::*;

/// Tests clearing an open session marker.
///
/// Expected: Ok with the session start unset and counters untouched
#[tokio::test]
async fn clears_open_session() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MemberActivity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let _created = factory::member_activity::MemberActivityFactory::new(db, 123, 456)
        .voice_minutes(2.0)
        .voice_session_started_at(Some(at(0)))
        .build()
        .await?;

    let repo = MemberActivityRepository::new(db);
    repo.clear_voice_session(123, 456).await?;

    let activity = repo.find(123, 456).await?.unwrap();
    assert!(activity.voice_session_started_at.is_none());
    assert_eq!(activity.voice_minutes, 2.0);

    Ok(())
}

/// Tests clearing when no session is open.
///
/// Expected: Ok with nothing changed
#[tokio::test]
async fn no_op_when_no_session_open() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MemberActivity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let _created = factory::create_member_activity(db, 123, 456).await?;

    let repo = MemberActivityRepository::new(db);
    repo.clear_voice_session(123, 456).await?;

    let activity = repo.find(123, 456).await?.unwrap();
    assert!(activity.voice_session_started_at.is_none());

    Ok(())
}
