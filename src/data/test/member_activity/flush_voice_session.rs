use super::*;

/// Tests crediting a closed interval.
///
/// Verifies that minutes are added and the session start moves to the flush
/// instant, so the next interval starts where this one ended.
///
/// Expected: Ok with minutes added and start reset
#[tokio::test]
async fn adds_minutes_and_resets_start() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MemberActivity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let _created = factory::member_activity::MemberActivityFactory::new(db, 123, 456)
        .voice_session_started_at(Some(at(0)))
        .build()
        .await?;

    let repo = MemberActivityRepository::new(db);
    repo.flush_voice_session(123, 456, 3.0, at(180)).await?;

    let activity = repo.find(123, 456).await?.unwrap();
    assert_eq!(activity.voice_minutes, 3.0);
    assert_eq!(activity.voice_session_started_at, Some(at(180)));

    Ok(())
}

/// Tests that repeated flushes accumulate.
///
/// Expected: Ok with minutes summed across flushes
#[tokio::test]
async fn accumulates_across_flushes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MemberActivity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let _created = factory::member_activity::MemberActivityFactory::new(db, 123, 456)
        .voice_session_started_at(Some(at(0)))
        .build()
        .await?;

    let repo = MemberActivityRepository::new(db);
    repo.flush_voice_session(123, 456, 1.0, at(60)).await?;
    repo.flush_voice_session(123, 456, 1.5, at(150)).await?;

    let activity = repo.find(123, 456).await?.unwrap();
    assert!((activity.voice_minutes - 2.5).abs() < 1e-9);
    assert_eq!(activity.voice_session_started_at, Some(at(150)));

    Ok(())
}

/// Tests flushing a member with no record.
///
/// There is nothing to credit, and no record should spring into existence.
///
/// Expected: Ok with no record created
#[tokio::test]
async fn no_op_without_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MemberActivity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberActivityRepository::new(db);
    repo.flush_voice_session(123, 456, 3.0, at(180)).await?;

    assert!(repo.find(123, 456).await?.is_none());

    Ok(())
}
