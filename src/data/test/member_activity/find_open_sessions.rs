use super::*;

/// Tests snapshotting open sessions across guilds.
///
/// Verifies that only records with a session start set are returned,
/// regardless of which guild they belong to.
///
/// Expected: Ok with exactly the open sessions
#[tokio::test]
async fn returns_only_open_sessions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MemberActivity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let _open_a = factory::member_activity::MemberActivityFactory::new(db, 111, 1)
        .voice_session_started_at(Some(at(0)))
        .build()
        .await?;
    let _open_b = factory::member_activity::MemberActivityFactory::new(db, 222, 2)
        .voice_session_started_at(Some(at(60)))
        .build()
        .await?;
    let _closed = factory::create_member_activity(db, 333, 1).await?;

    let repo = MemberActivityRepository::new(db);
    let open = repo.find_open_sessions().await?;

    assert_eq!(open.len(), 2);
    assert!(open.iter().any(|a| a.user_id == 111 && a.guild_id == 1));
    assert!(open.iter().any(|a| a.user_id == 222 && a.guild_id == 2));

    Ok(())
}

/// Tests the snapshot when no sessions are open.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn empty_when_none_open() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MemberActivity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let _closed = factory::create_member_activity(db, 111, 1).await?;

    let repo = MemberActivityRepository::new(db);
    let open = repo.find_open_sessions().await?;

    assert!(open.is_empty());

    Ok(())
}
