use super::*;

/// Tests restarting the session window without credit.
///
/// Used when an eligibility filter discards an interval: minutes stay put,
/// the start moves forward.
///
/// Expected: Ok with start moved and minutes unchanged
#[tokio::test]
async fn resets_start_without_adding_minutes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MemberActivity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let _created = factory::member_activity::MemberActivityFactory::new(db, 123, 456)
        .voice_minutes(4.0)
        .voice_session_started_at(Some(at(0)))
        .build()
        .await?;

    let repo = MemberActivityRepository::new(db);
    repo.reset_voice_session(123, 456, at(180)).await?;

    let activity = repo.find(123, 456).await?.unwrap();
    assert_eq!(activity.voice_minutes, 4.0);
    assert_eq!(activity.voice_session_started_at, Some(at(180)));

    Ok(())
}
