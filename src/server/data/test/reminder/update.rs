use super::*;

/// Tests flipping the sent flag through the three-level ownership chain.
///
/// Expected: Ok(Some) with sent true
#[tokio::test]
async fn marks_reminder_sent_for_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _pet, event) = factory::helpers::create_ownership_chain(db).await?;
    let reminder = factory::reminder::create_reminder(db, event.id).await?;

    let repo = ReminderRepository::new(db);
    let updated = repo
        .update_for_user(
            reminder.id,
            user.id,
            UpdateReminderDto {
                sent: Some(true),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert!(updated.sent);

    Ok(())
}

/// Tests that the chain blocks another user (reminder → event → pet → user).
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_other_users_reminder() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _pet, event) = factory::helpers::create_ownership_chain(db).await?;
    let reminder = factory::reminder::create_reminder(db, event.id).await?;
    let stranger = factory::user::create_user(db).await?;

    let repo = ReminderRepository::new(db);
    let result = repo
        .update_for_user(
            reminder.id,
            stranger.id,
            UpdateReminderDto {
                sent: Some(true),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
