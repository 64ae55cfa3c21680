use super::*;

/// Tests deleting an owned reminder.
///
/// Expected: Ok(true), then Ok(None) on re-read
#[tokio::test]
async fn deletes_owned_reminder() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _pet, event) = factory::helpers::create_ownership_chain(db).await?;
    let reminder = factory::reminder::create_reminder(db, event.id).await?;

    let repo = ReminderRepository::new(db);
    assert!(repo.delete_for_user(reminder.id, user.id).await?);
    assert!(repo.get_for_user(reminder.id, user.id).await?.is_none());

    Ok(())
}

/// Tests that a stranger's delete is a no-op.
///
/// Expected: Ok(false), reminder still there for its owner
#[tokio::test]
async fn returns_false_for_other_users_reminder() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _pet, event) = factory::helpers::create_ownership_chain(db).await?;
    let reminder = factory::reminder::create_reminder(db, event.id).await?;
    let stranger = factory::user::create_user(db).await?;

    let repo = ReminderRepository::new(db);
    assert!(!repo.delete_for_user(reminder.id, stranger.id).await?);
    assert!(repo.get_for_user(reminder.id, owner.id).await?.is_some());

    Ok(())
}
