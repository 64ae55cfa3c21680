use super::*;

/// Tests deleting an event and its reminder cascade.
///
/// Expected: Ok(true), reminders gone with the event
#[tokio::test]
async fn deletes_event_and_cascades_reminders() -> Result<(), DbErr> {
    use sea_orm::EntityTrait;

    let test = TestBuilder::new().with_pet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _pet, event) = factory::helpers::create_ownership_chain(db).await?;
    let reminder = factory::reminder::create_reminder(db, event.id).await?;

    let repo = HealthEventRepository::new(db);
    assert!(repo.delete_for_user(event.id, user.id).await?);

    assert!(entity::prelude::Reminder::find_by_id(reminder.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests that a stranger cannot delete the event.
///
/// Expected: Ok(false), event still present
#[tokio::test]
async fn returns_false_for_other_users_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _pet, event) = factory::helpers::create_ownership_chain(db).await?;
    let stranger = factory::user::create_user(db).await?;

    let repo = HealthEventRepository::new(db);
    assert!(!repo.delete_for_user(event.id, stranger.id).await?);
    assert!(repo.get_for_user(event.id, owner.id).await?.is_some());

    Ok(())
}
