use super::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

/// Tests deleting an owned pet.
///
/// Expected: Ok(true) and the pet gone
#[tokio::test]
async fn deletes_owned_pet() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, pet) = factory::helpers::create_user_with_pet(db).await?;

    let repo = PetRepository::new(db);
    assert!(repo.delete_for_user(pet.id, user.id).await?);
    assert!(repo.get_for_user(pet.id, user.id).await?.is_none());

    Ok(())
}

/// Tests that another user's delete attempt is a no-op.
///
/// Expected: Ok(false) and the pet still present for its owner
#[tokio::test]
async fn returns_false_for_other_users_pet() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, pet) = factory::helpers::create_user_with_pet(db).await?;
    let stranger = factory::user::create_user(db).await?;

    let repo = PetRepository::new(db);
    assert!(!repo.delete_for_user(pet.id, stranger.id).await?);
    assert!(repo.get_for_user(pet.id, owner.id).await?.is_some());

    Ok(())
}

/// Tests the cascade policy: deleting a pet removes its health events and
/// their reminders.
///
/// Expected: no rows left under the deleted pet
#[tokio::test]
async fn cascades_to_health_events_and_reminders() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, pet, event) = factory::helpers::create_ownership_chain(db).await?;
    let reminder = factory::reminder::create_reminder(db, event.id).await?;

    let repo = PetRepository::new(db);
    assert!(repo.delete_for_user(pet.id, user.id).await?);

    let remaining_events = entity::prelude::HealthEvent::find()
        .filter(entity::health_event::Column::PetId.eq(pet.id))
        .all(db)
        .await?;
    assert!(remaining_events.is_empty());

    let remaining_reminder = entity::prelude::Reminder::find_by_id(reminder.id)
        .one(db)
        .await?;
    assert!(remaining_reminder.is_none());

    Ok(())
}
