use super::*;

/// Tests the transitive ownership filter (event → pet → user).
///
/// Expected: the owner sees the event, a stranger gets Ok(None)
#[tokio::test]
async fn event_is_invisible_to_other_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _pet, event) = factory::helpers::create_ownership_chain(db).await?;
    let stranger = factory::user::create_user(db).await?;

    let repo = HealthEventRepository::new(db);

    assert!(repo.get_for_user(event.id, owner.id).await?.is_some());
    assert!(repo.get_for_user(event.id, stranger.id).await?.is_none());

    Ok(())
}

/// Tests the cross-pet listing used by the legacy /health route.
///
/// Expected: events of every owned pet, and only those
#[tokio::test]
async fn list_for_user_spans_all_owned_pets() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let pet_a = factory::pet::create_pet(db, user.id).await?;
    let pet_b = factory::pet::create_pet(db, user.id).await?;
    let event_a = factory::health_event::create_health_event(db, pet_a.id).await?;
    let event_b = factory::health_event::create_health_event(db, pet_b.id).await?;

    // Noise from another account.
    let (_other, _other_pet, other_event) = factory::helpers::create_ownership_chain(db).await?;

    let repo = HealthEventRepository::new(db);
    let events = repo.list_for_user(user.id).await?;

    let ids: Vec<i32> = events.iter().map(|e| e.id).collect();
    assert!(ids.contains(&event_a.id));
    assert!(ids.contains(&event_b.id));
    assert!(!ids.contains(&other_event.id));

    Ok(())
}

/// Tests that the per-pet listing carries each event's reminders.
///
/// Expected: the event paired with its two reminders
#[tokio::test]
async fn per_pet_listing_includes_reminders() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, pet, event) = factory::helpers::create_ownership_chain(db).await?;
    factory::reminder::create_reminder(db, event.id).await?;
    factory::reminder::create_reminder(db, event.id).await?;

    let repo = HealthEventRepository::new(db);
    let events = repo.list_for_pet_with_reminders(pet.id).await?;

    assert_eq!(events.len(), 1);
    let (listed, reminders) = &events[0];
    assert_eq!(listed.id, event.id);
    assert_eq!(reminders.len(), 2);

    Ok(())
}
