use super::*;
use chrono::{Duration, Utc};
use entity::health_event::HealthEventType;

/// Tests creating a health event for a pet.
///
/// Expected: Ok with the typed event attached to the pet
#[tokio::test]
async fn creates_event_for_pet() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, pet) = factory::helpers::create_user_with_pet(db).await?;

    let event_date = Utc::now() + Duration::days(14);
    let repo = HealthEventRepository::new(db);
    let event = repo
        .create(
            pet.id,
            HealthEventType::Vaccin,
            "Rappel vaccin".to_string(),
            Some("Rage".to_string()),
            event_date,
        )
        .await?;

    assert_eq!(event.pet_id, pet.id);
    assert_eq!(event.event_type, HealthEventType::Vaccin);
    assert_eq!(event.title, "Rappel vaccin");
    assert_eq!(event.event_date, event_date);

    Ok(())
}

/// Tests the foreign key constraint on pet_id.
///
/// Expected: Err(DbErr) due to foreign key constraint violation
#[tokio::test]
async fn fails_for_nonexistent_pet() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HealthEventRepository::new(db);
    let result = repo
        .create(
            999999,
            HealthEventType::Autre,
            "Orphan".to_string(),
            None,
            Utc::now(),
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
