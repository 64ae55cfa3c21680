use super::*;
use entity::health_event::HealthEventType;

/// Tests a partial update through the ownership chain.
///
/// Expected: Ok(Some) with the changed type, title untouched
#[tokio::test]
async fn updates_type_through_ownership_chain() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _pet, event) = factory::helpers::create_ownership_chain(db).await?;

    let repo = HealthEventRepository::new(db);
    let updated = repo
        .update_for_user(
            event.id,
            user.id,
            UpdateHealthEventDto {
                kind: Some(crate::model::health_event::HealthEventKind::Consultation),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.event_type, HealthEventType::Consultation);
    assert_eq!(updated.title, event.title);

    Ok(())
}

/// Tests that a stranger's update is a no-op.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_other_users_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _pet, event) = factory::helpers::create_ownership_chain(db).await?;
    let stranger = factory::user::create_user(db).await?;

    let repo = HealthEventRepository::new(db);
    let result = repo
        .update_for_user(
            event.id,
            stranger.id,
            UpdateHealthEventDto {
                title: Some("Hijacked".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
