use super::*;
use chrono::{Duration, Utc};
use entity::prelude::{AgendaEvent, User};

/// Tests the direct-ownership CRUD cycle on agenda events.
///
/// Expected: create, list ordered by start, update, delete all scoped to
/// the owning user
#[tokio::test]
async fn full_crud_cycle_for_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(AgendaEvent)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = AgendaEventRepository::new(db);

    let later = repo
        .create(
            user.id,
            CreateAgendaEventDto {
                title: "Toilettage".to_string(),
                kind: Some("toilettage".to_string()),
                start_at: Utc::now() + Duration::days(10),
                end_at: None,
                notes: None,
            },
        )
        .await?;
    let sooner = repo
        .create(
            user.id,
            CreateAgendaEventDto {
                title: "Vétérinaire".to_string(),
                kind: None,
                start_at: Utc::now() + Duration::days(2),
                end_at: None,
                notes: Some("Rappel vaccin".to_string()),
            },
        )
        .await?;

    let listed = repo.list_for_user(user.id).await?;
    let ids: Vec<i32> = listed.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![sooner.id, later.id]);

    let updated = repo
        .update_for_user(
            sooner.id,
            user.id,
            UpdateAgendaEventDto {
                title: Some("Vétérinaire - Dr Martin".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();
    assert_eq!(updated.title, "Vétérinaire - Dr Martin");
    assert_eq!(updated.notes, Some("Rappel vaccin".to_string()));

    assert!(repo.delete_for_user(later.id, user.id).await?);
    assert_eq!(repo.list_for_user(user.id).await?.len(), 1);

    Ok(())
}

/// Tests that agenda events never leak across accounts.
///
/// Expected: Ok(None)/Ok(false) for every cross-user access
#[tokio::test]
async fn agenda_event_is_invisible_to_other_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(AgendaEvent)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let stranger = factory::user::create_user(db).await?;
    let event = factory::agenda_event::create_agenda_event(db, owner.id).await?;

    let repo = AgendaEventRepository::new(db);

    assert!(repo.get_for_user(event.id, stranger.id).await?.is_none());
    assert!(repo
        .update_for_user(
            event.id,
            stranger.id,
            UpdateAgendaEventDto {
                title: Some("Hijacked".to_string()),
                ..Default::default()
            },
        )
        .await?
        .is_none());
    assert!(!repo.delete_for_user(event.id, stranger.id).await?);
    assert!(repo.list_for_user(stranger.id).await?.is_empty());

    Ok(())
}
