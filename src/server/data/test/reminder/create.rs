use super::*;
use chrono::{Duration, Utc};

/// Tests creating a reminder.
///
/// Expected: Ok with sent initially false
#[tokio::test]
async fn creates_unsent_reminder() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _pet, event) = factory::helpers::create_ownership_chain(db).await?;

    let remind_at = Utc::now() + Duration::days(6);
    let repo = ReminderRepository::new(db);
    let reminder = repo.create(event.id, remind_at).await?;

    assert_eq!(reminder.health_event_id, event.id);
    assert_eq!(reminder.remind_at, remind_at);
    assert!(!reminder.sent);

    Ok(())
}

/// Tests the trigger-time ordering of the listing.
///
/// Expected: reminders returned soonest first
#[tokio::test]
async fn lists_reminders_by_trigger_time() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _pet, event) = factory::helpers::create_ownership_chain(db).await?;

    let repo = ReminderRepository::new(db);
    let later = repo.create(event.id, Utc::now() + Duration::days(7)).await?;
    let sooner = repo.create(event.id, Utc::now() + Duration::days(1)).await?;

    let reminders = repo.list_for_event(event.id).await?;
    let ids: Vec<i32> = reminders.iter().map(|r| r.id).collect();

    assert_eq!(ids, vec![sooner.id, later.id]);

    Ok(())
}
