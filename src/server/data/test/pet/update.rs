use super::*;
use chrono::{TimeZone, Utc};

/// Tests that only provided fields change.
///
/// Expected: Ok(Some) with the new name and the original species
#[tokio::test]
async fn updates_provided_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, pet) = factory::helpers::create_user_with_pet(db).await?;

    let repo = PetRepository::new(db);
    let updated = repo
        .update_for_user(
            pet.id,
            user.id,
            UpdatePetDto {
                name: Some("Médor".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Médor");
    assert_eq!(updated.species, pet.species);

    Ok(())
}

/// Tests the explicit-null semantics of birthDate.
///
/// An absent field leaves the stored date alone; an explicit null clears it.
///
/// Expected: Ok(Some) with birth_date None after the clearing update
#[tokio::test]
async fn clears_birth_date_with_explicit_null() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, pet) = factory::helpers::create_user_with_pet(db).await?;
    let repo = PetRepository::new(db);

    let birth_date = Utc.with_ymd_and_hms(2021, 3, 1, 0, 0, 0).unwrap();
    let with_date = repo
        .update_for_user(
            pet.id,
            user.id,
            UpdatePetDto {
                birth_date: Some(Some(birth_date)),
                ..Default::default()
            },
        )
        .await?
        .unwrap();
    assert_eq!(with_date.birth_date, Some(birth_date));

    // Absent birth_date: untouched.
    let untouched = repo
        .update_for_user(
            pet.id,
            user.id,
            UpdatePetDto {
                name: Some("Rex".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();
    assert_eq!(untouched.birth_date, Some(birth_date));

    // Explicit null: cleared.
    let cleared = repo
        .update_for_user(
            pet.id,
            user.id,
            UpdatePetDto {
                birth_date: Some(None),
                ..Default::default()
            },
        )
        .await?
        .unwrap();
    assert_eq!(cleared.birth_date, None);

    Ok(())
}

/// Tests that updating another user's pet touches nothing.
///
/// Expected: Ok(None), and the row unchanged for its owner
#[tokio::test]
async fn returns_none_for_other_users_pet() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, pet) = factory::helpers::create_user_with_pet(db).await?;
    let stranger = factory::user::create_user(db).await?;

    let repo = PetRepository::new(db);
    let result = repo
        .update_for_user(
            pet.id,
            stranger.id,
            UpdatePetDto {
                name: Some("Stolen".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    let unchanged = repo.get_for_user(pet.id, owner.id).await?.unwrap();
    assert_eq!(unchanged.name, pet.name);

    Ok(())
}
