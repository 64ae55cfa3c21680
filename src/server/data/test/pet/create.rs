use super::*;

fn create_dto(name: &str) -> CreatePetDto {
    CreatePetDto {
        name: name.to_string(),
        species: "chien".to_string(),
        breed: Some("labrador".to_string()),
        sex: None,
        birth_date: None,
        photo_url: None,
        notes: None,
    }
}

/// Tests creating a pet attached to its owner.
///
/// Expected: Ok with the pet row carrying the owner's id
#[tokio::test]
async fn creates_pet_for_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = PetRepository::new(db);
    let pet = repo.create(user.id, create_dto("Rex")).await?;

    assert_eq!(pet.user_id, user.id);
    assert_eq!(pet.name, "Rex");
    assert_eq!(pet.species, "chien");
    assert_eq!(pet.breed, Some("labrador".to_string()));

    Ok(())
}

/// Tests the foreign key constraint on user_id.
///
/// Expected: Err(DbErr) due to foreign key constraint violation
#[tokio::test]
async fn fails_for_nonexistent_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PetRepository::new(db);
    let result = repo.create(999999, create_dto("Ghost")).await;

    assert!(result.is_err());

    Ok(())
}
