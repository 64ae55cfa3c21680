use super::*;

/// Tests that an owner can read their own pet.
///
/// Expected: Ok(Some) with the pet
#[tokio::test]
async fn returns_owned_pet() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, pet) = factory::helpers::create_user_with_pet(db).await?;

    let repo = PetRepository::new(db);
    let found = repo.get_for_user(pet.id, user.id).await?;

    assert_eq!(found.map(|p| p.id), Some(pet.id));

    Ok(())
}

/// Tests that another user's pet is invisible.
///
/// The ownership filter makes "not found" and "not owned"
/// indistinguishable, which is what the API reports as 404.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_other_users_pet() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, pet) = factory::helpers::create_user_with_pet(db).await?;
    let stranger = factory::user::create_user(db).await?;

    let repo = PetRepository::new(db);
    let found = repo.get_for_user(pet.id, stranger.id).await?;

    assert!(found.is_none());

    Ok(())
}
