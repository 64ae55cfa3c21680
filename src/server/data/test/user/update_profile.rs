use super::*;
use entity::prelude::User;

/// Tests the partial profile update.
///
/// Expected: provided fields written, everything else untouched
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = UserRepository::new(db);

    let updated = repo
        .update_profile(
            user.id,
            UpdateProfileParams {
                phone: Some("+212 6 11 22 33 44".to_string()),
                language: Some("fr".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.phone, Some("+212 6 11 22 33 44".to_string()));
    assert_eq!(updated.language, Some("fr".to_string()));
    assert_eq!(updated.name, user.name);
    assert_eq!(updated.email, user.email);

    Ok(())
}

/// Tests a password hash swap.
///
/// Expected: the stored hash is replaced
#[tokio::test]
async fn replaces_password_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = UserRepository::new(db);

    let updated = repo
        .update_profile(
            user.id,
            UpdateProfileParams {
                password_hash: Some("$argon2id$new-hash".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.password, "$argon2id$new-hash");
    assert_ne!(updated.password, user.password);

    Ok(())
}

/// Tests email_taken_by_other around the caller's own address.
///
/// Expected: false for the caller's current email, true for a peer's
#[tokio::test]
async fn email_taken_ignores_own_address() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let peer = factory::user::create_user(db).await?;
    let repo = UserRepository::new(db);

    assert!(!repo.email_taken_by_other(&user.email, user.id).await?);
    assert!(repo.email_taken_by_other(&peer.email, user.id).await?);

    Ok(())
}

/// Tests the unknown-user path.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .update_profile(
            999999,
            UpdateProfileParams {
                name: Some("Ghost".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
