use super::*;
use entity::prelude::User;
use entity::user::UserRole;

fn params(email: &str) -> CreateUserParams {
    CreateUserParams {
        name: "Salma".to_string(),
        email: email.to_string(),
        password_hash: test_utils::factory::user::FAKE_PASSWORD_HASH.to_string(),
        role: UserRole::User,
        phone: None,
        timezone: Some("Africa/Casablanca".to_string()),
        language: Some("fr".to_string()),
    }
}

/// Tests inserting an account and finding it by email.
///
/// Expected: Ok with the row retrievable by its unique email
#[tokio::test]
async fn creates_and_finds_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let created = repo.create(params("salma@petcare.test")).await?;

    let found = repo.find_by_email("salma@petcare.test").await?;
    assert_eq!(found.map(|u| u.id), Some(created.id));

    assert!(repo.find_by_email("nobody@petcare.test").await?.is_none());

    Ok(())
}

/// Tests the unique index backing the duplicate-email conflict.
///
/// Expected: second insert with the same email is Err(DbErr)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(params("dup@petcare.test")).await?;
    let result = repo.create(params("dup@petcare.test")).await;

    assert!(result.is_err());

    Ok(())
}

/// Tests admin_exists across role values.
///
/// Expected: false with only USER rows, true once an ADMIN exists
#[tokio::test]
async fn admin_exists_reflects_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    factory::user::create_user(db).await?;
    assert!(!repo.admin_exists().await?);

    factory::user::create_admin(db).await?;
    assert!(repo.admin_exists().await?);

    Ok(())
}
