//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// Ensures each factory-created entity gets a unique identifier to prevent
/// collisions (unique emails in particular).
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user with one pet.
///
/// # Returns
/// - `Ok((user, pet))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_pet(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::pet::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let pet = crate::factory::pet::create_pet(db, user.id).await?;

    Ok((user, pet))
}

/// Creates the full ownership chain: user, pet, and one health event.
///
/// # Returns
/// - `Ok((user, pet, event))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_ownership_chain(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::pet::Model,
        entity::health_event::Model,
    ),
    DbErr,
> {
    let (user, pet) = create_user_with_pet(db).await?;
    let event = crate::factory::health_event::create_health_event(db, pet.id).await?;

    Ok((user, pet, event))
}
