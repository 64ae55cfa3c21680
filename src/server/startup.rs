use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config, data::user::UserRepository, error::AppError, model::user::CreateUserParams,
    service::auth::hash_password,
};

const DEFAULT_ADMIN_EMAIL: &str = "admin@petcare.local";
const DEFAULT_ADMIN_PASSWORD: &str = "Admin@1234";

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to
/// ensure the database schema is up-to-date. This function must complete
/// successfully before the application can access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Seeds the default admin account when no admin exists yet.
///
/// A fresh deployment has no way to reach the admin endpoints otherwise.
/// Email and password can be overridden with `ADMIN_EMAIL`/`ADMIN_PASSWORD`;
/// the defaults match the development seed the product has always shipped.
pub async fn ensure_admin_account(db: &DatabaseConnection) -> Result<(), AppError> {
    let user_repo = UserRepository::new(db);

    if user_repo.admin_exists().await? {
        return Ok(());
    }

    let email =
        std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| DEFAULT_ADMIN_EMAIL.to_string());
    let password =
        std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.to_string());

    user_repo
        .create(CreateUserParams {
            name: "Admin".to_string(),
            email: email.clone(),
            password_hash: hash_password(&password)?,
            role: entity::user::UserRole::Admin,
            phone: None,
            timezone: std::env::var("TZ").ok(),
            language: Some("fr".to_string()),
        })
        .await?;

    tracing::info!("Created default admin account: {}", email);

    Ok(())
}
