//! Account registration, login, and bearer-token issuance.
//!
//! Passwords are hashed with Argon2id and stored as PHC-format strings.
//! Tokens are HS256-signed JWTs carrying `{sub, role, email, name}` and a
//! seven-day expiry; verification is fully stateless.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use sea_orm::DatabaseConnection;

use crate::{
    model::auth::{AdminCreateUserDto, AuthUserDto, LoginDto, LoginResponseDto, RegisterDto},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        middleware::auth::Claims,
        model::user::CreateUserParams,
    },
};

const TOKEN_TTL_DAYS: i64 = 7;

/// Hashes a password with Argon2id and a fresh random salt.
///
/// # Returns
/// - `Ok(String)` - PHC-format hash for storage
/// - `Err(AppError::InternalError)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))?;

    Ok(hash.to_string())
}

/// Verifies a password against a stored PHC-format hash.
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match
/// - `Err(AppError::InternalError)` - Stored hash is malformed
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| AppError::InternalError(format!("Invalid stored password hash: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Signs and verifies the stateless bearer tokens.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issues a signed token carrying the user's identity claims.
    pub fn issue(&self, user: &entity::user::Model) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id,
            role: user.role.into(),
            email: user.email.clone(),
            name: user.name.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AppError::InternalError(format!("Failed to sign token: {}", e)))
    }

    /// Verifies signature and expiry, returning the embedded claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken)
    }
}

/// Service providing registration and login.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Registers a new account with the USER role.
    ///
    /// # Returns
    /// - `Ok(AuthUserDto)` - The created account, password hash excluded
    /// - `Err(AppError::Conflict)` - Email already registered
    pub async fn register(&self, dto: RegisterDto) -> Result<AuthUserDto, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&dto.email).await?.is_some() {
            return Err(AppError::Conflict("Email already used".to_string()));
        }

        let user = user_repo
            .create(CreateUserParams {
                name: dto.name,
                email: dto.email,
                password_hash: hash_password(&dto.password)?,
                role: entity::user::UserRole::User,
                phone: dto.phone,
                timezone: dto.timezone,
                language: dto.language,
            })
            .await?;

        Ok(user.into())
    }

    /// Creates an account on behalf of an admin, with an optional role.
    pub async fn create_user(&self, dto: AdminCreateUserDto) -> Result<AuthUserDto, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&dto.email).await?.is_some() {
            return Err(AppError::Conflict("Email already used".to_string()));
        }

        let user = user_repo
            .create(CreateUserParams {
                name: dto.name,
                email: dto.email,
                password_hash: hash_password(&dto.password)?,
                role: dto.role.map(Into::into).unwrap_or(entity::user::UserRole::User),
                phone: dto.phone,
                timezone: dto.timezone,
                language: dto.language,
            })
            .await?;

        Ok(user.into())
    }

    /// Authenticates credentials and issues a bearer token.
    ///
    /// Unknown email and wrong password are indistinguishable to the caller.
    ///
    /// # Returns
    /// - `Ok(LoginResponseDto)` - Token plus the public account projection
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or bad password
    pub async fn login(&self, dto: LoginDto) -> Result<LoginResponseDto, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(&dto.email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&dto.password, &user.password)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.tokens.issue(&user)?;

        Ok(LoginResponseDto {
            token,
            user: user.into(),
        })
    }
}
