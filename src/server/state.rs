//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::server::service::auth::TokenService;

/// Application state containing shared resources and dependencies.
///
/// Initialized once during server startup and cloned (cheaply) for each
/// incoming request via Axum's state extraction. The database handle is
/// constructed in `main` and passed in explicitly; there is no global
/// connection singleton.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Signs and verifies bearer tokens for the stateless auth layer.
    pub tokens: TokenService,
}

impl AppState {
    pub fn new(db: DatabaseConnection, tokens: TokenService) -> Self {
        Self { db, tokens }
    }
}
