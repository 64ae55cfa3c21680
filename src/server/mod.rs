//! Server-side REST API backend.
//!
//! This module contains the complete backend implementation for the application,
//! including API endpoints, business logic, data access, and infrastructure services.
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic for auth and profile management
//! - **Data Layer** (`data/`) - Database operations via per-resource repositories
//! - **Model Layer** (`model/`) - Entity/DTO conversions and parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer-token authentication guard and validated JSON extraction
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database handle, token service)
//! - **Startup** (`startup`) - Database connection, migrations, admin seeding
//! - **Router** (`router`) - Axum route configuration, middleware stack, and API documentation
//!
//! # Request Flow
//!
//! A typical request flows through these layers:
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** verifies the bearer token and attaches identity claims
//! 3. **Controller** validates the body, derives ownership from the claims, calls the repository
//! 4. **Data** performs the single CRUD operation with the ownership filter in the statement
//! 5. **Controller** converts the entity to a DTO and shapes the HTTP response
//!
//! Cross-request consistency is delegated entirely to the relational engine;
//! there are no background tasks and no shared mutable state beyond the
//! connection pool.
//!
//! # Feature Gates
//!
//! This module is only available with the `server` feature flag enabled.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
