//! HTTP request handlers.
//!
//! Every handler follows the same shape: authenticate via `AuthGuard`,
//! validate the request body, check ownership through the repository's
//! filtered queries, perform the single CRUD operation, and shape the
//! response DTO.

pub mod admin;
pub mod agenda;
pub mod auth;
pub mod health_event;
pub mod pet;
pub mod profile;
pub mod reminder;
pub mod service;
