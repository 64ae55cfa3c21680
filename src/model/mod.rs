//! Wire-level DTOs shared between the API server and the client library.
//!
//! Field names serialize in camelCase to match the public API surface, and
//! timestamps serialize as RFC 3339 strings.

pub mod agenda;
pub mod api;
pub mod auth;
pub mod health_event;
pub mod pet;
pub mod profile;
pub mod reminder;
pub mod service;
