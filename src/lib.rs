//! PetCare: pet-care management backend and mobile client library.
//!
//! The crate ships two halves behind feature flags:
//!
//! - `server` - the REST API backend (accounts, pets, health events,
//!   reminders, agenda, service directory) plus the `petcare` binary.
//! - `client` (default) - the library the native mobile shells build on:
//!   a typed HTTP client, view-model cache states, an offline local cache,
//!   a one-way pull synchronizer, and the agenda reminder scheduler.
//!
//! The wire DTOs in [`model`] are shared by both halves.

#[cfg(feature = "client")]
pub mod client;
pub mod model;
#[cfg(feature = "server")]
pub mod server;
