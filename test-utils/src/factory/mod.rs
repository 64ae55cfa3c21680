//! Entity factories for tests.
//!
//! Each factory inserts a row with unique defaults and lets tests override
//! only the fields they care about.

pub mod agenda_event;
pub mod health_event;
pub mod helpers;
pub mod pet;
pub mod reminder;
pub mod service;
pub mod user;
