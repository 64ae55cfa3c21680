pub mod agenda;
pub mod auth;
pub mod health_event;
pub mod helper;
pub mod pet;
pub mod profile;
pub mod reminder;
pub mod service;

pub use helper::ApiClient;
