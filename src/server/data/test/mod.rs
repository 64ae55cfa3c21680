mod agenda_event;
mod health_event;
mod pet;
mod reminder;
mod service;
mod user;
