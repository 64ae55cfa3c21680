//! Client library for the native mobile shells.
//!
//! Everything beneath the platform UI lives here:
//!
//! - **API layer** (`api/`) - typed HTTP client per resource with shared
//!   request/response helpers and bearer-token injection
//! - **Models** (`model/`) - view-model cache states, the API error type
//!   with user-facing messages, and the token store
//! - **Local store** (`store/`) - embedded SQLite cache for offline-first
//!   reads, keyed by server-derived string ids
//! - **Sync** (`sync`) - one-directional pull of pets, health events, and
//!   reminders into the local cache
//! - **Reminders** (`reminder`) - keyed one-shot jobs firing at fixed
//!   offsets before an agenda appointment
//!
//! There is no push of local edits, no conflict resolution, and no retry
//! policy; a failed fetch stops the affected branch and the next pull
//! starts over.

pub mod api;
pub mod model;
pub mod reminder;
pub mod store;
pub mod sync;
