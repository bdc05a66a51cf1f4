//! Persistence layer for the note/tag store.
//!
//! # Responsibility
//! - Define the key/value backing contract consumed by the store facade.
//! - Serialize whole collections into keyed slots and read them back.
//!
//! # Invariants
//! - Each collection owns exactly one slot key; the two slots are never
//!   written together atomically.
//! - Corrupt slot bytes surface as errors instead of being silently reset.

pub mod kv_repo;
pub mod slot_repo;
