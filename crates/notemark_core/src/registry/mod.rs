//! In-memory collection owners for tags and notes.
//!
//! # Responsibility
//! - Own the authoritative in-memory copies of the two collections.
//! - Provide the mutation operations the store facade orchestrates.
//!
//! # Invariants
//! - Mutations against absent ids are silent no-ops, never errors.
//! - Registries perform no I/O; persistence is triggered by the store
//!   facade after each mutation.

pub mod note_registry;
pub mod tag_registry;
