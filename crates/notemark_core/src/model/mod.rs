//! Domain model for the note/tag relational store.
//!
//! # Responsibility
//! - Define the persisted record shapes for notes and tags.
//! - Define the derived hydrated projection joining the two.
//!
//! # Invariants
//! - Every record is identified by a stable UUID, unique within its
//!   collection.
//! - `RawNote::tag_ids` is not referentially enforced; stale ids are legal
//!   and resolved away only when hydrating.

pub mod note;
pub mod tag;
