//! Note collection owner.
//!
//! # Responsibility
//! - Own the raw note collection and its id-generating create path.
//!
//! # Invariants
//! - `RawNote::id` never changes after creation.
//! - Update and remove against absent ids are silent no-ops.

use crate::model::note::{NoteDraft, NoteId, RawNote};

/// Slot key owning the serialized note collection.
pub const NOTES_SLOT_KEY: &str = "NOTES";

/// Owned, ordered collection of raw notes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteRegistry {
    notes: Vec<RawNote>,
}

impl NoteRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an already-loaded collection.
    pub fn from_notes(notes: Vec<RawNote>) -> Self {
        Self { notes }
    }

    /// Returns the current collection in insertion order.
    pub fn notes(&self) -> &[RawNote] {
        &self.notes
    }

    /// Looks up one raw note by id.
    pub fn get(&self, id: NoteId) -> Option<&RawNote> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Appends a new note built from `draft` and returns its generated id.
    pub fn create(&mut self, draft: NoteDraft) -> NoteId {
        let note = RawNote::from_draft(draft);
        let id = note.id;
        self.notes.push(note);
        id
    }

    /// Replaces title, markdown and tag references of the note matching
    /// `id`, keeping the id untouched. No-op when absent.
    pub fn update(&mut self, id: NoteId, draft: NoteDraft) {
        if let Some(note) = self.notes.iter_mut().find(|note| note.id == id) {
            *note = RawNote::with_id(id, draft);
        }
    }

    /// Removes the note matching `id`. No-op when absent.
    pub fn remove(&mut self, id: NoteId) {
        self.notes.retain(|note| note.id != id);
    }
}
