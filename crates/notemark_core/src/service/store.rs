//! Note/tag store facade and hydration.
//!
//! # Responsibility
//! - Load both collections at startup and keep them as owned state.
//! - Persist the full owning collection after every mutation.
//! - Derive hydrated notes by joining raw notes with live tags.
//!
//! # Invariants
//! - Deleting a tag does not cascade into notes; the stale id is dropped at
//!   hydration only, the raw record is left untouched.
//! - Every mutation rewrites its whole collection slot; the tag and note
//!   slots are never written together atomically.
//! - Hydrated notes are recomputed views, never stored.

use crate::model::note::{HydratedNote, NoteDraft, NoteId, RawNote};
use crate::model::tag::{Tag, TagId};
use crate::registry::note_registry::{NoteRegistry, NOTES_SLOT_KEY};
use crate::registry::tag_registry::{TagRegistry, TAGS_SLOT_KEY};
use crate::repo::kv_repo::{KvBacking, RepoResult};
use crate::repo::slot_repo::{load_or_init, save};
use log::{debug, info};

/// Note/tag store over a durable key/value backing.
///
/// Owns the in-memory collections; the backing is only touched through the
/// slot persistence paths.
#[derive(Debug)]
pub struct NoteStore<B: KvBacking> {
    backing: B,
    tags: TagRegistry,
    notes: NoteRegistry,
}

impl<B: KvBacking> NoteStore<B> {
    /// Loads both collections from the backing, initializing empty ones on
    /// first use.
    ///
    /// # Errors
    /// - Propagates `RepoError::Corrupt` when stored bytes do not decode.
    ///   Callers are expected to halt startup instead of running on damaged
    ///   data.
    pub fn open(backing: B) -> RepoResult<Self> {
        let tags: Vec<Tag> = load_or_init(&backing, TAGS_SLOT_KEY, Vec::new())?;
        let notes: Vec<RawNote> = load_or_init(&backing, NOTES_SLOT_KEY, Vec::new())?;
        info!(
            "event=store_open module=store status=ok tags={} notes={}",
            tags.len(),
            notes.len()
        );

        Ok(Self {
            backing,
            tags: TagRegistry::from_tags(tags),
            notes: NoteRegistry::from_notes(notes),
        })
    }

    /// Returns the current tag collection.
    pub fn tags(&self) -> &[Tag] {
        self.tags.tags()
    }

    /// Returns the current raw note collection.
    pub fn raw_notes(&self) -> &[RawNote] {
        self.notes.notes()
    }

    /// Looks up one raw note by id.
    pub fn raw_note(&self, id: NoteId) -> Option<&RawNote> {
        self.notes.get(id)
    }

    /// Returns the hydrated view of all notes.
    pub fn notes(&self) -> Vec<HydratedNote> {
        hydrate(self.notes.notes(), self.tags.tags())
    }

    /// Resolves one note by id as a hydrated view.
    ///
    /// Returns `None` when the id is unknown; navigation-level handling
    /// (such as redirecting) is up to the caller.
    pub fn note(&self, id: NoteId) -> Option<HydratedNote> {
        self.notes
            .get(id)
            .map(|note| hydrate_one(note, self.tags.tags()))
    }

    /// Hydrated notes whose title contains `title` (case-insensitive) and
    /// which carry every tag in `tag_ids`.
    ///
    /// An empty `title` matches every note, as does an empty `tag_ids`.
    pub fn search_notes(&self, title: &str, tag_ids: &[TagId]) -> Vec<HydratedNote> {
        let needle = title.to_lowercase();
        self.notes()
            .into_iter()
            .filter(|note| {
                (needle.is_empty() || note.title.to_lowercase().contains(&needle))
                    && tag_ids
                        .iter()
                        .all(|id| note.tags.iter().any(|tag| tag.id == *id))
            })
            .collect()
    }

    /// Creates a note from `draft` and persists the note collection.
    pub fn create_note(&mut self, draft: NoteDraft) -> RepoResult<NoteId> {
        let id = self.notes.create(draft);
        self.persist_notes()?;
        debug!("event=note_create module=store status=ok note_id={id}");
        Ok(id)
    }

    /// Replaces the note matching `id` with `draft`, keeping its id.
    ///
    /// A silent no-op (still persisted) when the id is unknown.
    pub fn update_note(&mut self, id: NoteId, draft: NoteDraft) -> RepoResult<()> {
        self.notes.update(id, draft);
        self.persist_notes()?;
        debug!("event=note_update module=store status=ok note_id={id}");
        Ok(())
    }

    /// Removes the note matching `id`. A silent no-op when unknown.
    pub fn delete_note(&mut self, id: NoteId) -> RepoResult<()> {
        self.notes.remove(id);
        self.persist_notes()?;
        debug!("event=note_delete module=store status=ok note_id={id}");
        Ok(())
    }

    /// Appends `tag` and persists the tag collection.
    ///
    /// The caller supplies a fresh unique id (see `Tag::new`).
    pub fn add_tag(&mut self, tag: Tag) -> RepoResult<()> {
        let id = tag.id;
        self.tags.add(tag);
        self.persist_tags()?;
        debug!("event=tag_add module=store status=ok tag_id={id}");
        Ok(())
    }

    /// Replaces the label of the tag matching `id`. A silent no-op when
    /// unknown.
    pub fn update_tag(&mut self, id: TagId, label: impl Into<String>) -> RepoResult<()> {
        self.tags.rename(id, label);
        self.persist_tags()?;
        debug!("event=tag_update module=store status=ok tag_id={id}");
        Ok(())
    }

    /// Removes the tag matching `id` and persists the tag collection.
    ///
    /// Does not cascade: notes keep the stale id and hydration drops it.
    pub fn delete_tag(&mut self, id: TagId) -> RepoResult<()> {
        self.tags.remove(id);
        self.persist_tags()?;
        debug!("event=tag_delete module=store status=ok tag_id={id}");
        Ok(())
    }

    fn persist_notes(&self) -> RepoResult<()> {
        save(&self.backing, NOTES_SLOT_KEY, self.notes.notes())
    }

    fn persist_tags(&self) -> RepoResult<()> {
        save(&self.backing, TAGS_SLOT_KEY, self.tags.tags())
    }
}

/// Joins raw notes with the current tag collection.
///
/// Pure and deterministic. For each note the output tags follow `tag_ids`
/// order, and ids with no live tag are dropped silently.
pub fn hydrate(notes: &[RawNote], tags: &[Tag]) -> Vec<HydratedNote> {
    notes.iter().map(|note| hydrate_one(note, tags)).collect()
}

fn hydrate_one(note: &RawNote, tags: &[Tag]) -> HydratedNote {
    HydratedNote {
        id: note.id,
        title: note.title.clone(),
        markdown: note.markdown.clone(),
        tags: note
            .tag_ids
            .iter()
            .filter_map(|id| tags.iter().find(|tag| tag.id == *id))
            .cloned()
            .collect(),
    }
}
