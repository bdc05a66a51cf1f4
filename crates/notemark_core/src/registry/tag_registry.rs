//! Tag collection owner.
//!
//! # Invariants
//! - Tag ids are unique; callers mint fresh ids at the input boundary
//!   (`Tag::new`), the registry does not re-check.
//! - Removing a tag never touches notes referencing it.

use crate::model::tag::{Tag, TagId};

/// Slot key owning the serialized tag collection.
pub const TAGS_SLOT_KEY: &str = "TAGS";

/// Owned, ordered collection of tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagRegistry {
    tags: Vec<Tag>,
}

impl TagRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an already-loaded collection.
    pub fn from_tags(tags: Vec<Tag>) -> Self {
        Self { tags }
    }

    /// Returns the current collection in insertion order.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Looks up one tag by id.
    pub fn get(&self, id: TagId) -> Option<&Tag> {
        self.tags.iter().find(|tag| tag.id == id)
    }

    /// Appends a tag.
    pub fn add(&mut self, tag: Tag) {
        self.tags.push(tag);
    }

    /// Replaces the label of the tag matching `id`. No-op when absent.
    pub fn rename(&mut self, id: TagId, label: impl Into<String>) {
        if let Some(tag) = self.tags.iter_mut().find(|tag| tag.id == id) {
            tag.label = label.into();
        }
    }

    /// Removes the tag matching `id`. No-op when absent.
    pub fn remove(&mut self, id: TagId) {
        self.tags.retain(|tag| tag.id != id);
    }
}
