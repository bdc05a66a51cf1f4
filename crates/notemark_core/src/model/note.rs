//! Note domain model and hydrated projection.
//!
//! # Responsibility
//! - Define the persisted note record with tag-id references.
//! - Define the caller-facing draft payload and the derived hydrated view.
//!
//! # Invariants
//! - `RawNote::id` is generated once at creation and never changes.
//! - `tag_ids` may reference tags that were deleted later; readers must
//!   tolerate stale ids instead of failing.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::tag::{Tag, TagId};

/// Stable identifier for a note.
pub type NoteId = Uuid;

/// Persisted note record.
///
/// References tags by id only. The reference is intentionally unenforced:
/// deleting a tag leaves the id in place here, and hydration drops it.
/// Serialized as `tagIds` to match the stored collection shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNote {
    pub id: NoteId,
    pub title: String,
    pub markdown: String,
    pub tag_ids: Vec<TagId>,
}

/// Caller-supplied payload for creating or replacing a note.
///
/// Carries full `Tag` values; only their ids are persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub markdown: String,
    pub tags: Vec<Tag>,
}

/// Read-only projection of a note joined with its live tags.
///
/// Never persisted and never mutated; recomputed on demand from the current
/// collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HydratedNote {
    pub id: NoteId,
    pub title: String,
    pub markdown: String,
    pub tags: Vec<Tag>,
}

impl RawNote {
    /// Creates a record with a freshly generated id, flattening the draft's
    /// tags to their ids in order.
    pub fn from_draft(draft: NoteDraft) -> Self {
        Self::with_id(Uuid::new_v4(), draft)
    }

    /// Creates a record with a caller-provided stable id.
    pub fn with_id(id: NoteId, draft: NoteDraft) -> Self {
        Self {
            id,
            title: draft.title,
            markdown: draft.markdown,
            tag_ids: draft.tags.iter().map(|tag| tag.id).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{NoteDraft, RawNote};
    use crate::model::tag::Tag;

    #[test]
    fn from_draft_flattens_tags_to_ids_in_order() {
        let first = Tag::new("a");
        let second = Tag::new("b");
        let note = RawNote::from_draft(NoteDraft {
            title: "t".to_string(),
            markdown: "body".to_string(),
            tags: vec![first.clone(), second.clone()],
        });
        assert_eq!(note.tag_ids, vec![first.id, second.id]);
    }

    #[test]
    fn serialized_field_name_is_tag_ids_camel_case() {
        let note = RawNote::from_draft(NoteDraft {
            title: "t".to_string(),
            markdown: String::new(),
            tags: vec![Tag::new("a")],
        });
        let json = serde_json::to_string(&note).unwrap();
        assert!(json.contains("\"tagIds\""));
        assert!(!json.contains("tag_ids"));

        let back: RawNote = serde_json::from_str(&json).unwrap();
        assert_eq!(back, note);
    }
}
