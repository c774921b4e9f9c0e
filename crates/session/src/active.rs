//! Active-entry selector state machine.
//!
//! Exactly one outline entry (synopsis, writing style, a character, or a
//! chapter) is targeted for editing at a time. The selector is transient
//! client state, never persisted, and only transitions through the
//! session operations (`open`, `select_entry`, `add_character`,
//! `delete_character`, `generate_chapter`).

use fabula_core::story::Project;
use fabula_core::DbId;

/// The outline entry currently targeted for editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveEntry {
    /// Nothing selected; the editor is hidden.
    #[default]
    None,
    /// The project synopsis.
    Synopsis,
    /// The writing style instructions.
    Style,
    /// The character with this server-assigned id.
    Character(DbId),
    /// The chapter with this id.
    Chapter(DbId),
}

impl ActiveEntry {
    /// Whether this entry still exists in the given aggregate.
    ///
    /// `Synopsis` and `Style` always exist; `None` trivially does.
    pub fn exists_in(self, project: &Project) -> bool {
        match self {
            ActiveEntry::None | ActiveEntry::Synopsis | ActiveEntry::Style => true,
            ActiveEntry::Character(id) => project.character(id).is_some(),
            ActiveEntry::Chapter(id) => project.chapter(id).is_some(),
        }
    }

    /// Re-derive the pointer against a freshly adopted aggregate: the
    /// same kind/id if it survived, `None` otherwise.
    pub fn rederive(self, project: &Project) -> ActiveEntry {
        if self.exists_in(project) {
            self
        } else {
            tracing::debug!(entry = ?self, "Active entry vanished from canonical aggregate");
            ActiveEntry::None
        }
    }

    /// Default selection for a freshly opened project: the first
    /// character if any exist, otherwise nothing.
    pub fn default_for(project: &Project) -> ActiveEntry {
        match project.first_character_id() {
            Some(id) => ActiveEntry::Character(id),
            None => ActiveEntry::None,
        }
    }
}

/// Which field of the active entry an edit writes to.
///
/// `Text` addresses the single body field of synopsis, style, and
/// chapter entries; the named variants address character fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    Text,
    Name,
    Role,
    Description,
}

/// Write `value` into the field of the active entry inside `project`.
///
/// Character fields are trimmed; no other validation is applied. A
/// field that does not belong to the active entry kind, or an entry
/// that is no longer present, is ignored defensively. Returns whether
/// anything was written.
pub fn apply_edit(
    project: &mut Project,
    active: ActiveEntry,
    field: EntryField,
    value: &str,
) -> bool {
    match (active, field) {
        (ActiveEntry::Synopsis, EntryField::Text) => {
            project.synopsis = value.to_string();
            true
        }
        (ActiveEntry::Style, EntryField::Text) => {
            project.writing_style = value.to_string();
            true
        }
        (ActiveEntry::Character(id), field) => match project.character_mut(id) {
            Some(character) => {
                let trimmed = value.trim();
                match field {
                    EntryField::Name => character.name = trimmed.to_string(),
                    EntryField::Role => character.role = trimmed.to_string(),
                    EntryField::Description => character.description = trimmed.to_string(),
                    EntryField::Text => return false,
                }
                true
            }
            None => {
                tracing::debug!(character_id = id, "Edit targeted a missing character");
                false
            }
        },
        (ActiveEntry::Chapter(id), EntryField::Text) => match project.chapter_mut(id) {
            Some(chapter) => {
                *chapter.body_mut() = value.to_string();
                true
            }
            None => {
                tracing::debug!(chapter_id = id, "Edit targeted a missing chapter");
                false
            }
        },
        _ => false,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
