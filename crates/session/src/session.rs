//! The editing session for one open project.
//!
//! A [`ProjectSession`] exclusively owns the in-memory aggregate of the
//! project being edited. Mutations write into that local copy; `save`
//! ships the whole aggregate and adopts the server's canonical response.
//! Network-facing operations take the [`StoryService`] by reference and
//! `&mut self`, so a second save cannot start while one is in flight.

use fabula_client::StoryService;
use fabula_core::story::{Character, Project};
use fabula_core::{CoreError, DbId};

use crate::active::{self, ActiveEntry, EntryField};
use crate::error::SessionError;

/// One open project plus the active-entry selector.
#[derive(Debug)]
pub struct ProjectSession {
    project: Project,
    active: ActiveEntry,
}

impl ProjectSession {
    /// Fetch the full aggregate for `id` and start a session on it.
    ///
    /// The first character (if any) becomes the active entry.
    pub async fn open<S: StoryService>(service: &S, id: &str) -> Result<Self, SessionError> {
        let project = service.fetch_project(id).await?;
        tracing::info!(project_id = %project.id, "Opened project");
        Ok(Self::adopt(project))
    }

    /// Start a session on an aggregate already in hand (e.g. the
    /// response of a create call), with the default active entry.
    pub fn adopt(project: Project) -> Self {
        let active = ActiveEntry::default_for(&project);
        Self { project, active }
    }

    /// The open aggregate.
    pub fn project(&self) -> &Project {
        &self.project
    }

    /// The entry currently targeted for editing.
    pub fn active(&self) -> ActiveEntry {
        self.active
    }

    /// Switch the active editing target. Pure client-side state change.
    ///
    /// A target that does not exist in the current aggregate is ignored
    /// (recoverable defensive check, not an error): the previous
    /// selection stays. Returns whether the switch happened.
    pub fn select_entry(&mut self, target: ActiveEntry) -> bool {
        if target.exists_in(&self.project) {
            self.active = target;
            true
        } else {
            tracing::debug!(target = ?target, "Ignoring selection of a missing entry");
            false
        }
    }

    /// Write `value` into the given field of the active entry.
    ///
    /// Character fields are trimmed; nothing else is validated. Edits
    /// against a mismatched field or a vanished entry are ignored.
    /// Returns whether anything was written.
    pub fn edit(&mut self, field: EntryField, value: &str) -> bool {
        active::apply_edit(&mut self.project, self.active, field, value)
    }

    /// Persist the aggregate by full replacement.
    ///
    /// On success the local aggregate is replaced by the server's
    /// canonical response and the active pointer is re-derived against
    /// it. On failure local edits stay in memory so typed work is not
    /// lost; the error propagates for a blocking notification.
    pub async fn save<S: StoryService>(&mut self, service: &S) -> Result<(), SessionError> {
        let canonical = service.update_project(&self.project).await?;
        self.project = canonical;
        self.active = self.active.rederive(&self.project);
        tracing::debug!(project_id = %self.project.id, "Adopted canonical aggregate after save");
        Ok(())
    }

    /// Append a placeholder character and save immediately.
    ///
    /// The server assigns the new character's id; the canonical
    /// response's last character becomes the active entry. If the save
    /// fails the placeholder stays in the local aggregate.
    pub async fn add_character<S: StoryService>(&mut self, service: &S) -> Result<(), SessionError> {
        self.project.characters.push(Character::placeholder());
        self.save(service).await?;

        self.active = match self.project.characters.last().and_then(|c| c.id) {
            Some(id) => ActiveEntry::Character(id),
            // Server echoed no id for the new character; fall back to
            // whatever the re-derivation kept.
            None => self.active,
        };
        Ok(())
    }

    /// Remove the character with `id` and save.
    ///
    /// Afterwards the first remaining character is selected, or the
    /// active entry clears when none remain. Deleting an unknown id is
    /// a NotFound error and performs no request.
    pub async fn delete_character<S: StoryService>(
        &mut self,
        service: &S,
        id: DbId,
    ) -> Result<(), SessionError> {
        let before = self.project.characters.len();
        self.project.characters.retain(|c| c.id != Some(id));
        if self.project.characters.len() == before {
            return Err(CoreError::NotFound {
                entity: "character",
                id: id.to_string(),
            }
            .into());
        }

        if let Err(e) = self.save(service).await {
            // The removal stays in the local copy (retained-edits
            // policy); make sure the selector no longer points at it.
            self.active = self.active.rederive(&self.project);
            return Err(e);
        }

        self.active = match self.project.first_character_id() {
            Some(first) => ActiveEntry::Character(first),
            None => ActiveEntry::None,
        };
        Ok(())
    }

    /// Generate prose for the active chapter.
    ///
    /// Requires the active entry to be a chapter that is still an
    /// outline; the server performs the outline → completed transition
    /// and returns the updated aggregate, which is adopted with that
    /// chapter active.
    pub async fn generate_chapter<S: StoryService>(
        &mut self,
        service: &S,
    ) -> Result<(), SessionError> {
        let ActiveEntry::Chapter(chapter_id) = self.active else {
            return Err(SessionError::NotAChapter);
        };

        if let Some(chapter) = self.project.chapter(chapter_id) {
            if chapter.status.is_completed() {
                return Err(CoreError::Validation(format!(
                    "Chapter {chapter_id} is already completed"
                ))
                .into());
            }
        }

        let canonical = service
            .generate_chapter(&self.project.id, chapter_id)
            .await?;
        self.project = canonical;
        self.active = ActiveEntry::Chapter(chapter_id).rederive(&self.project);
        tracing::info!(
            project_id = %self.project.id,
            chapter_id,
            "Chapter generation complete"
        );
        Ok(())
    }
}
