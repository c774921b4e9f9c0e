//! The one explicit object tying directory, session, and service.
//!
//! Handlers receive a `&mut Workbench` instead of reaching for globals.
//! The workbench enforces the cross-component side effects: a create
//! opens the new project, deleting the open project returns the session
//! to the unopened state.

use fabula_client::StoryService;
use fabula_core::story::Project;
use fabula_core::DbId;

use crate::active::{ActiveEntry, EntryField};
use crate::directory::ProjectDirectory;
use crate::error::SessionError;
use crate::session::ProjectSession;

/// Directory + optional open session + the service they talk through.
pub struct Workbench<S: StoryService> {
    service: S,
    directory: ProjectDirectory,
    session: Option<ProjectSession>,
}

impl<S: StoryService> Workbench<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            directory: ProjectDirectory::new(),
            session: None,
        }
    }

    pub fn directory(&self) -> &ProjectDirectory {
        &self.directory
    }

    /// The service this workbench talks through.
    pub fn service(&self) -> &S {
        &self.service
    }

    /// The open session, if a project is open.
    pub fn session(&self) -> Option<&ProjectSession> {
        self.session.as_ref()
    }

    /// The open project aggregate, if any.
    pub fn open_project(&self) -> Option<&Project> {
        self.session.as_ref().map(|s| s.project())
    }

    // ---- directory operations ----

    /// Refresh the directory listing from the server.
    pub async fn refresh_directory(&mut self) -> Result<(), SessionError> {
        self.directory.refresh(&self.service).await
    }

    /// Create a project and open it.
    ///
    /// The new summary is prepended to the directory and the returned
    /// aggregate becomes the open session.
    pub async fn create_project(
        &mut self,
        idea: &str,
        num_chapters: i64,
    ) -> Result<&Project, SessionError> {
        let project = self.directory.create(&self.service, idea, num_chapters).await?;
        let session = self.session.insert(ProjectSession::adopt(project));
        Ok(session.project())
    }

    /// Open an existing project, replacing any session in progress.
    pub async fn open(&mut self, id: &str) -> Result<&Project, SessionError> {
        let opened = ProjectSession::open(&self.service, id).await?;
        let session = self.session.insert(opened);
        Ok(session.project())
    }

    /// Close the open session, if any. Local-only; nothing is saved.
    pub fn close(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::info!(project_id = %session.project().id, "Closed project");
        }
    }

    /// Delete a project.
    ///
    /// If the deleted project is the open one the session returns to
    /// the unopened state; deleting any other project leaves the open
    /// session untouched.
    pub async fn delete_project(&mut self, id: &str) -> Result<(), SessionError> {
        self.directory.delete(&self.service, id).await?;
        if self.open_project().is_some_and(|p| p.id == id) {
            self.session = None;
        }
        Ok(())
    }

    // ---- session operations ----

    /// Switch the active editing target. No-op when no project is open
    /// or the target does not exist.
    pub fn select_entry(&mut self, target: ActiveEntry) -> bool {
        match &mut self.session {
            Some(session) => session.select_entry(target),
            None => false,
        }
    }

    /// Edit the active entry's field. Returns whether anything changed.
    pub fn edit(&mut self, field: EntryField, value: &str) -> bool {
        match &mut self.session {
            Some(session) => session.edit(field, value),
            None => false,
        }
    }

    /// Save the open aggregate by full replacement.
    pub async fn save(&mut self) -> Result<(), SessionError> {
        match &mut self.session {
            Some(session) => session.save(&self.service).await,
            None => Err(SessionError::NoOpenProject),
        }
    }

    /// Append a placeholder character and save.
    pub async fn add_character(&mut self) -> Result<(), SessionError> {
        match &mut self.session {
            Some(session) => session.add_character(&self.service).await,
            None => Err(SessionError::NoOpenProject),
        }
    }

    /// Remove a character and save.
    pub async fn delete_character(&mut self, id: DbId) -> Result<(), SessionError> {
        match &mut self.session {
            Some(session) => session.delete_character(&self.service, id).await,
            None => Err(SessionError::NoOpenProject),
        }
    }

    /// Generate prose for the active chapter.
    pub async fn generate_chapter(&mut self) -> Result<(), SessionError> {
        match &mut self.session {
            Some(session) => session.generate_chapter(&self.service).await,
            None => Err(SessionError::NoOpenProject),
        }
    }
}
