//! In-memory project directory.
//!
//! Holds the list of project summaries shown in the sidebar. The list
//! mirrors the server on `refresh`; creates prepend locally so the
//! newest project appears first without another round-trip.

use fabula_client::StoryService;
use fabula_core::creation::{validate_chapter_count, validate_idea};
use fabula_core::story::{Project, ProjectSummary};

use crate::error::SessionError;

/// The list of available projects.
#[derive(Debug, Default)]
pub struct ProjectDirectory {
    summaries: Vec<ProjectSummary>,
}

impl ProjectDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current summaries, newest-created first after local creates.
    pub fn summaries(&self) -> &[ProjectSummary] {
        &self.summaries
    }

    /// Whether a project id is present in the list.
    pub fn contains(&self, id: &str) -> bool {
        self.summaries.iter().any(|s| s.id == id)
    }

    /// Replace the list with the server's current one.
    pub async fn refresh<S: StoryService>(&mut self, service: &S) -> Result<(), SessionError> {
        self.summaries = service.list_projects().await?;
        tracing::debug!(count = self.summaries.len(), "Refreshed project directory");
        Ok(())
    }

    /// Create a project from an idea.
    ///
    /// The idea and chapter count are validated locally before any
    /// request is made. On success the new project's summary is
    /// prepended to the list and the full aggregate is returned so the
    /// caller can open it.
    pub async fn create<S: StoryService>(
        &mut self,
        service: &S,
        idea: &str,
        num_chapters: i64,
    ) -> Result<Project, SessionError> {
        validate_idea(idea)?;
        validate_chapter_count(num_chapters)?;

        let project = service.create_project(idea.trim(), num_chapters).await?;
        tracing::info!(project_id = %project.id, "Created project");
        self.summaries.insert(0, project.summary());
        Ok(project)
    }

    /// Delete a project and drop its summary from the list.
    ///
    /// A 404 from the server propagates as the request error; the list
    /// is left unchanged in that case.
    pub async fn delete<S: StoryService>(
        &mut self,
        service: &S,
        id: &str,
    ) -> Result<(), SessionError> {
        service.delete_project(id).await?;
        self.summaries.retain(|s| s.id != id);
        tracing::info!(project_id = %id, "Deleted project");
        Ok(())
    }
}
