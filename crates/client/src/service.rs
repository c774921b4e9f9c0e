//! The async seam between the session layer and the backend.
//!
//! [`StoryService`] mirrors the REST surface one-to-one. Production code
//! uses [`StoryApi`]; session tests substitute an in-memory backend with
//! failure injection.

use async_trait::async_trait;

use fabula_core::story::{Project, ProjectSummary};
use fabula_core::DbId;

use crate::api::{StoryApi, StoryApiError};

/// Backend operations the session layer depends on.
#[async_trait]
pub trait StoryService: Send + Sync {
    /// List all project summaries.
    async fn list_projects(&self) -> Result<Vec<ProjectSummary>, StoryApiError>;

    /// Create a project; the server generates its initial structure.
    async fn create_project(&self, idea: &str, num_chapters: i64)
        -> Result<Project, StoryApiError>;

    /// Fetch one full project aggregate.
    async fn fetch_project(&self, id: &str) -> Result<Project, StoryApiError>;

    /// Save by full replacement; returns the canonical aggregate.
    async fn update_project(&self, project: &Project) -> Result<Project, StoryApiError>;

    /// Delete a project; 404 surfaces as [`StoryApiError::Api`].
    async fn delete_project(&self, id: &str) -> Result<(), StoryApiError>;

    /// Generate prose for one chapter; returns the updated aggregate.
    async fn generate_chapter(
        &self,
        project_id: &str,
        chapter_id: DbId,
    ) -> Result<Project, StoryApiError>;
}

#[async_trait]
impl StoryService for StoryApi {
    async fn list_projects(&self) -> Result<Vec<ProjectSummary>, StoryApiError> {
        StoryApi::list_projects(self).await
    }

    async fn create_project(
        &self,
        idea: &str,
        num_chapters: i64,
    ) -> Result<Project, StoryApiError> {
        StoryApi::create_project(self, idea, num_chapters).await
    }

    async fn fetch_project(&self, id: &str) -> Result<Project, StoryApiError> {
        StoryApi::fetch_project(self, id).await
    }

    async fn update_project(&self, project: &Project) -> Result<Project, StoryApiError> {
        StoryApi::update_project(self, project).await
    }

    async fn delete_project(&self, id: &str) -> Result<(), StoryApiError> {
        StoryApi::delete_project(self, id).await
    }

    async fn generate_chapter(
        &self,
        project_id: &str,
        chapter_id: DbId,
    ) -> Result<Project, StoryApiError> {
        StoryApi::generate_chapter(self, project_id, chapter_id).await
    }
}
