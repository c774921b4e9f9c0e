//! REST API client for the story backend.
//!
//! Wraps the backend HTTP API (project listing, creation, full-aggregate
//! save, deletion, chapter generation) using [`reqwest`]. Every mutation
//! returns the server's canonical [`Project`], which callers must adopt
//! wholesale.

use fabula_core::story::{Project, ProjectSummary};
use fabula_core::DbId;

/// HTTP client for a single story backend.
pub struct StoryApi {
    client: reqwest::Client,
    base_url: String,
}

/// Errors from the story API layer.
///
/// The backend reports failures as JSON bodies carrying a
/// human-readable `detail` field; [`StoryApiError::Api`] surfaces that
/// text verbatim so the UI can show it unchanged.
#[derive(Debug, thiserror::Error)]
pub enum StoryApiError {
    /// The HTTP request itself failed (network, DNS, TLS, or a body
    /// that could not be decoded as the expected type).
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend returned a non-2xx status code.
    #[error("Server error ({status}): {detail}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Human-readable message from the error body.
        detail: String,
    },
}

impl StoryApiError {
    /// `true` for a 404 response, which the directory layer treats as a
    /// distinct NotFound outcome on delete.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoryApiError::Api { status: 404, .. })
    }
}

impl StoryApi {
    /// Create a new API client.
    ///
    /// * `base_url` - Base HTTP URL, e.g. `http://127.0.0.1:8000`.
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Create an API client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling).
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Base HTTP URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List all project summaries.
    ///
    /// Sends `GET /api/projects`.
    pub async fn list_projects(&self) -> Result<Vec<ProjectSummary>, StoryApiError> {
        let response = self
            .client
            .get(format!("{}/api/projects", self.base_url))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Create a project from an idea.
    ///
    /// Sends `POST /api/projects`. The server generates characters,
    /// synopsis, and `num_chapters` chapter outlines before responding
    /// with the full aggregate.
    pub async fn create_project(
        &self,
        idea: &str,
        num_chapters: i64,
    ) -> Result<Project, StoryApiError> {
        let body = serde_json::json!({
            "idea": idea,
            "num_chapters": num_chapters,
        });

        let response = self
            .client
            .post(format!("{}/api/projects", self.base_url))
            .json(&body)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Fetch one full project aggregate.
    ///
    /// Sends `GET /api/projects/{id}`.
    pub async fn fetch_project(&self, id: &str) -> Result<Project, StoryApiError> {
        let response = self
            .client
            .get(format!("{}/api/projects/{id}", self.base_url))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Save a project by full replacement.
    ///
    /// Sends `PUT /api/projects/{id}` with the entire aggregate as the
    /// body. The response is the canonicalized aggregate, including any
    /// ids the server assigned to new characters.
    pub async fn update_project(&self, project: &Project) -> Result<Project, StoryApiError> {
        let response = self
            .client
            .put(format!("{}/api/projects/{}", self.base_url, project.id))
            .json(project)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Delete a project.
    ///
    /// Sends `DELETE /api/projects/{id}`. A missing project surfaces as
    /// [`StoryApiError::Api`] with status 404.
    pub async fn delete_project(&self, id: &str) -> Result<(), StoryApiError> {
        let response = self
            .client
            .delete(format!("{}/api/projects/{id}", self.base_url))
            .send()
            .await?;

        Self::check_status(response).await
    }

    /// Ask the backend to generate the prose for one chapter.
    ///
    /// Sends `POST /api/generate-chapter`. On success the returned
    /// aggregate has the target chapter transitioned to `completed`
    /// with populated content.
    pub async fn generate_chapter(
        &self,
        project_id: &str,
        chapter_id: DbId,
    ) -> Result<Project, StoryApiError> {
        let body = serde_json::json!({
            "project_id": project_id,
            "chapter_id": chapter_id,
        });

        let response = self
            .client
            .post(format!("{}/api/generate-chapter", self.base_url))
            .json(&body)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`StoryApiError::Api`]
    /// carrying the extracted `detail` message on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, StoryApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = extract_detail(status.as_u16(), &body);
            tracing::warn!(status = status.as_u16(), detail = %detail, "Story API request failed");
            return Err(StoryApiError::Api {
                status: status.as_u16(),
                detail,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, StoryApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Assert the response has a success status code, discarding the body.
    async fn check_status(response: reqwest::Response) -> Result<(), StoryApiError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}

/// Extract the human-readable message from an error response body.
///
/// The backend encodes failures as `{"detail": "..."}`. Bodies that are
/// not JSON, or JSON without a `detail` field, fall back to the raw text;
/// an empty body falls back to the bare status code.
fn extract_detail(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        match value.get("detail") {
            Some(serde_json::Value::String(s)) => return s.clone(),
            // Validation errors arrive as structured detail payloads.
            Some(other) => return other.to_string(),
            None => {}
        }
    }
    if body.trim().is_empty() {
        format!("HTTP {status}")
    } else {
        body.to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
