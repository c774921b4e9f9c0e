//! In-memory story backend used by the session integration tests.
//!
//! Mirrors the real server's contract: server-assigned ids, canonical
//! aggregates returned from every mutation, 404s carrying a `detail`
//! message. A single injected failure can stand in for a transient
//! network error.

use std::sync::Mutex;

use async_trait::async_trait;

use fabula_client::{StoryApiError, StoryService};
use fabula_core::story::{Chapter, ChapterStatus, Character, Project, ProjectSummary};
use fabula_core::DbId;

/// Stateful fake implementing [`StoryService`].
#[derive(Default)]
pub struct FakeBackend {
    state: Mutex<FakeState>,
}

#[derive(Default)]
struct FakeState {
    projects: Vec<Project>,
    next_project: u64,
    next_character_id: DbId,
    fail_next: Option<String>,
    requests: u32,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next request fail with the given detail message.
    pub fn fail_next(&self, detail: &str) {
        self.state.lock().unwrap().fail_next = Some(detail.to_string());
    }

    /// Number of requests that reached the backend.
    pub fn request_count(&self) -> u32 {
        self.state.lock().unwrap().requests
    }

    /// Insert a project directly into the backend's store.
    pub fn seed(&self, project: Project) {
        self.state.lock().unwrap().projects.push(project);
    }

    /// The stored (canonical) copy of a project.
    pub fn stored_project(&self, id: &str) -> Option<Project> {
        self.state
            .lock()
            .unwrap()
            .projects
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }
}

impl FakeState {
    fn begin(&mut self) -> Result<(), StoryApiError> {
        self.requests += 1;
        if let Some(detail) = self.fail_next.take() {
            return Err(StoryApiError::Api {
                status: 503,
                detail,
            });
        }
        Ok(())
    }

    fn project_mut(&mut self, id: &str) -> Result<&mut Project, StoryApiError> {
        self.projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoryApiError::Api {
                status: 404,
                detail: "Project not found".to_string(),
            })
    }

    /// Server-side canonicalization: every character gets an id.
    fn assign_character_ids(&mut self, project: &mut Project) {
        for character in &mut project.characters {
            if character.id.is_none() {
                self.next_character_id += 1;
                character.id = Some(self.next_character_id);
            }
        }
    }
}

#[async_trait]
impl StoryService for FakeBackend {
    async fn list_projects(&self) -> Result<Vec<ProjectSummary>, StoryApiError> {
        let mut state = self.state.lock().unwrap();
        state.begin()?;
        Ok(state.projects.iter().map(|p| p.summary()).collect())
    }

    async fn create_project(
        &self,
        idea: &str,
        num_chapters: i64,
    ) -> Result<Project, StoryApiError> {
        let mut state = self.state.lock().unwrap();
        state.begin()?;

        state.next_project += 1;
        let mut project = Project {
            id: format!("proj-{}", state.next_project),
            initial_idea: idea.to_string(),
            synopsis: format!("Synopsis for: {idea}"),
            writing_style: String::new(),
            characters: vec![
                Character {
                    id: None,
                    name: "Aria".to_string(),
                    role: "Protagonist".to_string(),
                    description: "Leads the story".to_string(),
                },
                Character {
                    id: None,
                    name: "Bram".to_string(),
                    role: "Mentor".to_string(),
                    description: "Guides Aria".to_string(),
                },
            ],
            chapters: (1..=num_chapters)
                .map(|i| Chapter {
                    id: i,
                    title: format!("Chapter {i}"),
                    outline: format!("Outline for chapter {i}"),
                    content: String::new(),
                    status: ChapterStatus::Outline,
                })
                .collect(),
        };
        state.assign_character_ids(&mut project);
        state.projects.push(project.clone());
        Ok(project)
    }

    async fn fetch_project(&self, id: &str) -> Result<Project, StoryApiError> {
        let mut state = self.state.lock().unwrap();
        state.begin()?;
        Ok(state.project_mut(id)?.clone())
    }

    async fn update_project(&self, project: &Project) -> Result<Project, StoryApiError> {
        let mut state = self.state.lock().unwrap();
        state.begin()?;

        let mut canonical = project.clone();
        state.assign_character_ids(&mut canonical);

        let stored = state.project_mut(&project.id)?;
        *stored = canonical.clone();
        Ok(canonical)
    }

    async fn delete_project(&self, id: &str) -> Result<(), StoryApiError> {
        let mut state = self.state.lock().unwrap();
        state.begin()?;

        let before = state.projects.len();
        state.projects.retain(|p| p.id != id);
        if state.projects.len() == before {
            return Err(StoryApiError::Api {
                status: 404,
                detail: "Project not found".to_string(),
            });
        }
        Ok(())
    }

    async fn generate_chapter(
        &self,
        project_id: &str,
        chapter_id: DbId,
    ) -> Result<Project, StoryApiError> {
        let mut state = self.state.lock().unwrap();
        state.begin()?;

        let project = state.project_mut(project_id)?;
        let chapter = project
            .chapters
            .iter_mut()
            .find(|c| c.id == chapter_id)
            .ok_or(StoryApiError::Api {
                status: 404,
                detail: "Chapter not found".to_string(),
            })?;

        chapter.content = format!("Generated prose for chapter {chapter_id}.");
        chapter.status = ChapterStatus::Completed;
        Ok(project.clone())
    }
}
