//! Story project aggregate and its wire types.
//!
//! A [`Project`] is the unit of persistence: the server returns it whole
//! after every mutation and the client adopts that canonical copy
//! verbatim. Characters and chapters are ordered sequences nested inside
//! the aggregate; they are never fetched or saved individually.

use serde::{Deserialize, Serialize};

use crate::types::{DbId, ProjectId};

// ---------------------------------------------------------------------------
// Chapter
// ---------------------------------------------------------------------------

/// Lifecycle status of a chapter.
///
/// The transition `Outline` → `Completed` happens exactly once, on the
/// server, when chapter generation succeeds. The client never sets
/// `Completed` itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChapterStatus {
    /// Only the draft outline exists.
    Outline,
    /// Final prose has been generated; `content` is populated.
    Completed,
}

impl ChapterStatus {
    /// `true` once the chapter carries generated prose.
    pub fn is_completed(self) -> bool {
        matches!(self, ChapterStatus::Completed)
    }

    /// Short human-readable badge used in outline listings.
    pub fn label(self) -> &'static str {
        match self {
            ChapterStatus::Outline => "outline only",
            ChapterStatus::Completed => "completed",
        }
    }
}

/// One chapter of the story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// Server-assigned chapter id, unique within the project.
    pub id: DbId,
    /// Display title.
    pub title: String,
    /// Draft text edited while the chapter is still an outline.
    #[serde(default)]
    pub outline: String,
    /// Final prose; meaningful only once `status` is `Completed`.
    #[serde(default)]
    pub content: String,
    /// Current lifecycle status.
    pub status: ChapterStatus,
}

impl Chapter {
    /// The text the editor operates on: `content` for a completed
    /// chapter, `outline` otherwise.
    pub fn body(&self) -> &str {
        match self.status {
            ChapterStatus::Completed => &self.content,
            ChapterStatus::Outline => &self.outline,
        }
    }

    /// Mutable access to the same field [`body`](Self::body) reads.
    pub fn body_mut(&mut self) -> &mut String {
        match self.status {
            ChapterStatus::Completed => &mut self.content,
            ChapterStatus::Outline => &mut self.outline,
        }
    }
}

// ---------------------------------------------------------------------------
// Character
// ---------------------------------------------------------------------------

/// Placeholder name for a character added locally but not yet described.
pub const PLACEHOLDER_NAME: &str = "Unnamed";
/// Placeholder role for a newly added character.
pub const PLACEHOLDER_ROLE: &str = "Protagonist";
/// Placeholder description for a newly added character.
pub const PLACEHOLDER_DESCRIPTION: &str = "To be described.";

/// One character of the story.
///
/// Ordering within [`Project::characters`] is insertion order; names
/// carry no uniqueness constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Server-assigned id; `None` until the aggregate is first saved
    /// after this character was appended locally.
    #[serde(default)]
    pub id: Option<DbId>,
    pub name: String,
    pub role: String,
    pub description: String,
}

impl Character {
    /// The placeholder appended by the add-character flow. The server
    /// assigns the id on the save that immediately follows.
    pub fn placeholder() -> Self {
        Self {
            id: None,
            name: PLACEHOLDER_NAME.to_string(),
            role: PLACEHOLDER_ROLE.to_string(),
            description: PLACEHOLDER_DESCRIPTION.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Project aggregate
// ---------------------------------------------------------------------------

/// The full project aggregate, treated as one persistence unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Server-assigned project id, immutable after creation.
    pub id: ProjectId,
    /// The idea the project was created from.
    pub initial_idea: String,
    #[serde(default)]
    pub synopsis: String,
    /// Prose style instructions threaded into chapter generation.
    /// Older server payloads omit the field, so it defaults to empty.
    #[serde(default)]
    pub writing_style: String,
    #[serde(default)]
    pub characters: Vec<Character>,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

impl Project {
    /// Look up a character by server-assigned id.
    ///
    /// Locally appended characters with `id: None` are not addressable
    /// here; they gain an id on the next save.
    pub fn character(&self, id: DbId) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == Some(id))
    }

    pub fn character_mut(&mut self, id: DbId) -> Option<&mut Character> {
        self.characters.iter_mut().find(|c| c.id == Some(id))
    }

    pub fn chapter(&self, id: DbId) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.id == id)
    }

    pub fn chapter_mut(&mut self, id: DbId) -> Option<&mut Chapter> {
        self.chapters.iter_mut().find(|c| c.id == id)
    }

    /// Id of the first character, if the project has any.
    ///
    /// Used to pick the default active entry when a project is opened.
    pub fn first_character_id(&self) -> Option<DbId> {
        self.characters.first().and_then(|c| c.id)
    }

    /// The directory-listing row for this project.
    pub fn summary(&self) -> ProjectSummary {
        ProjectSummary {
            id: self.id.clone(),
            initial_idea: self.initial_idea.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Directory summary
// ---------------------------------------------------------------------------

/// Number of leading characters of the idea shown as a project title.
pub const TITLE_PREVIEW_CHARS: usize = 20;

/// One row of the project directory listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub id: ProjectId,
    pub initial_idea: String,
}

impl ProjectSummary {
    /// Short display title: the first [`TITLE_PREVIEW_CHARS`] characters
    /// of the idea followed by an ellipsis.
    pub fn title(&self) -> String {
        let preview: String = self.initial_idea.chars().take(TITLE_PREVIEW_CHARS).collect();
        format!("{preview}...")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn chapter(id: DbId, status: ChapterStatus) -> Chapter {
        Chapter {
            id,
            title: format!("Chapter {id}"),
            outline: "draft".to_string(),
            content: "prose".to_string(),
            status,
        }
    }

    #[test]
    fn outline_chapter_body_is_the_outline() {
        let ch = chapter(1, ChapterStatus::Outline);
        assert_eq!(ch.body(), "draft");
    }

    #[test]
    fn completed_chapter_body_is_the_content() {
        let ch = chapter(1, ChapterStatus::Completed);
        assert_eq!(ch.body(), "prose");
    }

    #[test]
    fn body_mut_targets_the_same_field_as_body() {
        let mut ch = chapter(1, ChapterStatus::Outline);
        ch.body_mut().push_str(" v2");
        assert_eq!(ch.outline, "draft v2");
        assert_eq!(ch.content, "prose");
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_value(ChapterStatus::Completed).unwrap();
        assert_eq!(json, serde_json::json!("completed"));
        let back: ChapterStatus = serde_json::from_value(serde_json::json!("outline")).unwrap();
        assert_eq!(back, ChapterStatus::Outline);
    }

    #[test]
    fn placeholder_character_has_no_id() {
        let c = Character::placeholder();
        assert_eq!(c.id, None);
        assert_eq!(c.name, PLACEHOLDER_NAME);
        assert_eq!(c.role, PLACEHOLDER_ROLE);
    }

    #[test]
    fn character_lookup_ignores_unsaved_placeholders() {
        let project = Project {
            id: "p1".to_string(),
            initial_idea: "idea".to_string(),
            synopsis: String::new(),
            writing_style: String::new(),
            characters: vec![Character::placeholder()],
            chapters: vec![],
        };
        assert!(project.character(1).is_none());
        assert_eq!(project.first_character_id(), None);
    }

    #[test]
    fn project_decodes_without_writing_style_field() {
        // Payload shape of a server that predates writing_style.
        let json = serde_json::json!({
            "id": "p1",
            "initial_idea": "a scavenger is secretly a CEO",
            "synopsis": "",
            "characters": [],
            "chapters": [],
        });
        let project: Project = serde_json::from_value(json).unwrap();
        assert_eq!(project.writing_style, "");
    }

    #[test]
    fn summary_title_truncates_long_ideas() {
        let summary = ProjectSummary {
            id: "p1".to_string(),
            initial_idea: "an extremely long story idea that keeps going".to_string(),
        };
        assert_eq!(summary.title(), "an extremely long st...");
    }

    #[test]
    fn summary_title_is_char_safe_for_multibyte_ideas() {
        let summary = ProjectSummary {
            id: "p1".to_string(),
            initial_idea: "拾荒老人竟然是千亿集团的CEO？苏卡只是请老人吃了顿盒饭".to_string(),
        };
        // Must not panic on a non-ASCII boundary.
        let title = summary.title();
        assert!(title.ends_with("..."));
        assert_eq!(title.chars().count(), TITLE_PREVIEW_CHARS + 3);
    }
}
