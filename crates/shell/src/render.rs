//! Plain-text rendering of the directory, outline, and editor views.
//!
//! Pure functions from state to strings; the REPL decides when to
//! print them.

use fabula_core::story::{Project, ProjectSummary};
use fabula_session::ActiveEntry;

/// Marker prefixed to the active outline row.
const ACTIVE_MARK: &str = "*";

/// Render the project directory listing.
pub fn directory(summaries: &[ProjectSummary]) -> String {
    if summaries.is_empty() {
        return "No projects yet. Create one with: new <idea...>".to_string();
    }

    let mut out = String::from("Projects:\n");
    for summary in summaries {
        out.push_str(&format!("  {}  {}\n", summary.id, summary.title()));
    }
    out.trim_end().to_string()
}

/// Render the outline panel: synopsis and style rows, then characters
/// and chapters with the active entry marked.
pub fn outline(project: &Project, active: ActiveEntry) -> String {
    let mut out = String::new();
    out.push_str(&format!("Project: {}\n", project.summary().title()));

    out.push_str(&format!(
        "{} synopsis\n",
        mark(active == ActiveEntry::Synopsis)
    ));
    out.push_str(&format!("{} style\n", mark(active == ActiveEntry::Style)));

    out.push_str("Characters:\n");
    if project.characters.is_empty() {
        out.push_str("  (none)\n");
    }
    for character in &project.characters {
        let marked = character.id.is_some_and(|id| active == ActiveEntry::Character(id));
        let id_label = match character.id {
            Some(id) => id.to_string(),
            None => "?".to_string(),
        };
        out.push_str(&format!(
            "{}   {}  {} ({})\n",
            mark(marked),
            id_label,
            character.name,
            character.role
        ));
    }

    out.push_str("Chapters:\n");
    for chapter in &project.chapters {
        out.push_str(&format!(
            "{}   {}  {} [{}]\n",
            mark(active == ActiveEntry::Chapter(chapter.id)),
            chapter.id,
            chapter.title,
            chapter.status.label()
        ));
    }

    out.trim_end().to_string()
}

/// Render the editor view for the active entry, or `None` when nothing
/// is selected or the target vanished from the aggregate (the editor
/// stays hidden in that case).
pub fn editor(project: &Project, active: ActiveEntry) -> Option<String> {
    match active {
        ActiveEntry::None => None,
        ActiveEntry::Synopsis => Some(format!("== Synopsis ==\n{}", project.synopsis)),
        ActiveEntry::Style => Some(format!("== Writing style ==\n{}", project.writing_style)),
        ActiveEntry::Character(id) => {
            let character = project.character(id)?;
            Some(format!(
                "== Character: {} ==\nrole: {}\ndescription: {}",
                character.name, character.role, character.description
            ))
        }
        ActiveEntry::Chapter(id) => {
            let chapter = project.chapter(id)?;
            let mut view = format!(
                "== Chapter: {} [{}] ==\n{}",
                chapter.title,
                chapter.status.label(),
                chapter.body()
            );
            if !chapter.status.is_completed() {
                view.push_str("\n(run 'generate' to write this chapter)");
            }
            Some(view)
        }
    }
}

fn mark(active: bool) -> &'static str {
    if active {
        ACTIVE_MARK
    } else {
        " "
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
