//! Shell command vocabulary and parser.
//!
//! Each UI action maps to one typed [`Command`]; the REPL dispatches on
//! the parsed value and never inspects raw input itself, keeping input
//! handling decoupled from rendering.

use fabula_core::DbId;
use fabula_session::EntryField;

/// One action the user can ask the shell to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Refresh and list the project directory.
    Projects,
    /// Create a project from an idea and open it.
    New { idea: String },
    /// Open an existing project by id.
    Open { id: String },
    /// Close the open project without saving.
    Close,
    /// Delete a project by id.
    Delete { id: String },
    /// Render the outline panel of the open project.
    Outline,
    /// Select the synopsis for editing.
    Synopsis,
    /// Select the writing style for editing.
    Style,
    /// Select a character for editing.
    Character { id: DbId },
    /// Select a chapter for editing.
    Chapter { id: DbId },
    /// Render the editor view of the active entry.
    Show,
    /// Write a value into a field of the active entry.
    Set { field: EntryField, value: String },
    /// Persist the open project.
    Save,
    /// Append a placeholder character and save.
    AddCharacter,
    /// Remove a character and save.
    DeleteCharacter { id: DbId },
    /// Generate prose for the active chapter.
    Generate,
    /// Print the command list.
    Help,
    /// Leave the shell.
    Quit,
}

/// A line that could not be turned into a [`Command`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Unknown command '{0}'. Type 'help' for the command list.")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),
}

/// Parse one non-empty input line.
pub fn parse(line: &str) -> Result<Command, ParseError> {
    let trimmed = line.trim();
    let (head, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (trimmed, ""),
    };

    match head {
        "projects" | "ls" => Ok(Command::Projects),
        "new" => {
            if rest.is_empty() {
                Err(ParseError::Usage("new <idea...>"))
            } else {
                Ok(Command::New {
                    idea: rest.to_string(),
                })
            }
        }
        "open" => one_word(rest, "open <project-id>").map(|id| Command::Open { id }),
        "close" => Ok(Command::Close),
        "delete" => one_word(rest, "delete <project-id>").map(|id| Command::Delete { id }),
        "outline" => Ok(Command::Outline),
        "synopsis" => Ok(Command::Synopsis),
        "style" => Ok(Command::Style),
        "character" => numeric_id(rest, "character <id>").map(|id| Command::Character { id }),
        "chapter" => numeric_id(rest, "chapter <id>").map(|id| Command::Chapter { id }),
        "show" => Ok(Command::Show),
        "set" => parse_set(rest),
        "save" => Ok(Command::Save),
        "add-character" => Ok(Command::AddCharacter),
        "delete-character" => {
            numeric_id(rest, "delete-character <id>").map(|id| Command::DeleteCharacter { id })
        }
        "generate" => Ok(Command::Generate),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(ParseError::Unknown(other.to_string())),
    }
}

/// Command list printed by `help`.
pub const HELP: &str = "\
Commands:
  projects                 list available projects
  new <idea...>            create a project from an idea and open it
  open <project-id>        open a project
  close                    close the open project
  delete <project-id>      delete a project
  outline                  show the outline panel
  synopsis | style         select the synopsis / writing style
  character <id>           select a character
  chapter <id>             select a chapter
  show                     show the editor view of the selection
  set <field> <value...>   edit the selection (field: text|name|role|description)
  save                     save the project
  add-character            add a placeholder character
  delete-character <id>    remove a character
  generate                 generate prose for the selected chapter
  help                     this list
  quit                     leave the shell";

fn parse_set(rest: &str) -> Result<Command, ParseError> {
    const USAGE: &str = "set <text|name|role|description> <value...>";

    let (field_word, value) = match rest.split_once(char::is_whitespace) {
        Some((field_word, value)) => (field_word, value.trim()),
        None => return Err(ParseError::Usage(USAGE)),
    };

    let field = match field_word {
        "text" => EntryField::Text,
        "name" => EntryField::Name,
        "role" => EntryField::Role,
        "description" => EntryField::Description,
        _ => return Err(ParseError::Usage(USAGE)),
    };

    if value.is_empty() {
        return Err(ParseError::Usage(USAGE));
    }

    Ok(Command::Set {
        field,
        value: value.to_string(),
    })
}

fn one_word(rest: &str, usage: &'static str) -> Result<String, ParseError> {
    let mut words = rest.split_whitespace();
    match (words.next(), words.next()) {
        (Some(word), None) => Ok(word.to_string()),
        _ => Err(ParseError::Usage(usage)),
    }
}

fn numeric_id(rest: &str, usage: &'static str) -> Result<DbId, ParseError> {
    one_word(rest, usage)?
        .parse()
        .map_err(|_| ParseError::Usage(usage))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
