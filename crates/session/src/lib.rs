//! `fabula-session` -- project directory and editing session.
//!
//! [`directory::ProjectDirectory`] keeps the in-memory list of project
//! summaries. [`session::ProjectSession`] owns the one open project
//! aggregate and the active-entry selector that decides what the editor
//! is pointed at. [`workbench::Workbench`] ties both to a
//! [`StoryService`](fabula_client::StoryService) so callers hold a
//! single explicit object instead of ambient globals.
//!
//! The server is the sole source of truth: every successful mutation
//! replaces the local aggregate with the canonical response wholesale.
//! On failure local edits are kept so typed work survives a transient
//! network error.

pub mod active;
pub mod directory;
pub mod error;
pub mod session;
pub mod workbench;

pub use active::{ActiveEntry, EntryField};
pub use directory::ProjectDirectory;
pub use error::SessionError;
pub use session::ProjectSession;
pub use workbench::Workbench;
