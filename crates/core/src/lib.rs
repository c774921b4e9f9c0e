//! `fabula-core` -- domain model for the story-writing client.
//!
//! Defines the project aggregate ([`story::Project`] with its nested
//! characters and chapters), the wire types exchanged with the story
//! API, creation-request validation, and the shared [`error::CoreError`]
//! type used across the workspace.

pub mod creation;
pub mod error;
pub mod story;
pub mod types;

pub use error::CoreError;
pub use types::DbId;
