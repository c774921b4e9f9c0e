//! `fabula-client` -- HTTP client for the story-writing API.
//!
//! [`api::StoryApi`] wraps the REST endpoints of the backend (project
//! CRUD plus chapter generation). [`service::StoryService`] is the
//! async seam the session layer programs against, so tests can swap in
//! an in-memory backend.

pub mod api;
pub mod service;

pub use api::{StoryApi, StoryApiError};
pub use service::StoryService;
