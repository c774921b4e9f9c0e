use fabula_client::StoryApiError;
use fabula_core::CoreError;

/// Errors surfaced by directory and session operations.
///
/// Request failures ([`StoryApiError`]) pass through unchanged so the
/// UI can show the server's `detail` text verbatim.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// A domain-level error from `fabula-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A request failure from the API client.
    #[error(transparent)]
    Api(#[from] StoryApiError),

    /// The operation needs an open project and none is.
    #[error("No project is open")]
    NoOpenProject,

    /// Chapter generation was requested while the active entry is not a
    /// chapter.
    #[error("Active entry is not a chapter")]
    NotAChapter,
}
