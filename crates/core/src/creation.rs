//! Project-creation limits and input validation.
//!
//! The server generates characters, synopsis, and the first chapter
//! outlines at creation time, so the only client-side inputs are the
//! idea text and the requested chapter count. Both are validated here
//! before any request is made.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Chapter count requested when the user does not specify one.
pub const DEFAULT_CHAPTER_COUNT: i64 = 5;

/// Minimum chapters a project can be created with.
pub const MIN_CHAPTER_COUNT: i64 = 1;

/// Maximum chapters a project can be created with. Matches the server's
/// bound; creating more requires editing the project afterwards.
pub const MAX_CHAPTER_COUNT: i64 = 20;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a project idea: non-empty after trimming.
pub fn validate_idea(idea: &str) -> Result<(), CoreError> {
    if idea.trim().is_empty() {
        return Err(CoreError::Validation(
            "Project idea must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validate a requested chapter count is within the allowed range.
pub fn validate_chapter_count(count: i64) -> Result<(), CoreError> {
    if !(MIN_CHAPTER_COUNT..=MAX_CHAPTER_COUNT).contains(&count) {
        return Err(CoreError::Validation(format!(
            "Chapter count must be between {MIN_CHAPTER_COUNT} and {MAX_CHAPTER_COUNT}, got {count}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
