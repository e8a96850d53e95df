//! Guestbook comment model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Maximum length of an author name, in characters
pub const MAX_NAME_LENGTH: usize = 100;

/// Display format for comment timestamps (e.g. "Oct 16, 2026, 01:05 PM")
const DISPLAY_FORMAT: &str = "%b %-d, %Y, %I:%M %p";

/// Stored comment record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Comment {
    pub id: i32,
    /// Author name
    pub name: String,
    /// Comment body
    pub comment: String,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}

/// Create comment request
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateComment {
    #[serde(default)]
    #[validate(
        length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"),
        does_not_contain(pattern = "\0", message = "Name must not contain NUL characters")
    )]
    pub name: String,
    #[serde(default)]
    #[validate(
        length(min = 1, message = "Comment is required"),
        does_not_contain(pattern = "\0", message = "Comment must not contain NUL characters")
    )]
    pub comment: String,
}

impl CreateComment {
    pub fn new(name: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: comment.into(),
        }
    }

    /// Strip surrounding whitespace from both fields
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            comment: self.comment.trim().to_string(),
        }
    }
}

/// Validated comment ready to be stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub name: String,
    pub comment: String,
    pub is_approved: bool,
}

/// Comment as exposed by the HTTP API
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentResponse {
    pub name: String,
    pub comment: String,
    /// Creation time, formatted for display (UTC)
    pub created_at: String,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            created_at: format_display_timestamp(&comment.created_at),
            name: comment.name,
            comment: comment.comment,
        }
    }
}

/// Format a timestamp the way the page shows it
pub fn format_display_timestamp(at: &DateTime<Utc>) -> String {
    at.format(DISPLAY_FORMAT).to_string()
}
