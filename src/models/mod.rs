//! Data models for the guestbook

pub mod comment;
pub mod visitor;

// Re-export commonly used types
pub use comment::{Comment, CommentResponse, CreateComment, NewComment};
pub use visitor::{VisitOutcome, VisitRecord, VisitorCountResponse};
