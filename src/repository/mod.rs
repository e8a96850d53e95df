//! Repository layer for database operations
//!
//! Services only see the [`VisitorStore`] and [`CommentStore`] traits; the
//! Postgres repositories are the production implementations and
//! [`memory::MemoryStore`] keeps everything in process.

pub mod comments;
pub mod memory;
pub mod visitors;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{Comment, NewComment, VisitOutcome},
};

/// Storage for the visitor counter and the per-day visit records
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitorStore: Send + Sync {
    /// Insert the (identifier, date) visit record and, only if it was not
    /// already present, increment the counter in the same transaction.
    async fn record_visit(&self, identifier: &str, date: NaiveDate) -> AppResult<VisitOutcome>;

    /// Current counter value, 0 when no counter row exists
    async fn current_count(&self) -> AppResult<i64>;

    /// Check that the store is reachable
    async fn ping(&self) -> AppResult<()>;
}

/// Storage for guestbook comments
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// Approved comments, newest first
    async fn list_approved(&self) -> AppResult<Vec<Comment>>;

    async fn create(&self, data: &NewComment) -> AppResult<Comment>;
}

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    /// Shared pool, for queries that span repositories
    pub pool: Pool<Postgres>,
    pub visitors: visitors::VisitorsRepository,
    pub comments: comments::CommentsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            visitors: visitors::VisitorsRepository::new(pool.clone()),
            comments: comments::CommentsRepository::new(pool.clone()),
            pool,
        }
    }
}
