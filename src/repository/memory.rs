//! In-process store
//!
//! Keeps the counter, visit records and comments behind a single mutex. The
//! visit-record set plays the role of the unique index: the insert and the
//! increment happen under the same lock, so they land together or not at all.

use std::{
    collections::HashSet,
    sync::{Mutex, MutexGuard},
};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};

use crate::{
    error::{AppError, AppResult},
    models::{Comment, NewComment, VisitOutcome},
};

use super::{CommentStore, VisitorStore};

#[derive(Default)]
struct State {
    /// `None` until the first counted visit
    counter: Option<i64>,
    visits: HashSet<(String, NaiveDate)>,
    comments: Vec<Comment>,
    next_comment_id: i32,
}

#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, State>> {
        self.state
            .lock()
            .map_err(|_| AppError::Internal("memory store lock poisoned".to_string()))
    }
}

#[async_trait]
impl VisitorStore for MemoryStore {
    async fn record_visit(&self, identifier: &str, date: NaiveDate) -> AppResult<VisitOutcome> {
        let mut state = self.lock()?;

        if !state.visits.insert((identifier.to_string(), date)) {
            return Ok(VisitOutcome::AlreadyCounted);
        }

        *state.counter.get_or_insert(0) += 1;
        Ok(VisitOutcome::Counted)
    }

    async fn current_count(&self) -> AppResult<i64> {
        Ok(self.lock()?.counter.unwrap_or(0))
    }

    async fn ping(&self) -> AppResult<()> {
        self.lock().map(|_| ())
    }
}

#[async_trait]
impl CommentStore for MemoryStore {
    async fn list_approved(&self) -> AppResult<Vec<Comment>> {
        let state = self.lock()?;

        let mut comments: Vec<Comment> = state
            .comments
            .iter()
            .filter(|c| c.is_approved)
            .cloned()
            .collect();
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(comments)
    }

    async fn create(&self, data: &NewComment) -> AppResult<Comment> {
        let mut state = self.lock()?;

        state.next_comment_id += 1;
        let comment = Comment {
            id: state.next_comment_id,
            name: data.name.clone(),
            comment: data.comment.clone(),
            is_approved: data.is_approved,
            created_at: Utc::now(),
        };
        state.comments.push(comment.clone());
        Ok(comment)
    }
}
