//! Visitor counter service

use std::sync::Arc;

use chrono::NaiveDate;

use crate::{error::AppResult, models::VisitOutcome, repository::VisitorStore};

#[derive(Clone)]
pub struct VisitorsService {
    store: Arc<dyn VisitorStore>,
}

impl VisitorsService {
    pub fn new(store: Arc<dyn VisitorStore>) -> Self {
        Self { store }
    }

    /// Count a visit from `identifier` on `today`, at most once per day, and
    /// return the counter value as it stands afterwards.
    ///
    /// The returned value is always re-read from the store, so it includes
    /// increments made by concurrent callers. Store failures roll back and are
    /// returned as-is; nothing is retried here.
    pub async fn record_visit(&self, identifier: &str, today: NaiveDate) -> AppResult<i64> {
        match self.store.record_visit(identifier, today).await? {
            VisitOutcome::Counted => {
                tracing::debug!(client = identifier, date = %today, "Visit counted");
            }
            VisitOutcome::AlreadyCounted => {
                tracing::trace!(client = identifier, date = %today, "Visit already counted today");
            }
        }

        self.store.current_count().await
    }

    /// Current counter value (0 on a fresh store)
    pub async fn count(&self) -> AppResult<i64> {
        self.store.current_count().await
    }

    /// Check that the underlying store is reachable
    pub async fn ping(&self) -> AppResult<()> {
        self.store.ping().await
    }
}
