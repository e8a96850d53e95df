//! Comments service

use std::sync::Arc;

use validator::Validate;

use crate::{
    config::CommentsConfig,
    error::AppResult,
    models::{Comment, CreateComment, NewComment},
    repository::CommentStore,
};

#[derive(Clone)]
pub struct CommentsService {
    store: Arc<dyn CommentStore>,
    config: CommentsConfig,
}

impl CommentsService {
    pub fn new(store: Arc<dyn CommentStore>, config: CommentsConfig) -> Self {
        Self { store, config }
    }

    /// Approved comments, newest first
    pub async fn list(&self) -> AppResult<Vec<Comment>> {
        self.store.list_approved().await
    }

    /// Validate and store a new comment.
    /// Invalid input is rejected before the store is touched.
    pub async fn create(&self, data: CreateComment) -> AppResult<Comment> {
        let data = data.trimmed();
        data.validate()?;

        let comment = self
            .store
            .create(&NewComment {
                name: data.name,
                comment: data.comment,
                is_approved: self.config.auto_approve,
            })
            .await?;

        tracing::info!(id = comment.id, approved = comment.is_approved, "Comment added");
        Ok(comment)
    }
}
