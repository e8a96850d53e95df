//! Business logic services

pub mod comments;
pub mod visitors;

use std::sync::Arc;

use crate::{
    config::CommentsConfig,
    repository::{CommentStore, Repository, VisitorStore},
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub visitors: visitors::VisitorsService,
    pub comments: comments::CommentsService,
}

impl Services {
    /// Create all services backed by the Postgres repository
    pub fn new(repository: Repository, comments_config: CommentsConfig) -> Self {
        Self::with_stores(
            Arc::new(repository.visitors),
            Arc::new(repository.comments),
            comments_config,
        )
    }

    /// Create all services over arbitrary store implementations
    pub fn with_stores(
        visitor_store: Arc<dyn VisitorStore>,
        comment_store: Arc<dyn CommentStore>,
        comments_config: CommentsConfig,
    ) -> Self {
        Self {
            visitors: visitors::VisitorsService::new(visitor_store),
            comments: comments::CommentsService::new(comment_store, comments_config),
        }
    }
}
