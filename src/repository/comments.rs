//! Comments repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{Comment, NewComment},
};

use super::CommentStore;

#[derive(Clone)]
pub struct CommentsRepository {
    pool: Pool<Postgres>,
}

impl CommentsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentStore for CommentsRepository {
    async fn list_approved(&self) -> AppResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, name, comment, is_approved, created_at
            FROM visitor_comments
            WHERE is_approved = TRUE
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn create(&self, data: &NewComment) -> AppResult<Comment> {
        let row = sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO visitor_comments (name, comment, is_approved)
            VALUES ($1, $2, $3)
            RETURNING id, name, comment, is_approved, created_at
            "#,
        )
        .bind(&data.name)
        .bind(&data.comment)
        .bind(data.is_approved)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}
