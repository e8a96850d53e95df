//! Visitor counter repository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{VisitOutcome, VisitRecord},
};

use super::VisitorStore;

#[derive(Clone)]
pub struct VisitorsRepository {
    pool: Pool<Postgres>,
}

impl VisitorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VisitorStore for VisitorsRepository {
    async fn record_visit(&self, identifier: &str, date: NaiveDate) -> AppResult<VisitOutcome> {
        let record = VisitRecord::new(identifier, date);
        let mut tx = self.pool.begin().await?;

        // Concurrent inserts of the same pair block on the unique index until
        // the first transaction resolves, then take the DO NOTHING branch.
        let inserted = sqlx::query(
            r#"
            INSERT INTO visitor_ips (id, ip_address, visit_date)
            VALUES ($1, $2, $3)
            ON CONFLICT (ip_address, visit_date) DO NOTHING
            "#,
        )
        .bind(record.id)
        .bind(&record.ip_address)
        .bind(record.visit_date)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if inserted == 0 {
            tx.rollback().await?;
            return Ok(VisitOutcome::AlreadyCounted);
        }

        sqlx::query(
            r#"
            INSERT INTO visitor_counter (id, total_visitors)
            VALUES (1, 1)
            ON CONFLICT (id) DO UPDATE
            SET total_visitors = visitor_counter.total_visitors + 1
            "#,
        )
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(VisitOutcome::Counted)
    }

    async fn current_count(&self) -> AppResult<i64> {
        let count: Option<i64> =
            sqlx::query_scalar("SELECT total_visitors FROM visitor_counter WHERE id = 1")
                .fetch_optional(&self.pool)
                .await?;
        Ok(count.unwrap_or(0))
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
