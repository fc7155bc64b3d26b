//! PostgreSQL implementation of SubscriberRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use atelier_core::entities::{Subscriber, SubscriberStatus};
use atelier_core::error::DomainError;
use atelier_core::traits::{Page, RepoResult, SubscriberFilter, SubscriberRepository};

use crate::models::SubscriberModel;

use super::error::{map_db_error, map_unique_violation, subscriber_not_found};

const SUBSCRIBER_COLUMNS: &str = r"
    id, email, first_name, status, source, confirm_token, confirmed_at,
    unsubscribed_at, created_at
";

/// PostgreSQL implementation of SubscriberRepository
#[derive(Clone)]
pub struct PgSubscriberRepository {
    pool: PgPool,
}

impl PgSubscriberRepository {
    /// Create a new PgSubscriberRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubscriberRepository for PgSubscriberRepository {
    #[instrument(skip(self))]
    async fn list(
        &self,
        filter: SubscriberFilter,
        page: Page,
    ) -> RepoResult<(Vec<Subscriber>, i64)> {
        let (rows, total) = match filter.status {
            Some(status) => {
                let total = sqlx::query_scalar::<_, i64>(
                    r"
                    SELECT COUNT(*) FROM subscribers WHERE status = $1
                    ",
                )
                .bind(status.as_str())
                .fetch_one(&self.pool)
                .await
                .map_err(map_db_error)?;

                let rows = sqlx::query_as::<_, SubscriberModel>(&format!(
                    r"
                    SELECT {SUBSCRIBER_COLUMNS}
                    FROM subscribers
                    WHERE status = $1
                    ORDER BY created_at DESC
                    LIMIT $2 OFFSET $3
                    "
                ))
                .bind(status.as_str())
                .bind(page.limit)
                .bind(page.offset)
                .fetch_all(&self.pool)
                .await
                .map_err(map_db_error)?;

                (rows, total)
            }
            None => {
                let total = sqlx::query_scalar::<_, i64>(
                    r"
                    SELECT COUNT(*) FROM subscribers
                    ",
                )
                .fetch_one(&self.pool)
                .await
                .map_err(map_db_error)?;

                let rows = sqlx::query_as::<_, SubscriberModel>(&format!(
                    r"
                    SELECT {SUBSCRIBER_COLUMNS}
                    FROM subscribers
                    ORDER BY created_at DESC
                    LIMIT $1 OFFSET $2
                    "
                ))
                .bind(page.limit)
                .bind(page.offset)
                .fetch_all(&self.pool)
                .await
                .map_err(map_db_error)?;

                (rows, total)
            }
        };

        let subscribers = rows
            .into_iter()
            .map(Subscriber::try_from)
            .collect::<RepoResult<Vec<_>>>()?;

        Ok((subscribers, total))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Subscriber>> {
        let result = sqlx::query_as::<_, SubscriberModel>(&format!(
            r"
            SELECT {SUBSCRIBER_COLUMNS} FROM subscribers WHERE id = $1
            "
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Subscriber::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Subscriber>> {
        let result = sqlx::query_as::<_, SubscriberModel>(&format!(
            r"
            SELECT {SUBSCRIBER_COLUMNS} FROM subscribers WHERE email = $1
            "
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Subscriber::try_from).transpose()
    }

    #[instrument(skip(self, token))]
    async fn find_by_confirm_token(&self, token: &str) -> RepoResult<Option<Subscriber>> {
        let result = sqlx::query_as::<_, SubscriberModel>(&format!(
            r"
            SELECT {SUBSCRIBER_COLUMNS} FROM subscribers WHERE confirm_token = $1
            "
        ))
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Subscriber::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn create(&self, subscriber: &Subscriber) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO subscribers (id, email, first_name, status, source, confirm_token,
                                     confirmed_at, unsubscribed_at, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(subscriber.id)
        .bind(&subscriber.email)
        .bind(&subscriber.first_name)
        .bind(subscriber.status.as_str())
        .bind(&subscriber.source)
        .bind(&subscriber.confirm_token)
        .bind(subscriber.confirmed_at)
        .bind(subscriber.unsubscribed_at)
        .bind(subscriber.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, subscriber: &Subscriber) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE subscribers
            SET first_name = $2, status = $3, source = $4, confirm_token = $5,
                confirmed_at = $6, unsubscribed_at = $7
            WHERE id = $1
            ",
        )
        .bind(subscriber.id)
        .bind(&subscriber.first_name)
        .bind(subscriber.status.as_str())
        .bind(&subscriber.source)
        .bind(&subscriber.confirm_token)
        .bind(subscriber.confirmed_at)
        .bind(subscriber.unsubscribed_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(subscriber_not_found(subscriber.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM subscribers WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(subscriber_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count_by_status(&self, status: Option<SubscriberStatus>) -> RepoResult<i64> {
        let count = match status {
            Some(status) => {
                sqlx::query_scalar::<_, i64>(
                    r"
                    SELECT COUNT(*) FROM subscribers WHERE status = $1
                    ",
                )
                .bind(status.as_str())
                .fetch_one(&self.pool)
                .await
            }
            None => {
                sqlx::query_scalar::<_, i64>(
                    r"
                    SELECT COUNT(*) FROM subscribers
                    ",
                )
                .fetch_one(&self.pool)
                .await
            }
        }
        .map_err(map_db_error)?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgSubscriberRepository>();
    }
}
