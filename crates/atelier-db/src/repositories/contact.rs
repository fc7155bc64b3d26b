//! PostgreSQL implementation of ContactRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use atelier_core::entities::{ContactStatus, ContactSubmission};
use atelier_core::error::DomainError;
use atelier_core::traits::{ContactFilter, ContactRepository, Page, RepoResult};

use crate::models::ContactSubmissionModel;

use super::error::map_db_error;

const CONTACT_COLUMNS: &str = r"
    id, name, email, subject, message, status, ip_address, user_agent,
    metadata, replied_at, created_at
";

/// PostgreSQL implementation of ContactRepository
#[derive(Clone)]
pub struct PgContactRepository {
    pool: PgPool,
}

impl PgContactRepository {
    /// Create a new PgContactRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for PgContactRepository {
    #[instrument(skip(self))]
    async fn list(
        &self,
        filter: ContactFilter,
        page: Page,
    ) -> RepoResult<(Vec<ContactSubmission>, i64)> {
        let (rows, total) = match filter.status {
            Some(status) => {
                let total = sqlx::query_scalar::<_, i64>(
                    r"
                    SELECT COUNT(*) FROM contact_submissions WHERE status = $1
                    ",
                )
                .bind(status.as_str())
                .fetch_one(&self.pool)
                .await
                .map_err(map_db_error)?;

                let rows = sqlx::query_as::<_, ContactSubmissionModel>(&format!(
                    r"
                    SELECT {CONTACT_COLUMNS}
                    FROM contact_submissions
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
                    SELECT COUNT(*) FROM contact_submissions
                    ",
                )
                .fetch_one(&self.pool)
                .await
                .map_err(map_db_error)?;

                let rows = sqlx::query_as::<_, ContactSubmissionModel>(&format!(
                    r"
                    SELECT {CONTACT_COLUMNS}
                    FROM contact_submissions
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

        let submissions = rows
            .into_iter()
            .map(ContactSubmission::try_from)
            .collect::<RepoResult<Vec<_>>>()?;

        Ok((submissions, total))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<ContactSubmission>> {
        let result = sqlx::query_as::<_, ContactSubmissionModel>(&format!(
            r"
            SELECT {CONTACT_COLUMNS} FROM contact_submissions WHERE id = $1
            "
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(ContactSubmission::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn create(&self, submission: &ContactSubmission) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO contact_submissions (id, name, email, subject, message, status,
                                             ip_address, user_agent, metadata, replied_at, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ",
        )
        .bind(submission.id)
        .bind(&submission.name)
        .bind(&submission.email)
        .bind(&submission.subject)
        .bind(&submission.message)
        .bind(submission.status.as_str())
        .bind(&submission.ip_address)
        .bind(&submission.user_agent)
        .bind(&submission.metadata)
        .bind(submission.replied_at)
        .bind(submission.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, submission: &ContactSubmission) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE contact_submissions
            SET status = $2, replied_at = $3
            WHERE id = $1
            ",
        )
        .bind(submission.id)
        .bind(submission.status.as_str())
        .bind(submission.replied_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ContactNotFound(submission.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            DELETE FROM contact_submissions WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn count_by_status(&self, status: Option<ContactStatus>) -> RepoResult<i64> {
        let count = match status {
            Some(status) => {
                sqlx::query_scalar::<_, i64>(
                    r"
                    SELECT COUNT(*) FROM contact_submissions WHERE status = $1
                    ",
                )
                .bind(status.as_str())
                .fetch_one(&self.pool)
                .await
            }
            None => {
                sqlx::query_scalar::<_, i64>(
                    r"
                    SELECT COUNT(*) FROM contact_submissions
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
        assert_send_sync::<PgContactRepository>();
    }
}
