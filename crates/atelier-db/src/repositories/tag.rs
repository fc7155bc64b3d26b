//! PostgreSQL implementation of TagRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use atelier_core::entities::Tag;
use atelier_core::error::DomainError;
use atelier_core::traits::{RepoResult, TagRepository};

use crate::models::{TagModel, TagWithCountModel};

use super::error::{map_db_error, map_unique_violation, tag_not_found};

/// PostgreSQL implementation of TagRepository
#[derive(Clone)]
pub struct PgTagRepository {
    pool: PgPool,
}

impl PgTagRepository {
    /// Create a new PgTagRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TagRepository for PgTagRepository {
    #[instrument(skip(self))]
    async fn list_with_counts(&self) -> RepoResult<Vec<(Tag, i64)>> {
        let rows = sqlx::query_as::<_, TagWithCountModel>(
            r"
            SELECT t.id, t.name, t.slug, t.created_at, COUNT(pt.post_id) AS post_count
            FROM tags t
            LEFT JOIN post_tags pt ON pt.tag_id = t.id
            GROUP BY t.id
            ORDER BY t.name
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(TagWithCountModel::into_pair).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Tag>> {
        let result = sqlx::query_as::<_, TagModel>(
            r"
            SELECT id, name, slug, created_at FROM tags WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Tag::from))
    }

    #[instrument(skip(self))]
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Tag>> {
        let result = sqlx::query_as::<_, TagModel>(
            r"
            SELECT id, name, slug, created_at FROM tags WHERE slug = $1
            ",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Tag::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, tag: &Tag) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO tags (id, name, slug, created_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(tag.id)
        .bind(&tag.name)
        .bind(&tag.slug)
        .bind(tag.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::SlugAlreadyExists(tag.slug.clone())))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, tag: &Tag) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE tags SET name = $2, slug = $3 WHERE id = $1
            ",
        )
        .bind(tag.id)
        .bind(&tag.name)
        .bind(&tag.slug)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::SlugAlreadyExists(tag.slug.clone())))?;

        if result.rows_affected() == 0 {
            return Err(tag_not_found(tag.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM tags WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(tag_not_found(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgTagRepository>();
    }
}
