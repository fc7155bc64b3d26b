//! PostgreSQL implementation of PortfolioRepository

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use atelier_core::entities::PortfolioItem;
use atelier_core::error::DomainError;
use atelier_core::traits::{PortfolioRepository, RepoResult};

use crate::models::PortfolioItemModel;

use super::error::{map_db_error, map_unique_violation, portfolio_item_not_found};

const PORTFOLIO_COLUMNS: &str = r"
    id, title, slug, summary, content, client, category, tags, cover_image,
    gallery, live_url, repo_url, status, is_featured, completed_at, created_at, updated_at
";

/// PostgreSQL implementation of PortfolioRepository
#[derive(Clone)]
pub struct PgPortfolioRepository {
    pool: PgPool,
}

impl PgPortfolioRepository {
    /// Create a new PgPortfolioRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PortfolioRepository for PgPortfolioRepository {
    #[instrument(skip(self))]
    async fn list(&self, published_only: bool) -> RepoResult<Vec<PortfolioItem>> {
        let rows = if published_only {
            // Public listing puts featured work first
            sqlx::query_as::<_, PortfolioItemModel>(&format!(
                r"
                SELECT {PORTFOLIO_COLUMNS}
                FROM portfolio_items
                WHERE status = 'published'
                ORDER BY is_featured DESC, completed_at DESC NULLS LAST, created_at DESC
                "
            ))
            .fetch_all(&self.pool)
            .await
        } else {
            sqlx::query_as::<_, PortfolioItemModel>(&format!(
                r"
                SELECT {PORTFOLIO_COLUMNS}
                FROM portfolio_items
                ORDER BY created_at DESC
                "
            ))
            .fetch_all(&self.pool)
            .await
        }
        .map_err(map_db_error)?;

        rows.into_iter().map(PortfolioItem::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<PortfolioItem>> {
        let result = sqlx::query_as::<_, PortfolioItemModel>(&format!(
            r"
            SELECT {PORTFOLIO_COLUMNS} FROM portfolio_items WHERE id = $1
            "
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(PortfolioItem::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_slug(
        &self,
        slug: &str,
        published_only: bool,
    ) -> RepoResult<Option<PortfolioItem>> {
        let result = if published_only {
            sqlx::query_as::<_, PortfolioItemModel>(&format!(
                r"
                SELECT {PORTFOLIO_COLUMNS}
                FROM portfolio_items
                WHERE slug = $1 AND status = 'published'
                "
            ))
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
        } else {
            sqlx::query_as::<_, PortfolioItemModel>(&format!(
                r"
                SELECT {PORTFOLIO_COLUMNS} FROM portfolio_items WHERE slug = $1
                "
            ))
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
        }
        .map_err(map_db_error)?;

        result.map(PortfolioItem::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn create(&self, item: &PortfolioItem) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO portfolio_items (id, title, slug, summary, content, client, category, tags,
                                         cover_image, gallery, live_url, repo_url, status,
                                         is_featured, completed_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            ",
        )
        .bind(item.id)
        .bind(&item.title)
        .bind(&item.slug)
        .bind(&item.summary)
        .bind(&item.content)
        .bind(&item.client)
        .bind(&item.category)
        .bind(Json(&item.tags))
        .bind(&item.cover_image)
        .bind(Json(&item.gallery))
        .bind(&item.live_url)
        .bind(&item.repo_url)
        .bind(item.status.as_str())
        .bind(item.is_featured)
        .bind(item.completed_at)
        .bind(item.created_at)
        .bind(item.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::SlugAlreadyExists(item.slug.clone())))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, item: &PortfolioItem) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE portfolio_items
            SET title = $2, slug = $3, summary = $4, content = $5, client = $6, category = $7,
                tags = $8, cover_image = $9, gallery = $10, live_url = $11, repo_url = $12,
                status = $13, is_featured = $14, completed_at = $15, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(item.id)
        .bind(&item.title)
        .bind(&item.slug)
        .bind(&item.summary)
        .bind(&item.content)
        .bind(&item.client)
        .bind(&item.category)
        .bind(Json(&item.tags))
        .bind(&item.cover_image)
        .bind(Json(&item.gallery))
        .bind(&item.live_url)
        .bind(&item.repo_url)
        .bind(item.status.as_str())
        .bind(item.is_featured)
        .bind(item.completed_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::SlugAlreadyExists(item.slug.clone())))?;

        if result.rows_affected() == 0 {
            return Err(portfolio_item_not_found(item.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM portfolio_items WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(portfolio_item_not_found(id));
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
        assert_send_sync::<PgPortfolioRepository>();
    }
}
