//! PostgreSQL implementation of PostRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;
use uuid::Uuid;

use atelier_core::entities::{Category, Post, PostDetail, PostStatus, PostView, PostWithAuthor, Tag};
use atelier_core::error::DomainError;
use atelier_core::traits::{Page, PostFilter, PostRepository, PostSort, PostSortColumn, RepoResult, SortDirection};

use crate::models::{CategoryModel, PostWithAuthorModel, TagModel};

use super::error::{map_db_error, map_unique_violation, post_not_found};

const POST_WITH_AUTHOR_COLUMNS: &str = r"
    p.id, p.author_id, p.title, p.slug, p.excerpt, p.content, p.cover_image,
    p.status, p.is_featured, p.read_time_minutes, p.seo_title, p.seo_description,
    p.seo_image, p.published_at, p.created_at, p.updated_at,
    u.name AS author_name, u.email AS author_email, u.image AS author_image
";

/// PostgreSQL implementation of PostRepository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append the filter predicates to a query builder.
    /// Every predicate starts with AND; callers provide the WHERE 1=1 anchor.
    fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, filter: &PostFilter) {
        if let Some(status) = filter.status {
            builder.push(" AND p.status = ").push_bind(status.as_str());
        }
        if let Some(is_featured) = filter.is_featured {
            builder.push(" AND p.is_featured = ").push_bind(is_featured);
        }
        if let Some(author_id) = filter.author_id {
            builder.push(" AND p.author_id = ").push_bind(author_id);
        }
        if let Some(category_id) = filter.category_id {
            builder
                .push(" AND p.id IN (SELECT post_id FROM post_categories WHERE category_id = ")
                .push_bind(category_id)
                .push(")");
        }
        if let Some(tag_id) = filter.tag_id {
            builder
                .push(" AND p.id IN (SELECT post_id FROM post_tags WHERE tag_id = ")
                .push_bind(tag_id)
                .push(")");
        }
        if let Some(search) = &filter.search {
            let pattern = format!("%{search}%");
            builder
                .push(" AND (p.title ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR p.excerpt ILIKE ")
                .push_bind(pattern)
                .push(")");
        }
    }

    /// Hydrate the category and tag lists for a post row
    async fn hydrate_detail(&self, model: PostWithAuthorModel) -> RepoResult<PostDetail> {
        let categories = sqlx::query_as::<_, CategoryModel>(
            r"
            SELECT c.id, c.name, c.slug, c.description, c.color, c.sort_order, c.created_at
            FROM categories c
            JOIN post_categories pc ON pc.category_id = c.id
            WHERE pc.post_id = $1
            ORDER BY c.sort_order, c.name
            ",
        )
        .bind(model.id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let tags = sqlx::query_as::<_, TagModel>(
            r"
            SELECT t.id, t.name, t.slug, t.created_at
            FROM tags t
            JOIN post_tags pt ON pt.tag_id = t.id
            WHERE pt.post_id = $1
            ORDER BY t.name
            ",
        )
        .bind(model.id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let with_author = PostWithAuthor::try_from(model)?;

        Ok(PostDetail {
            post: with_author.post,
            author: with_author.author,
            categories: categories.into_iter().map(Category::from).collect(),
            tags: tags.into_iter().map(Tag::from).collect(),
        })
    }
}

fn sort_column(column: PostSortColumn) -> &'static str {
    match column {
        PostSortColumn::CreatedAt => "p.created_at",
        PostSortColumn::PublishedAt => "p.published_at",
        PostSortColumn::Title => "p.title",
        PostSortColumn::UpdatedAt => "p.updated_at",
    }
}

fn sort_direction(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Asc => "ASC",
        SortDirection::Desc => "DESC",
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self))]
    async fn list(
        &self,
        filter: &PostFilter,
        sort: PostSort,
        page: Page,
    ) -> RepoResult<(Vec<PostWithAuthor>, i64)> {
        let mut count_builder =
            QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM posts p WHERE 1=1");
        Self::push_filters(&mut count_builder, filter);

        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        let mut builder = QueryBuilder::<Postgres>::new(format!(
            "SELECT {POST_WITH_AUTHOR_COLUMNS} FROM posts p LEFT JOIN users u ON u.id = p.author_id WHERE 1=1"
        ));
        Self::push_filters(&mut builder, filter);

        // Sort column and direction come from whitelisted enums, never from input
        builder.push(" ORDER BY ");
        builder.push(sort_column(sort.column));
        builder.push(" ");
        builder.push(sort_direction(sort.direction));
        builder.push(" LIMIT ").push_bind(page.limit);
        builder.push(" OFFSET ").push_bind(page.offset);

        let rows = builder
            .build_query_as::<PostWithAuthorModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        let posts = rows
            .into_iter()
            .map(PostWithAuthor::try_from)
            .collect::<RepoResult<Vec<_>>>()?;

        Ok((posts, total))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid, published_only: bool) -> RepoResult<Option<PostDetail>> {
        let mut builder = QueryBuilder::<Postgres>::new(format!(
            "SELECT {POST_WITH_AUTHOR_COLUMNS} FROM posts p LEFT JOIN users u ON u.id = p.author_id WHERE p.id = "
        ));
        builder.push_bind(id);
        if published_only {
            builder.push(" AND p.status = 'published'");
        }

        let row = builder
            .build_query_as::<PostWithAuthorModel>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        match row {
            Some(model) => Ok(Some(self.hydrate_detail(model).await?)),
            None => Ok(None),
        }
    }

    #[instrument(skip(self))]
    async fn find_by_slug(
        &self,
        slug: &str,
        published_only: bool,
    ) -> RepoResult<Option<PostDetail>> {
        let mut builder = QueryBuilder::<Postgres>::new(format!(
            "SELECT {POST_WITH_AUTHOR_COLUMNS} FROM posts p LEFT JOIN users u ON u.id = p.author_id WHERE p.slug = "
        ));
        builder.push_bind(slug);
        if published_only {
            builder.push(" AND p.status = 'published'");
        }

        let row = builder
            .build_query_as::<PostWithAuthorModel>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        match row {
            Some(model) => Ok(Some(self.hydrate_detail(model).await?)),
            None => Ok(None),
        }
    }

    #[instrument(skip(self))]
    async fn create(&self, post: &Post, category_ids: &[Uuid], tag_ids: &[Uuid]) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO posts (id, author_id, title, slug, excerpt, content, cover_image, status,
                               is_featured, read_time_minutes, seo_title, seo_description, seo_image,
                               published_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            ",
        )
        .bind(post.id)
        .bind(post.author_id)
        .bind(&post.title)
        .bind(&post.slug)
        .bind(&post.excerpt)
        .bind(&post.content)
        .bind(&post.cover_image)
        .bind(post.status.as_str())
        .bind(post.is_featured)
        .bind(post.read_time_minutes)
        .bind(&post.seo_title)
        .bind(&post.seo_description)
        .bind(&post.seo_image)
        .bind(post.published_at)
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::SlugAlreadyExists(post.slug.clone())))?;

        for category_id in category_ids {
            sqlx::query(
                r"
                INSERT INTO post_categories (post_id, category_id) VALUES ($1, $2)
                ",
            )
            .bind(post.id)
            .bind(category_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        for tag_id in tag_ids {
            sqlx::query(
                r"
                INSERT INTO post_tags (post_id, tag_id) VALUES ($1, $2)
                ",
            )
            .bind(post.id)
            .bind(tag_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(
        &self,
        post: &Post,
        category_ids: Option<&[Uuid]>,
        tag_ids: Option<&[Uuid]>,
    ) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            UPDATE posts
            SET title = $2, slug = $3, excerpt = $4, content = $5, cover_image = $6,
                status = $7, is_featured = $8, read_time_minutes = $9, seo_title = $10,
                seo_description = $11, seo_image = $12, published_at = $13, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(post.id)
        .bind(&post.title)
        .bind(&post.slug)
        .bind(&post.excerpt)
        .bind(&post.content)
        .bind(&post.cover_image)
        .bind(post.status.as_str())
        .bind(post.is_featured)
        .bind(post.read_time_minutes)
        .bind(&post.seo_title)
        .bind(&post.seo_description)
        .bind(&post.seo_image)
        .bind(post.published_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::SlugAlreadyExists(post.slug.clone())))?;

        if result.rows_affected() == 0 {
            return Err(post_not_found(post.id));
        }

        if let Some(category_ids) = category_ids {
            sqlx::query(
                r"
                DELETE FROM post_categories WHERE post_id = $1
                ",
            )
            .bind(post.id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

            for category_id in category_ids {
                sqlx::query(
                    r"
                    INSERT INTO post_categories (post_id, category_id) VALUES ($1, $2)
                    ",
                )
                .bind(post.id)
                .bind(category_id)
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
            }
        }

        if let Some(tag_ids) = tag_ids {
            sqlx::query(
                r"
                DELETE FROM post_tags WHERE post_id = $1
                ",
            )
            .bind(post.id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

            for tag_id in tag_ids {
                sqlx::query(
                    r"
                    INSERT INTO post_tags (post_id, tag_id) VALUES ($1, $2)
                    ",
                )
                .bind(post.id)
                .bind(tag_id)
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
            }
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn publish(&self, id: Uuid) -> RepoResult<()> {
        // published_at is stamped only on the first transition
        let result = sqlx::query(
            r"
            UPDATE posts
            SET status = 'published', published_at = COALESCE(published_at, NOW()), updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(post_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn unpublish(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE posts
            SET status = 'draft', updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(post_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM posts WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(post_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn record_view(&self, view: &PostView) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO post_views (id, post_id, ip_hash, user_agent, referrer, viewed_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(view.id)
        .bind(view.post_id)
        .bind(&view.ip_hash)
        .bind(&view.user_agent)
        .bind(&view.referrer)
        .bind(view.viewed_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count_by_status(&self, status: Option<PostStatus>) -> RepoResult<i64> {
        let count = match status {
            Some(status) => {
                sqlx::query_scalar::<_, i64>(
                    r"
                    SELECT COUNT(*) FROM posts WHERE status = $1
                    ",
                )
                .bind(status.as_str())
                .fetch_one(&self.pool)
                .await
            }
            None => {
                sqlx::query_scalar::<_, i64>(
                    r"
                    SELECT COUNT(*) FROM posts
                    ",
                )
                .fetch_one(&self.pool)
                .await
            }
        }
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn count_views(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM post_views
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgPostRepository>();
    }

    #[test]
    fn test_sort_whitelist() {
        assert_eq!(sort_column(PostSortColumn::CreatedAt), "p.created_at");
        assert_eq!(sort_column(PostSortColumn::Title), "p.title");
        assert_eq!(sort_direction(SortDirection::Asc), "ASC");
        assert_eq!(sort_direction(SortDirection::Desc), "DESC");
    }
}
