//! Post service
//!
//! Listing, lookup, authoring, publish/unpublish, and view recording.

use sha2::{Digest, Sha256};
use tracing::{info, instrument};
use uuid::Uuid;

use atelier_core::entities::{Post, PostStatus, PostView};
use atelier_core::traits::{Page, PostFilter, PostSort};

use crate::dto::{
    CreatePostRequest, PaginatedResponse, PostDetailResponse, PostSummaryResponse,
    UpdatePostRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::slugs::{resolve_slug, validate_slug};

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List posts. Callers decide the filter; public handlers force
    /// `status = published` before calling.
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        filter: PostFilter,
        sort: PostSort,
        page: i64,
        limit: i64,
    ) -> ServiceResult<PaginatedResponse<PostSummaryResponse>> {
        let window = Page {
            limit,
            offset: (page - 1) * limit,
        };

        let (posts, total) = self.ctx.post_repo().list(&filter, sort, window).await?;

        Ok(PaginatedResponse::new(
            posts.into_iter().map(PostSummaryResponse::from).collect(),
            page,
            limit,
            total,
        ))
    }

    /// Fetch a post by slug; `published_only` restricts public lookups
    #[instrument(skip(self))]
    pub async fn get_by_slug(
        &self,
        slug: &str,
        published_only: bool,
    ) -> ServiceResult<PostDetailResponse> {
        self.ctx
            .post_repo()
            .find_by_slug(slug, published_only)
            .await?
            .map(PostDetailResponse::from)
            .ok_or_else(|| ServiceError::not_found("Post", slug))
    }

    /// Fetch a post by id (admin views, never restricted by status)
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: Uuid) -> ServiceResult<PostDetailResponse> {
        self.ctx
            .post_repo()
            .find_by_id(id, false)
            .await?
            .map(PostDetailResponse::from)
            .ok_or_else(|| ServiceError::not_found("Post", id.to_string()))
    }

    /// Create a post. The slug defaults to a slugified title; creating
    /// directly in published state stamps `published_at`.
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create(
        &self,
        author_id: Uuid,
        request: CreatePostRequest,
    ) -> ServiceResult<PostDetailResponse> {
        let slug = resolve_slug(request.slug.as_deref(), &request.title)?;

        let mut post = Post::new(
            Uuid::new_v4(),
            Some(author_id),
            request.title,
            slug,
            request.content,
        );
        post.excerpt = request.excerpt;
        post.cover_image = request.cover_image;
        post.is_featured = request.is_featured.unwrap_or(false);
        if let Some(minutes) = request.read_time_minutes {
            post.read_time_minutes = minutes;
        }
        post.seo_title = request.seo_title;
        post.seo_description = request.seo_description;
        post.seo_image = request.seo_image;

        match request.status {
            Some(PostStatus::Published) => post.publish(),
            Some(status) => post.status = status,
            None => {}
        }

        self.ctx
            .post_repo()
            .create(&post, &request.category_ids, &request.tag_ids)
            .await?;

        info!(post_id = %post.id, slug = %post.slug, "Post created");

        self.get_by_id(post.id).await
    }

    /// Update a post. Only present fields change; the row update and any
    /// category/tag replacement happen in one transaction.
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdatePostRequest,
    ) -> ServiceResult<PostDetailResponse> {
        let detail = self
            .ctx
            .post_repo()
            .find_by_id(id, false)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", id.to_string()))?;

        let mut post = detail.post;

        if let Some(title) = request.title {
            post.title = title;
        }
        if let Some(slug) = request.slug {
            post.slug = validate_slug(&slug)?;
        }
        if let Some(excerpt) = request.excerpt {
            post.excerpt = Some(excerpt);
        }
        if let Some(content) = request.content {
            post.content = content;
        }
        if let Some(cover_image) = request.cover_image {
            post.cover_image = Some(cover_image);
        }
        if let Some(is_featured) = request.is_featured {
            post.is_featured = is_featured;
        }
        if let Some(minutes) = request.read_time_minutes {
            post.read_time_minutes = minutes;
        }
        if let Some(seo_title) = request.seo_title {
            post.seo_title = Some(seo_title);
        }
        if let Some(seo_description) = request.seo_description {
            post.seo_description = Some(seo_description);
        }
        if let Some(seo_image) = request.seo_image {
            post.seo_image = Some(seo_image);
        }
        match request.status {
            Some(PostStatus::Published) => post.publish(),
            Some(status) => post.status = status,
            None => {}
        }

        self.ctx
            .post_repo()
            .update(&post, request.category_ids.as_deref(), request.tag_ids.as_deref())
            .await?;

        self.get_by_id(id).await
    }

    /// Publish a post. Idempotent; `published_at` is stamped only on the
    /// first transition.
    #[instrument(skip(self))]
    pub async fn publish(&self, id: Uuid) -> ServiceResult<PostDetailResponse> {
        self.ctx.post_repo().publish(id).await?;
        info!(post_id = %id, "Post published");
        self.get_by_id(id).await
    }

    /// Revert a post to draft, keeping its original `published_at`
    #[instrument(skip(self))]
    pub async fn unpublish(&self, id: Uuid) -> ServiceResult<PostDetailResponse> {
        self.ctx.post_repo().unpublish(id).await?;
        info!(post_id = %id, "Post unpublished");
        self.get_by_id(id).await
    }

    /// Delete a post; join rows and recorded views cascade
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        self.ctx.post_repo().delete(id).await?;
        info!(post_id = %id, "Post deleted");
        Ok(())
    }

    /// Record a view against a published post. The viewer IP is hashed
    /// with SHA-256 before storage; the raw address is never kept.
    #[instrument(skip(self, ip))]
    pub async fn record_view(
        &self,
        slug: &str,
        ip: Option<&str>,
        user_agent: Option<String>,
        referrer: Option<String>,
    ) -> ServiceResult<()> {
        let detail = self
            .ctx
            .post_repo()
            .find_by_slug(slug, true)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", slug))?;

        let mut view = PostView::new(Uuid::new_v4(), detail.post.id);
        view.ip_hash = ip.map(hash_ip);
        view.user_agent = user_agent;
        view.referrer = referrer;

        self.ctx.post_repo().record_view(&view).await?;

        Ok(())
    }
}

/// SHA-256 hex digest of a viewer IP
fn hash_ip(ip: &str) -> String {
    let digest = Sha256::digest(ip.as_bytes());
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_ip_is_hex_sha256() {
        let hash = hash_ip("203.0.113.7");
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(hash, hash_ip("203.0.113.7"));
        assert_ne!(hash, hash_ip("203.0.113.8"));
    }
}
