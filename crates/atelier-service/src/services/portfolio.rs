//! Portfolio service

use tracing::{info, instrument};
use uuid::Uuid;

use atelier_core::entities::PortfolioItem;

use crate::dto::{CreatePortfolioRequest, PortfolioItemResponse, UpdatePortfolioRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::slugs::{resolve_slug, validate_slug};

/// Portfolio service
pub struct PortfolioService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PortfolioService<'a> {
    /// Create a new PortfolioService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List portfolio items. Public listings see published work only,
    /// featured first.
    #[instrument(skip(self))]
    pub async fn list(&self, published_only: bool) -> ServiceResult<Vec<PortfolioItemResponse>> {
        let items = self.ctx.portfolio_repo().list(published_only).await?;
        Ok(items.into_iter().map(PortfolioItemResponse::from).collect())
    }

    /// Fetch an item by slug
    #[instrument(skip(self))]
    pub async fn get_by_slug(
        &self,
        slug: &str,
        published_only: bool,
    ) -> ServiceResult<PortfolioItemResponse> {
        self.ctx
            .portfolio_repo()
            .find_by_slug(slug, published_only)
            .await?
            .map(PortfolioItemResponse::from)
            .ok_or_else(|| ServiceError::not_found("Portfolio item", slug))
    }

    /// Fetch an item by id (admin views)
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: Uuid) -> ServiceResult<PortfolioItemResponse> {
        self.ctx
            .portfolio_repo()
            .find_by_id(id)
            .await?
            .map(PortfolioItemResponse::from)
            .ok_or_else(|| ServiceError::not_found("Portfolio item", id.to_string()))
    }

    /// Create a portfolio item
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create(
        &self,
        request: CreatePortfolioRequest,
    ) -> ServiceResult<PortfolioItemResponse> {
        let slug = resolve_slug(request.slug.as_deref(), &request.title)?;

        let mut item = PortfolioItem::new(Uuid::new_v4(), request.title, slug);
        item.summary = request.summary;
        item.content = request.content;
        item.client = request.client;
        item.category = request.category;
        item.tags = request.tags;
        item.cover_image = request.cover_image;
        item.gallery = request.gallery;
        item.live_url = request.live_url;
        item.repo_url = request.repo_url;
        if let Some(status) = request.status {
            item.status = status;
        }
        item.is_featured = request.is_featured.unwrap_or(false);
        item.completed_at = request.completed_at;

        self.ctx.portfolio_repo().create(&item).await?;

        info!(item_id = %item.id, slug = %item.slug, "Portfolio item created");

        Ok(PortfolioItemResponse::from(item))
    }

    /// Update a portfolio item
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdatePortfolioRequest,
    ) -> ServiceResult<PortfolioItemResponse> {
        let mut item = self
            .ctx
            .portfolio_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Portfolio item", id.to_string()))?;

        if let Some(title) = request.title {
            item.title = title;
        }
        if let Some(slug) = request.slug {
            item.slug = validate_slug(&slug)?;
        }
        if let Some(summary) = request.summary {
            item.summary = Some(summary);
        }
        if let Some(content) = request.content {
            item.content = Some(content);
        }
        if let Some(client) = request.client {
            item.client = Some(client);
        }
        if let Some(category) = request.category {
            item.category = Some(category);
        }
        if let Some(tags) = request.tags {
            item.tags = tags;
        }
        if let Some(cover_image) = request.cover_image {
            item.cover_image = Some(cover_image);
        }
        if let Some(gallery) = request.gallery {
            item.gallery = gallery;
        }
        if let Some(live_url) = request.live_url {
            item.live_url = Some(live_url);
        }
        if let Some(repo_url) = request.repo_url {
            item.repo_url = Some(repo_url);
        }
        if let Some(status) = request.status {
            item.status = status;
        }
        if let Some(is_featured) = request.is_featured {
            item.is_featured = is_featured;
        }
        if let Some(completed_at) = request.completed_at {
            item.completed_at = Some(completed_at);
        }

        self.ctx.portfolio_repo().update(&item).await?;

        Ok(PortfolioItemResponse::from(item))
    }

    /// Delete a portfolio item
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        self.ctx.portfolio_repo().delete(id).await?;
        info!(item_id = %id, "Portfolio item deleted");
        Ok(())
    }
}
