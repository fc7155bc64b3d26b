//! Tag service

use tracing::{info, instrument};
use uuid::Uuid;

use atelier_core::entities::Tag;

use crate::dto::{CreateTagRequest, TagResponse, UpdateTagRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::slugs::{resolve_slug, validate_slug};

/// Tag service
pub struct TagService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TagService<'a> {
    /// Create a new TagService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List tags with derived post counts
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<TagResponse>> {
        let rows = self.ctx.tag_repo().list_with_counts().await?;
        Ok(rows.into_iter().map(TagResponse::from).collect())
    }

    /// Fetch a tag by slug
    #[instrument(skip(self))]
    pub async fn get_by_slug(&self, slug: &str) -> ServiceResult<TagResponse> {
        self.ctx
            .tag_repo()
            .find_by_slug(slug)
            .await?
            .map(TagResponse::from)
            .ok_or_else(|| ServiceError::not_found("Tag", slug))
    }

    /// Create a tag
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(&self, request: CreateTagRequest) -> ServiceResult<TagResponse> {
        let slug = resolve_slug(request.slug.as_deref(), &request.name)?;

        let tag = Tag::new(Uuid::new_v4(), request.name, slug);

        self.ctx.tag_repo().create(&tag).await?;

        info!(tag_id = %tag.id, slug = %tag.slug, "Tag created");

        Ok(TagResponse::from(tag))
    }

    /// Update a tag
    #[instrument(skip(self, request))]
    pub async fn update(&self, id: Uuid, request: UpdateTagRequest) -> ServiceResult<TagResponse> {
        let mut tag = self
            .ctx
            .tag_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Tag", id.to_string()))?;

        if let Some(name) = request.name {
            tag.name = name;
        }
        if let Some(slug) = request.slug {
            tag.slug = validate_slug(&slug)?;
        }

        self.ctx.tag_repo().update(&tag).await?;

        Ok(TagResponse::from(tag))
    }

    /// Delete a tag; join rows cascade so posts stay intact
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        self.ctx.tag_repo().delete(id).await?;
        info!(tag_id = %id, "Tag deleted");
        Ok(())
    }
}
