//! Category service

use tracing::{info, instrument};
use uuid::Uuid;

use atelier_core::entities::Category;

use crate::dto::{CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::slugs::{resolve_slug, validate_slug};

/// Category service
pub struct CategoryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CategoryService<'a> {
    /// Create a new CategoryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List categories with derived post counts
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<CategoryResponse>> {
        let rows = self.ctx.category_repo().list_with_counts().await?;
        Ok(rows.into_iter().map(CategoryResponse::from).collect())
    }

    /// Fetch a category by slug
    #[instrument(skip(self))]
    pub async fn get_by_slug(&self, slug: &str) -> ServiceResult<CategoryResponse> {
        self.ctx
            .category_repo()
            .find_by_slug(slug)
            .await?
            .map(CategoryResponse::from)
            .ok_or_else(|| ServiceError::not_found("Category", slug))
    }

    /// Create a category
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(&self, request: CreateCategoryRequest) -> ServiceResult<CategoryResponse> {
        let slug = resolve_slug(request.slug.as_deref(), &request.name)?;

        let mut category = Category::new(Uuid::new_v4(), request.name, slug);
        category.description = request.description;
        if let Some(color) = request.color {
            category.color = color;
        }
        if let Some(sort_order) = request.sort_order {
            category.sort_order = sort_order;
        }

        self.ctx.category_repo().create(&category).await?;

        info!(category_id = %category.id, slug = %category.slug, "Category created");

        Ok(CategoryResponse::from(category))
    }

    /// Update a category
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateCategoryRequest,
    ) -> ServiceResult<CategoryResponse> {
        let mut category = self
            .ctx
            .category_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Category", id.to_string()))?;

        if let Some(name) = request.name {
            category.name = name;
        }
        if let Some(slug) = request.slug {
            category.slug = validate_slug(&slug)?;
        }
        if let Some(description) = request.description {
            category.description = Some(description);
        }
        if let Some(color) = request.color {
            category.color = color;
        }
        if let Some(sort_order) = request.sort_order {
            category.sort_order = sort_order;
        }

        self.ctx.category_repo().update(&category).await?;

        Ok(CategoryResponse::from(category))
    }

    /// Delete a category; join rows cascade so posts stay intact
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        self.ctx.category_repo().delete(id).await?;
        info!(category_id = %id, "Category deleted");
        Ok(())
    }
}
