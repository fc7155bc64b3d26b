//! Category handlers
//!
//! Public taxonomy lookups and admin CRUD under /admin/categories.

use axum::extract::{Path, State};
use atelier_service::{
    CategoryResponse, CategoryService, CreateCategoryRequest, UpdateCategoryRequest,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::handlers::parse_id;
use crate::response::{ApiJson, ApiResult, Created, NoContent};
use crate::state::AppState;

/// List categories with post counts
///
/// GET /categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> ApiResult<ApiJson<Vec<CategoryResponse>>> {
    let service = CategoryService::new(state.service_context());
    let response = service.list().await?;
    Ok(ApiJson(response))
}

/// Get a category by slug
///
/// GET /categories/{slug}
pub async fn get_category(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<ApiJson<CategoryResponse>> {
    let service = CategoryService::new(state.service_context());
    let response = service.get_by_slug(&slug).await?;
    Ok(ApiJson(response))
}

/// Create a category
///
/// POST /admin/categories
pub async fn create_category(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateCategoryRequest>,
) -> ApiResult<Created<ApiJson<CategoryResponse>>> {
    auth.require_admin()?;

    let service = CategoryService::new(state.service_context());
    let response = service.create(request).await?;
    Ok(Created(ApiJson(response)))
}

/// Update a category
///
/// PATCH /admin/categories/{id}
pub async fn update_category(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateCategoryRequest>,
) -> ApiResult<ApiJson<CategoryResponse>> {
    auth.require_admin()?;
    let id = parse_id(&id)?;

    let service = CategoryService::new(state.service_context());
    let response = service.update(id, request).await?;
    Ok(ApiJson(response))
}

/// Delete a category
///
/// DELETE /admin/categories/{id}
pub async fn delete_category(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<NoContent> {
    auth.require_admin()?;
    let id = parse_id(&id)?;

    let service = CategoryService::new(state.service_context());
    service.delete(id).await?;
    Ok(NoContent)
}
