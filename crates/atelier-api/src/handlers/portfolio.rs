//! Portfolio handlers
//!
//! Public showcase endpoints and admin CRUD under /admin/portfolio.

use axum::extract::{Path, State};
use atelier_service::{
    CreatePortfolioRequest, PortfolioItemResponse, PortfolioService, UpdatePortfolioRequest,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::handlers::parse_id;
use crate::response::{ApiJson, ApiResult, Created, NoContent};
use crate::state::AppState;

/// List published portfolio items
///
/// GET /portfolio
pub async fn list_items(
    State(state): State<AppState>,
) -> ApiResult<ApiJson<Vec<PortfolioItemResponse>>> {
    let service = PortfolioService::new(state.service_context());
    let response = service.list(true).await?;
    Ok(ApiJson(response))
}

/// Get a published portfolio item by slug
///
/// GET /portfolio/{slug}
pub async fn get_item(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<ApiJson<PortfolioItemResponse>> {
    let service = PortfolioService::new(state.service_context());
    let response = service.get_by_slug(&slug, true).await?;
    Ok(ApiJson(response))
}

/// List all portfolio items regardless of status
///
/// GET /admin/portfolio
pub async fn admin_list_items(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<ApiJson<Vec<PortfolioItemResponse>>> {
    auth.require_admin()?;

    let service = PortfolioService::new(state.service_context());
    let response = service.list(false).await?;
    Ok(ApiJson(response))
}

/// Get a portfolio item by id
///
/// GET /admin/portfolio/{id}
pub async fn admin_get_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<ApiJson<PortfolioItemResponse>> {
    auth.require_admin()?;
    let id = parse_id(&id)?;

    let service = PortfolioService::new(state.service_context());
    let response = service.get_by_id(id).await?;
    Ok(ApiJson(response))
}

/// Create a portfolio item
///
/// POST /admin/portfolio
pub async fn create_item(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreatePortfolioRequest>,
) -> ApiResult<Created<ApiJson<PortfolioItemResponse>>> {
    auth.require_admin()?;

    let service = PortfolioService::new(state.service_context());
    let response = service.create(request).await?;
    Ok(Created(ApiJson(response)))
}

/// Update a portfolio item
///
/// PATCH /admin/portfolio/{id}
pub async fn update_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdatePortfolioRequest>,
) -> ApiResult<ApiJson<PortfolioItemResponse>> {
    auth.require_admin()?;
    let id = parse_id(&id)?;

    let service = PortfolioService::new(state.service_context());
    let response = service.update(id, request).await?;
    Ok(ApiJson(response))
}

/// Delete a portfolio item
///
/// DELETE /admin/portfolio/{id}
pub async fn delete_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<NoContent> {
    auth.require_admin()?;
    let id = parse_id(&id)?;

    let service = PortfolioService::new(state.service_context());
    service.delete(id).await?;
    Ok(NoContent)
}
