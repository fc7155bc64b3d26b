//! Tag handlers
//!
//! Public taxonomy lookups and admin CRUD under /admin/tags.

use axum::extract::{Path, State};
use atelier_service::{CreateTagRequest, TagResponse, TagService, UpdateTagRequest};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::handlers::parse_id;
use crate::response::{ApiJson, ApiResult, Created, NoContent};
use crate::state::AppState;

/// List tags with post counts
///
/// GET /tags
pub async fn list_tags(State(state): State<AppState>) -> ApiResult<ApiJson<Vec<TagResponse>>> {
    let service = TagService::new(state.service_context());
    let response = service.list().await?;
    Ok(ApiJson(response))
}

/// Get a tag by slug
///
/// GET /tags/{slug}
pub async fn get_tag(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<ApiJson<TagResponse>> {
    let service = TagService::new(state.service_context());
    let response = service.get_by_slug(&slug).await?;
    Ok(ApiJson(response))
}

/// Create a tag
///
/// POST /admin/tags
pub async fn create_tag(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateTagRequest>,
) -> ApiResult<Created<ApiJson<TagResponse>>> {
    auth.require_admin()?;

    let service = TagService::new(state.service_context());
    let response = service.create(request).await?;
    Ok(Created(ApiJson(response)))
}

/// Update a tag
///
/// PATCH /admin/tags/{id}
pub async fn update_tag(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateTagRequest>,
) -> ApiResult<ApiJson<TagResponse>> {
    auth.require_admin()?;
    let id = parse_id(&id)?;

    let service = TagService::new(state.service_context());
    let response = service.update(id, request).await?;
    Ok(ApiJson(response))
}

/// Delete a tag
///
/// DELETE /admin/tags/{id}
pub async fn delete_tag(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<NoContent> {
    auth.require_admin()?;
    let id = parse_id(&id)?;

    let service = TagService::new(state.service_context());
    service.delete(id).await?;
    Ok(NoContent)
}
