//! User management handlers
//!
//! Admin-only account CRUD under /admin/users.

use axum::extract::{Path, State};
use atelier_service::{CreateUserRequest, UpdateUserRequest, UserResponse, UserService};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::handlers::parse_id;
use crate::response::{ApiJson, ApiResult, Created, NoContent};
use crate::state::AppState;

/// List users
///
/// GET /admin/users
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<ApiJson<Vec<UserResponse>>> {
    auth.require_admin()?;

    let service = UserService::new(state.service_context());
    let response = service.list().await?;
    Ok(ApiJson(response))
}

/// Get a user
///
/// GET /admin/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<ApiJson<UserResponse>> {
    auth.require_admin()?;
    let id = parse_id(&id)?;

    let service = UserService::new(state.service_context());
    let response = service.get(id).await?;
    Ok(ApiJson(response))
}

/// Create a user
///
/// POST /admin/users
pub async fn create_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> ApiResult<Created<ApiJson<UserResponse>>> {
    auth.require_admin()?;

    let service = UserService::new(state.service_context());
    let response = service.create(request).await?;
    Ok(Created(ApiJson(response)))
}

/// Update a user's profile or role
///
/// PATCH /admin/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<ApiJson<UserResponse>> {
    auth.require_admin()?;
    let id = parse_id(&id)?;

    let service = UserService::new(state.service_context());
    let response = service.update(id, request).await?;
    Ok(ApiJson(response))
}

/// Delete a user
///
/// DELETE /admin/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<NoContent> {
    auth.require_admin()?;
    let id = parse_id(&id)?;

    let service = UserService::new(state.service_context());
    service.delete(auth.user_id, id).await?;
    Ok(NoContent)
}
