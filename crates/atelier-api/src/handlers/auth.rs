//! Authentication handlers
//!
//! Endpoints for login and current-user lookup.

use axum::extract::State;
use atelier_service::{AuthResponse, AuthService, LoginRequest, UserResponse};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// Login with email and password
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<ApiJson<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(ApiJson(response))
}

/// Get the authenticated user's profile
///
/// GET /auth/me
pub async fn me(State(state): State<AppState>, auth: AuthUser) -> ApiResult<ApiJson<UserResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.me(auth.user_id).await?;
    Ok(ApiJson(response))
}
