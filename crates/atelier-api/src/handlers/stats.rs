//! Dashboard statistics handler

use axum::extract::State;
use atelier_service::{StatsResponse, StatsService};

use crate::extractors::AuthUser;
use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// Aggregate counts for the admin dashboard
///
/// GET /admin/stats
pub async fn overview(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<ApiJson<StatsResponse>> {
    auth.require_admin()?;

    let service = StatsService::new(state.service_context());
    let response = service.overview().await?;
    Ok(ApiJson(response))
}
