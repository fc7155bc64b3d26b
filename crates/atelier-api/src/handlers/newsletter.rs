//! Newsletter handlers
//!
//! Public double-opt-in endpoints and subscriber administration under
//! /admin/subscribers.

use axum::extract::{Path, Query, State};
use serde::Deserialize;

use atelier_core::entities::SubscriberStatus;
use atelier_core::traits::SubscriberFilter;
use atelier_service::{
    SubscribeRequest, SubscriberResponse, SubscriberService, UnsubscribeRequest,
    UpdateSubscriberRequest,
};

use crate::extractors::{AuthUser, Pagination, ValidatedJson};
use crate::handlers::parse_id;
use crate::response::{ApiError, ApiJson, ApiMessage, ApiPage, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Query parameters for the admin subscriber list
#[derive(Debug, Default, Deserialize)]
pub struct SubscriberListQuery {
    pub status: Option<String>,
}

impl SubscriberListQuery {
    fn filter(&self) -> Result<SubscriberFilter, ApiError> {
        let status = self
            .status
            .as_deref()
            .map(|s| {
                s.parse::<SubscriberStatus>()
                    .map_err(|_| ApiError::invalid_query("Invalid 'status' value"))
            })
            .transpose()?;
        Ok(SubscriberFilter { status })
    }
}

/// Subscribe an email address (pending until confirmed)
///
/// POST /newsletter/subscribe
pub async fn subscribe(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SubscribeRequest>,
) -> ApiResult<Created<ApiJson<SubscriberResponse>>> {
    let service = SubscriberService::new(state.service_context());
    let response = service.subscribe(request).await?;
    Ok(Created(ApiJson(response)))
}

/// Redeem a confirmation token
///
/// GET /newsletter/confirm/{token}
pub async fn confirm(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> ApiResult<ApiJson<SubscriberResponse>> {
    let service = SubscriberService::new(state.service_context());
    let response = service.confirm(&token).await?;
    Ok(ApiJson(response))
}

/// Unsubscribe an email address
///
/// POST /newsletter/unsubscribe
pub async fn unsubscribe(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<UnsubscribeRequest>,
) -> ApiResult<ApiMessage> {
    let service = SubscriberService::new(state.service_context());
    service.unsubscribe(request).await?;
    Ok(ApiMessage("Unsubscribed"))
}

/// List subscribers
///
/// GET /admin/subscribers
pub async fn admin_list(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<SubscriberListQuery>,
    pagination: Pagination,
) -> ApiResult<ApiPage<SubscriberResponse>> {
    auth.require_admin()?;
    let filter = query.filter()?;

    let service = SubscriberService::new(state.service_context());
    let page = service
        .list(filter, pagination.page, pagination.limit)
        .await?;
    Ok(ApiPage(page))
}

/// Fetch a single subscriber
///
/// GET /admin/subscribers/{id}
pub async fn admin_get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<ApiJson<SubscriberResponse>> {
    auth.require_admin()?;
    let id = parse_id(&id)?;

    let service = SubscriberService::new(state.service_context());
    let response = service.get(id).await?;
    Ok(ApiJson(response))
}

/// Update a subscriber record
///
/// PATCH /admin/subscribers/{id}
pub async fn admin_update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateSubscriberRequest>,
) -> ApiResult<ApiJson<SubscriberResponse>> {
    auth.require_admin()?;
    let id = parse_id(&id)?;

    let service = SubscriberService::new(state.service_context());
    let response = service.update(id, request).await?;
    Ok(ApiJson(response))
}

/// Delete a subscriber record
///
/// DELETE /admin/subscribers/{id}
pub async fn admin_delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<NoContent> {
    auth.require_admin()?;
    let id = parse_id(&id)?;

    let service = SubscriberService::new(state.service_context());
    service.delete(id).await?;
    Ok(NoContent)
}
