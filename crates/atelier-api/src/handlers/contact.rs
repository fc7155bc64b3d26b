//! Contact submission handlers
//!
//! Public intake endpoint and the admin inbox under /admin/contacts.

use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
};
use serde::Deserialize;

use atelier_core::entities::ContactStatus;
use atelier_core::traits::ContactFilter;
use atelier_service::{
    ContactService, ContactSubmissionResponse, CreateContactRequest, UpdateContactRequest,
};

use crate::extractors::{AuthUser, Pagination, ValidatedJson};
use crate::handlers::{client_ip, parse_id, user_agent};
use crate::response::{ApiError, ApiJson, ApiPage, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Query parameters for the admin inbox
#[derive(Debug, Default, Deserialize)]
pub struct ContactListQuery {
    pub status: Option<String>,
}

impl ContactListQuery {
    fn filter(&self) -> Result<ContactFilter, ApiError> {
        let status = self
            .status
            .as_deref()
            .map(|s| {
                s.parse::<ContactStatus>()
                    .map_err(|_| ApiError::invalid_query("Invalid 'status' value"))
            })
            .transpose()?;
        Ok(ContactFilter { status })
    }
}

/// Accept a contact form submission
///
/// POST /contact
pub async fn submit(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(request): ValidatedJson<CreateContactRequest>,
) -> ApiResult<Created<ApiJson<ContactSubmissionResponse>>> {
    let ip = client_ip(&headers);
    let agent = user_agent(&headers);

    let service = ContactService::new(state.service_context());
    let response = service.submit(request, ip, agent).await?;
    Ok(Created(ApiJson(response)))
}

/// List contact submissions
///
/// GET /admin/contacts
pub async fn admin_list(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ContactListQuery>,
    pagination: Pagination,
) -> ApiResult<ApiPage<ContactSubmissionResponse>> {
    auth.require_admin()?;
    let filter = query.filter()?;

    let service = ContactService::new(state.service_context());
    let page = service
        .list(filter, pagination.page, pagination.limit)
        .await?;
    Ok(ApiPage(page))
}

/// Get a contact submission
///
/// GET /admin/contacts/{id}
pub async fn admin_get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<ApiJson<ContactSubmissionResponse>> {
    auth.require_admin()?;
    let id = parse_id(&id)?;

    let service = ContactService::new(state.service_context());
    let response = service.get(id).await?;
    Ok(ApiJson(response))
}

/// Update the triage status of a submission
///
/// PATCH /admin/contacts/{id}
pub async fn admin_update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateContactRequest>,
) -> ApiResult<ApiJson<ContactSubmissionResponse>> {
    auth.require_admin()?;
    let id = parse_id(&id)?;

    let service = ContactService::new(state.service_context());
    let response = service.update(id, request).await?;
    Ok(ApiJson(response))
}

/// Delete a contact submission
///
/// DELETE /admin/contacts/{id}
pub async fn admin_delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<NoContent> {
    auth.require_admin()?;
    let id = parse_id(&id)?;

    let service = ContactService::new(state.service_context());
    service.delete(id).await?;
    Ok(NoContent)
}
