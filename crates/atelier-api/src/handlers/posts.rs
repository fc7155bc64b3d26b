//! Post handlers
//!
//! Public listing/detail/view-tracking endpoints plus the authoring
//! endpoints under /admin/posts.

use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
};
use serde::Deserialize;
use uuid::Uuid;

use atelier_core::entities::PostStatus;
use atelier_core::traits::{PostFilter, PostSort, PostSortColumn, SortDirection};
use atelier_service::{
    CreatePostRequest, PostDetailResponse, PostService, PostSummaryResponse, RecordViewRequest,
    UpdatePostRequest,
};

use crate::extractors::{AuthUser, Pagination, ValidatedJson};
use crate::handlers::{client_ip, parse_id, user_agent};
use crate::response::{ApiError, ApiJson, ApiPage, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Query parameters for post listings
#[derive(Debug, Default, Deserialize)]
pub struct PostListQuery {
    pub status: Option<String>,
    pub featured: Option<bool>,
    pub author_id: Option<Uuid>,
    pub category_id: Option<Uuid>,
    pub tag_id: Option<Uuid>,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

impl PostListQuery {
    fn filter(&self) -> Result<PostFilter, ApiError> {
        let status = self
            .status
            .as_deref()
            .map(|s| {
                s.parse::<PostStatus>()
                    .map_err(|_| ApiError::invalid_query("Invalid 'status' value"))
            })
            .transpose()?;

        Ok(PostFilter {
            status,
            is_featured: self.featured,
            author_id: self.author_id,
            category_id: self.category_id,
            tag_id: self.tag_id,
            search: self.search.clone(),
        })
    }

    fn sort(&self) -> Result<PostSort, ApiError> {
        let column = match self.sort.as_deref() {
            None | Some("created_at") => PostSortColumn::CreatedAt,
            Some("published_at") => PostSortColumn::PublishedAt,
            Some("updated_at") => PostSortColumn::UpdatedAt,
            Some("title") => PostSortColumn::Title,
            Some(_) => return Err(ApiError::invalid_query("Invalid 'sort' value")),
        };
        let direction = match self.order.as_deref() {
            None | Some("desc") => SortDirection::Desc,
            Some("asc") => SortDirection::Asc,
            Some(_) => return Err(ApiError::invalid_query("Invalid 'order' value")),
        };
        Ok(PostSort { column, direction })
    }
}

/// List published posts
///
/// GET /posts
pub async fn list_posts(
    State(state): State<AppState>,
    Query(query): Query<PostListQuery>,
    pagination: Pagination,
) -> ApiResult<ApiPage<PostSummaryResponse>> {
    let mut filter = query.filter()?;
    // Public listings only ever see published posts
    filter.status = Some(PostStatus::Published);
    let sort = query.sort()?;

    let service = PostService::new(state.service_context());
    let page = service
        .list(filter, sort, pagination.page, pagination.limit)
        .await?;
    Ok(ApiPage(page))
}

/// Get a published post by slug
///
/// GET /posts/{slug}
pub async fn get_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<ApiJson<PostDetailResponse>> {
    let service = PostService::new(state.service_context());
    let response = service.get_by_slug(&slug, true).await?;
    Ok(ApiJson(response))
}

/// Record a view against a published post
///
/// POST /posts/{slug}/views
pub async fn record_view(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    headers: HeaderMap,
    body: Option<axum::Json<RecordViewRequest>>,
) -> ApiResult<NoContent> {
    let ip = client_ip(&headers);
    let agent = user_agent(&headers);
    let referrer = body.and_then(|b| b.0.referrer);

    let service = PostService::new(state.service_context());
    service
        .record_view(&slug, ip.as_deref(), agent, referrer)
        .await?;
    Ok(NoContent)
}

/// List posts with any status
///
/// GET /admin/posts
pub async fn admin_list_posts(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<PostListQuery>,
    pagination: Pagination,
) -> ApiResult<ApiPage<PostSummaryResponse>> {
    auth.require_author()?;

    let filter = query.filter()?;
    let sort = query.sort()?;

    let service = PostService::new(state.service_context());
    let page = service
        .list(filter, sort, pagination.page, pagination.limit)
        .await?;
    Ok(ApiPage(page))
}

/// Get a post by id regardless of status
///
/// GET /admin/posts/{id}
pub async fn admin_get_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<ApiJson<PostDetailResponse>> {
    auth.require_author()?;
    let id = parse_id(&id)?;

    let service = PostService::new(state.service_context());
    let response = service.get_by_id(id).await?;
    Ok(ApiJson(response))
}

/// Create a post
///
/// POST /admin/posts
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreatePostRequest>,
) -> ApiResult<Created<ApiJson<PostDetailResponse>>> {
    auth.require_author()?;

    let service = PostService::new(state.service_context());
    let response = service.create(auth.user_id, request).await?;
    Ok(Created(ApiJson(response)))
}

/// Update a post
///
/// PATCH /admin/posts/{id}
pub async fn update_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdatePostRequest>,
) -> ApiResult<ApiJson<PostDetailResponse>> {
    auth.require_author()?;
    let id = parse_id(&id)?;

    let service = PostService::new(state.service_context());
    let response = service.update(id, request).await?;
    Ok(ApiJson(response))
}

/// Publish a post
///
/// POST /admin/posts/{id}/publish
pub async fn publish_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<ApiJson<PostDetailResponse>> {
    auth.require_author()?;
    let id = parse_id(&id)?;

    let service = PostService::new(state.service_context());
    let response = service.publish(id).await?;
    Ok(ApiJson(response))
}

/// Revert a post to draft
///
/// POST /admin/posts/{id}/unpublish
pub async fn unpublish_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<ApiJson<PostDetailResponse>> {
    auth.require_author()?;
    let id = parse_id(&id)?;

    let service = PostService::new(state.service_context());
    let response = service.unpublish(id).await?;
    Ok(ApiJson(response))
}

/// Delete a post
///
/// DELETE /admin/posts/{id}
pub async fn delete_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<NoContent> {
    auth.require_author()?;
    let id = parse_id(&id)?;

    let service = PostService::new(state.service_context());
    service.delete(id).await?;
    Ok(NoContent)
}
