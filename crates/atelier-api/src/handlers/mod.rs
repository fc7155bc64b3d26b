//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod categories;
pub mod contact;
pub mod health;
pub mod newsletter;
pub mod portfolio;
pub mod posts;
pub mod stats;
pub mod tags;
pub mod users;

use axum::http::HeaderMap;
use uuid::Uuid;

use crate::response::ApiError;

/// Best-effort client IP, honoring proxy forwarding headers
fn client_ip(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// User-Agent header value, if present
fn user_agent(headers: &HeaderMap) -> Option<String> {
    headers
        .get(axum::http::header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}

/// Parse a path segment as a UUID
fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path("Invalid id format"))
}
