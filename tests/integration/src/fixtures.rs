//! Test fixtures and data generators
//!
//! Provides reusable test data plus lightweight mirrors of the API's
//! response envelopes for deserialization in assertions.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

// ============================================================================
// Request payloads
// ============================================================================

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginBody {
    pub email: String,
    pub password: String,
}

/// Post creation request
#[derive(Debug, Serialize)]
pub struct CreatePostBody {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl CreatePostBody {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Test Post {suffix}"),
            slug: None,
            content: "Lorem ipsum dolor sit amet.".to_string(),
            excerpt: Some("A short excerpt".to_string()),
            status: None,
        }
    }

    pub fn published() -> Self {
        Self {
            status: Some("published".to_string()),
            ..Self::unique()
        }
    }
}

/// Contact form submission
#[derive(Debug, Serialize)]
pub struct ContactBody {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactBody {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Visitor {suffix}"),
            email: format!("visitor{suffix}@example.com"),
            subject: "Hello".to_string(),
            message: "I would like to talk about a project.".to_string(),
        }
    }
}

/// Newsletter subscribe request
#[derive(Debug, Serialize)]
pub struct SubscribeBody {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl SubscribeBody {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            email: format!("reader{suffix}@example.com"),
            first_name: Some("Reader".to_string()),
            source: None,
        }
    }

    pub fn with_source(source: &str) -> Self {
        Self {
            source: Some(source.to_string()),
            ..Self::unique()
        }
    }
}

// ============================================================================
// Response envelopes
// ============================================================================

/// Standard success envelope
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
}

/// Paginated success envelope
#[derive(Debug, Deserialize)]
pub struct PageEnvelope<T> {
    pub success: bool,
    pub data: Vec<T>,
    pub pagination: PaginationData,
}

/// Pagination metadata
#[derive(Debug, Deserialize)]
pub struct PaginationData {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}

/// Auth payload from /auth/login
#[derive(Debug, Deserialize)]
pub struct AuthData {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserData,
}

/// User payload
#[derive(Debug, Deserialize)]
pub struct UserData {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Post payload (summary and detail share these fields)
#[derive(Debug, Deserialize)]
pub struct PostData {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub status: String,
    pub published_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Subscriber payload
#[derive(Debug, Deserialize)]
pub struct SubscriberData {
    pub id: String,
    pub email: String,
    pub status: String,
    pub source: String,
}

/// Contact submission payload
#[derive(Debug, Deserialize)]
pub struct ContactData {
    pub id: String,
    pub status: String,
    pub replied_at: Option<String>,
}
