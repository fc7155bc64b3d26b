//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and most implement `Validate`
//! for input validation.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use atelier_core::entities::{ContactStatus, PortfolioStatus, PostStatus, SubscriberStatus, UserRole};

// ============================================================================
// Auth Requests
// ============================================================================

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Create user request (admin only)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: Option<String>,

    pub role: Option<UserRole>,

    pub image: Option<String>,

    #[validate(length(max = 1000, message = "Bio must be at most 1000 characters"))]
    pub bio: Option<String>,
}

/// Update user request (admin only)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    pub role: Option<UserRole>,

    pub email_verified: Option<bool>,

    pub image: Option<String>,

    #[validate(length(max = 1000, message = "Bio must be at most 1000 characters"))]
    pub bio: Option<String>,
}

// ============================================================================
// Post Requests
// ============================================================================

/// Create post request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    /// Explicit slug; derived from the title when omitted
    #[validate(length(min = 1, max = 255, message = "Slug must be 1-255 characters"))]
    pub slug: Option<String>,

    #[validate(length(max = 500, message = "Excerpt must be at most 500 characters"))]
    pub excerpt: Option<String>,

    #[validate(length(min = 1, message = "Content must not be empty"))]
    pub content: String,

    pub cover_image: Option<String>,

    pub status: Option<PostStatus>,

    pub is_featured: Option<bool>,

    #[validate(range(min = 1, max = 180, message = "Read time must be 1-180 minutes"))]
    pub read_time_minutes: Option<i32>,

    #[validate(length(max = 255, message = "SEO title must be at most 255 characters"))]
    pub seo_title: Option<String>,

    #[validate(length(max = 500, message = "SEO description must be at most 500 characters"))]
    pub seo_description: Option<String>,

    pub seo_image: Option<String>,

    #[serde(default)]
    pub category_ids: Vec<Uuid>,

    #[serde(default)]
    pub tag_ids: Vec<Uuid>,
}

/// Update post request. Absent fields are left untouched; absent id lists
/// keep the existing category/tag links.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Slug must be 1-255 characters"))]
    pub slug: Option<String>,

    #[validate(length(max = 500, message = "Excerpt must be at most 500 characters"))]
    pub excerpt: Option<String>,

    #[validate(length(min = 1, message = "Content must not be empty"))]
    pub content: Option<String>,

    pub cover_image: Option<String>,

    pub status: Option<PostStatus>,

    pub is_featured: Option<bool>,

    #[validate(range(min = 1, max = 180, message = "Read time must be 1-180 minutes"))]
    pub read_time_minutes: Option<i32>,

    #[validate(length(max = 255, message = "SEO title must be at most 255 characters"))]
    pub seo_title: Option<String>,

    #[validate(length(max = 500, message = "SEO description must be at most 500 characters"))]
    pub seo_description: Option<String>,

    pub seo_image: Option<String>,

    pub category_ids: Option<Vec<Uuid>>,

    pub tag_ids: Option<Vec<Uuid>>,
}

/// Record a public post view. All fields optional; the IP is hashed
/// before storage.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordViewRequest {
    pub referrer: Option<String>,
}

// ============================================================================
// Category Requests
// ============================================================================

/// Create category request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 255, message = "Slug must be 1-255 characters"))]
    pub slug: Option<String>,

    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,

    /// Hex color like #8B5CF6
    #[validate(length(min = 4, max = 9, message = "Color must be a hex value"))]
    pub color: Option<String>,

    pub sort_order: Option<i32>,
}

/// Update category request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Slug must be 1-255 characters"))]
    pub slug: Option<String>,

    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,

    #[validate(length(min = 4, max = 9, message = "Color must be a hex value"))]
    pub color: Option<String>,

    pub sort_order: Option<i32>,
}

// ============================================================================
// Tag Requests
// ============================================================================

/// Create tag request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTagRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 255, message = "Slug must be 1-255 characters"))]
    pub slug: Option<String>,
}

/// Update tag request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateTagRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Slug must be 1-255 characters"))]
    pub slug: Option<String>,
}

// ============================================================================
// Portfolio Requests
// ============================================================================

/// Create portfolio item request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePortfolioRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 255, message = "Slug must be 1-255 characters"))]
    pub slug: Option<String>,

    #[validate(length(max = 500, message = "Summary must be at most 500 characters"))]
    pub summary: Option<String>,

    pub content: Option<String>,

    #[validate(length(max = 200, message = "Client must be at most 200 characters"))]
    pub client: Option<String>,

    #[validate(length(max = 100, message = "Category must be at most 100 characters"))]
    pub category: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    pub cover_image: Option<String>,

    #[serde(default)]
    pub gallery: Vec<String>,

    #[validate(url(message = "Live URL must be a valid URL"))]
    pub live_url: Option<String>,

    #[validate(url(message = "Repo URL must be a valid URL"))]
    pub repo_url: Option<String>,

    pub status: Option<PortfolioStatus>,

    pub is_featured: Option<bool>,

    pub completed_at: Option<DateTime<Utc>>,
}

/// Update portfolio item request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePortfolioRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Slug must be 1-255 characters"))]
    pub slug: Option<String>,

    #[validate(length(max = 500, message = "Summary must be at most 500 characters"))]
    pub summary: Option<String>,

    pub content: Option<String>,

    #[validate(length(max = 200, message = "Client must be at most 200 characters"))]
    pub client: Option<String>,

    #[validate(length(max = 100, message = "Category must be at most 100 characters"))]
    pub category: Option<String>,

    pub tags: Option<Vec<String>>,

    pub cover_image: Option<String>,

    pub gallery: Option<Vec<String>>,

    #[validate(url(message = "Live URL must be a valid URL"))]
    pub live_url: Option<String>,

    #[validate(url(message = "Repo URL must be a valid URL"))]
    pub repo_url: Option<String>,

    pub status: Option<PortfolioStatus>,

    pub is_featured: Option<bool>,

    pub completed_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Contact Requests
// ============================================================================

/// Public contact form submission
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateContactRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 200, message = "Subject must be 1-200 characters"))]
    pub subject: String,

    #[validate(length(min = 10, max = 5000, message = "Message must be 10-5000 characters"))]
    pub message: String,

    pub metadata: Option<serde_json::Value>,
}

/// Admin status update for a contact submission
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateContactRequest {
    pub status: ContactStatus,
}

// ============================================================================
// Newsletter Requests
// ============================================================================

/// Public newsletter subscription
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubscribeRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(max = 100, message = "First name must be at most 100 characters"))]
    pub first_name: Option<String>,

    #[validate(length(max = 50, message = "Source must be at most 50 characters"))]
    pub source: Option<String>,
}

/// Admin update for a subscriber
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateSubscriberRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(max = 100, message = "First name must be at most 100 characters"))]
    pub first_name: Option<String>,

    #[validate(length(max = 50, message = "Source must be at most 50 characters"))]
    pub source: Option<String>,

    pub status: Option<SubscriberStatus>,
}

/// Public newsletter unsubscribe
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UnsubscribeRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}
