//! Post database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for posts table
#[derive(Debug, Clone, FromRow)]
pub struct PostModel {
    pub id: Uuid,
    pub author_id: Option<Uuid>,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub cover_image: Option<String>,
    pub status: String,
    pub is_featured: bool,
    pub read_time_minutes: i32,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub seo_image: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Post row joined with its author summary columns.
///
/// The author columns are nullable because `posts.author_id` keeps a null
/// reference after the authoring user is deleted.
#[derive(Debug, Clone, FromRow)]
pub struct PostWithAuthorModel {
    pub id: Uuid,
    pub author_id: Option<Uuid>,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub cover_image: Option<String>,
    pub status: String,
    pub is_featured: bool,
    pub read_time_minutes: i32,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub seo_image: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
    pub author_image: Option<String>,
}
