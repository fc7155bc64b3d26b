//! Portfolio database model

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for portfolio_items table.
///
/// `tags` and `gallery` are stored as jsonb arrays of strings.
#[derive(Debug, Clone, FromRow)]
pub struct PortfolioItemModel {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub client: Option<String>,
    pub category: Option<String>,
    pub tags: Json<Vec<String>>,
    pub cover_image: Option<String>,
    pub gallery: Json<Vec<String>>,
    pub live_url: Option<String>,
    pub repo_url: Option<String>,
    pub status: String,
    pub is_featured: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
