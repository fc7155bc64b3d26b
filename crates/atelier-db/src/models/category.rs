//! Category database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for categories table
#[derive(Debug, Clone, FromRow)]
pub struct CategoryModel {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub color: String,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

/// Category row with its derived post count
#[derive(Debug, Clone, FromRow)]
pub struct CategoryWithCountModel {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub color: String,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub post_count: i64,
}
