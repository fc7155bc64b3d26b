//! Tag entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Tag entity - free-form label attached to posts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

impl Tag {
    pub fn new(id: Uuid, name: String, slug: String) -> Self {
        Self {
            id,
            name,
            slug,
            created_at: Utc::now(),
        }
    }
}
