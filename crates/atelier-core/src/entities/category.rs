//! Category entity - display grouping for posts

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Category entity
///
/// Post counts are always derived aggregates, never stored here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub color: String,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

impl Category {
    /// Create a new category with the default accent color
    pub fn new(id: Uuid, name: String, slug: String) -> Self {
        Self {
            id,
            name,
            slug,
            description: None,
            color: "#8B5CF6".to_string(),
            sort_order: 0,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_color() {
        let cat = Category::new(Uuid::new_v4(), "Rust".to_string(), "rust".to_string());
        assert_eq!(cat.color, "#8B5CF6");
        assert_eq!(cat.sort_order, 0);
    }
}
