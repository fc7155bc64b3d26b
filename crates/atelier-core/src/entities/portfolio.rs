//! Portfolio item entity - a case study shown on the public site

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Publication status of a portfolio item (no archived state)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortfolioStatus {
    Draft,
    Published,
}

impl PortfolioStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
        }
    }
}

impl std::str::FromStr for PortfolioStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            other => Err(format!("unknown portfolio status: {other}")),
        }
    }
}

impl std::fmt::Display for PortfolioStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Portfolio item entity
///
/// `tags` and `gallery` are JSON arrays, not join tables; portfolio tags
/// are free text and unrelated to the post tag table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioItem {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub client: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub cover_image: Option<String>,
    pub gallery: Vec<String>,
    pub live_url: Option<String>,
    pub repo_url: Option<String>,
    pub status: PortfolioStatus,
    pub is_featured: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PortfolioItem {
    /// Create a new draft item with required fields
    pub fn new(id: Uuid, title: String, slug: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            slug,
            summary: None,
            content: None,
            client: None,
            category: None,
            tags: Vec::new(),
            cover_image: None,
            gallery: Vec::new(),
            live_url: None,
            repo_url: None,
            status: PortfolioStatus::Draft,
            is_featured: false,
            completed_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_published(&self) -> bool {
        self.status == PortfolioStatus::Published
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_is_draft() {
        let item = PortfolioItem::new(Uuid::new_v4(), "Site".to_string(), "site".to_string());
        assert!(!item.is_published());
        assert!(item.tags.is_empty());
        assert!(item.gallery.is_empty());
    }

    #[test]
    fn test_status_round_trip() {
        assert_eq!("draft".parse::<PortfolioStatus>().unwrap(), PortfolioStatus::Draft);
        assert_eq!(
            "published".parse::<PortfolioStatus>().unwrap(),
            PortfolioStatus::Published
        );
        assert!("archived".parse::<PortfolioStatus>().is_err());
    }
}
