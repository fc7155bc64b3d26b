//! Post entity - a blog post with author, category, and tag relationships

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Category, Tag};

/// Publication status of a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Published,
    Archived,
}

impl PostStatus {
    /// String form stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Archived => "archived",
        }
    }
}

impl std::str::FromStr for PostStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            "archived" => Ok(Self::Archived),
            other => Err(format!("unknown post status: {other}")),
        }
    }
}

impl std::fmt::Display for PostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Post entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Option<Uuid>,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub cover_image: Option<String>,
    pub status: PostStatus,
    pub is_featured: bool,
    pub read_time_minutes: i32,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub seo_image: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new draft post with required fields
    pub fn new(id: Uuid, author_id: Option<Uuid>, title: String, slug: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            author_id,
            title,
            slug,
            excerpt: None,
            content,
            cover_image: None,
            status: PostStatus::Draft,
            is_featured: false,
            read_time_minutes: 5,
            seo_title: None,
            seo_description: None,
            seo_image: None,
            published_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Transition to published.
    ///
    /// `published_at` is set only on the first transition; once a post has
    /// been published the original timestamp is kept forever, including
    /// across unpublish/republish cycles.
    pub fn publish(&mut self) {
        self.status = PostStatus::Published;
        if self.published_at.is_none() {
            self.published_at = Some(Utc::now());
        }
        self.updated_at = Utc::now();
    }

    /// Transition back to draft, preserving `published_at`
    pub fn unpublish(&mut self) {
        self.status = PostStatus::Draft;
        self.updated_at = Utc::now();
    }

    #[inline]
    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published
    }
}

/// Minimal author projection joined onto post listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image: Option<String>,
}

/// Post with its joined author summary (listing shape)
#[derive(Debug, Clone)]
pub struct PostWithAuthor {
    pub post: Post,
    pub author: Option<AuthorSummary>,
}

/// Fully hydrated post: author plus category and tag lists (detail shape)
#[derive(Debug, Clone)]
pub struct PostDetail {
    pub post: Post,
    pub author: Option<AuthorSummary>,
    pub categories: Vec<Category>,
    pub tags: Vec<Tag>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> Post {
        Post::new(
            Uuid::new_v4(),
            None,
            "Hello".to_string(),
            "hello".to_string(),
            "body".to_string(),
        )
    }

    #[test]
    fn test_publish_sets_published_at_once() {
        let mut post = draft();
        assert!(post.published_at.is_none());

        post.publish();
        let first = post.published_at.expect("published_at set");

        post.unpublish();
        assert_eq!(post.status, PostStatus::Draft);
        assert_eq!(post.published_at, Some(first));

        post.publish();
        assert_eq!(post.published_at, Some(first));
    }

    #[test]
    fn test_status_round_trip() {
        for status in [PostStatus::Draft, PostStatus::Published, PostStatus::Archived] {
            assert_eq!(status.as_str().parse::<PostStatus>().unwrap(), status);
        }
        assert!("pending".parse::<PostStatus>().is_err());
    }

    #[test]
    fn test_new_post_defaults() {
        let post = draft();
        assert_eq!(post.status, PostStatus::Draft);
        assert!(!post.is_featured);
        assert_eq!(post.read_time_minutes, 5);
    }
}
