//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{
    Category, ContactStatus, ContactSubmission, PortfolioItem, Post, PostDetail, PostStatus,
    PostView, PostWithAuthor, Subscriber, SubscriberStatus, Tag, User,
};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Query helpers
// ============================================================================

/// LIMIT/OFFSET window for paginated queries
#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: 10,
            offset: 0,
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// Whitelisted sort columns for post listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PostSortColumn {
    #[default]
    CreatedAt,
    PublishedAt,
    Title,
    UpdatedAt,
}

/// Sort key for post listings; defaults to created_at descending
#[derive(Debug, Clone, Copy, Default)]
pub struct PostSort {
    pub column: PostSortColumn,
    pub direction: SortDirection,
}

/// Predicates for post listings. All fields are optional and combined
/// with AND.
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    pub status: Option<PostStatus>,
    pub is_featured: Option<bool>,
    pub author_id: Option<Uuid>,
    pub category_id: Option<Uuid>,
    pub tag_id: Option<Uuid>,
    /// Case-insensitive substring match on title or excerpt
    pub search: Option<String>,
}

/// Predicates for contact listings
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactFilter {
    pub status: Option<ContactStatus>,
}

/// Predicates for subscriber listings
#[derive(Debug, Clone, Copy, Default)]
pub struct SubscriberFilter {
    pub status: Option<SubscriberStatus>,
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List all users, newest first
    async fn list(&self) -> RepoResult<Vec<User>>;

    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user; the hash is `None` for externally provisioned accounts
    async fn create(&self, user: &User, password_hash: Option<&str>) -> RepoResult<()>;

    /// Update an existing user (profile fields and role)
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Delete a user; posts they authored keep a null author
    async fn delete(&self, id: Uuid) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Uuid) -> RepoResult<Option<String>>;

    /// Total user count
    async fn count(&self) -> RepoResult<i64>;
}

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// List posts matching the filter with a separate total count
    async fn list(
        &self,
        filter: &PostFilter,
        sort: PostSort,
        page: Page,
    ) -> RepoResult<(Vec<PostWithAuthor>, i64)>;

    /// Find a post with author, categories, and tags by ID.
    /// `published_only` restricts the lookup to published posts.
    async fn find_by_id(&self, id: Uuid, published_only: bool) -> RepoResult<Option<PostDetail>>;

    /// Find a post with author, categories, and tags by slug
    async fn find_by_slug(&self, slug: &str, published_only: bool)
        -> RepoResult<Option<PostDetail>>;

    /// Insert a post and its join rows in one transaction
    async fn create(&self, post: &Post, category_ids: &[Uuid], tag_ids: &[Uuid]) -> RepoResult<()>;

    /// Update a post; `Some` id lists replace the existing join rows,
    /// `None` leaves them untouched. The row update and join replacement
    /// share one transaction.
    async fn update(
        &self,
        post: &Post,
        category_ids: Option<&[Uuid]>,
        tag_ids: Option<&[Uuid]>,
    ) -> RepoResult<()>;

    /// Set status to published; `published_at` is stamped only if null
    async fn publish(&self, id: Uuid) -> RepoResult<()>;

    /// Set status back to draft, preserving `published_at`
    async fn unpublish(&self, id: Uuid) -> RepoResult<()>;

    /// Delete a post; join rows and views cascade
    async fn delete(&self, id: Uuid) -> RepoResult<()>;

    /// Append a view row (analytics, write-only)
    async fn record_view(&self, view: &PostView) -> RepoResult<()>;

    /// Count posts, optionally restricted to one status
    async fn count_by_status(&self, status: Option<PostStatus>) -> RepoResult<i64>;

    /// Total recorded views across all posts
    async fn count_views(&self) -> RepoResult<i64>;
}

// ============================================================================
// Category Repository
// ============================================================================

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// List all categories with derived post counts,
    /// ordered by sort_order then name
    async fn list_with_counts(&self) -> RepoResult<Vec<(Category, i64)>>;

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Category>>;

    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Category>>;

    async fn create(&self, category: &Category) -> RepoResult<()>;

    async fn update(&self, category: &Category) -> RepoResult<()>;

    /// Delete a category; post_categories rows cascade
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Tag Repository
// ============================================================================

#[async_trait]
pub trait TagRepository: Send + Sync {
    /// List all tags with derived post counts, ordered by name
    async fn list_with_counts(&self) -> RepoResult<Vec<(Tag, i64)>>;

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Tag>>;

    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Tag>>;

    async fn create(&self, tag: &Tag) -> RepoResult<()>;

    async fn update(&self, tag: &Tag) -> RepoResult<()>;

    /// Delete a tag; post_tags rows cascade
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Portfolio Repository
// ============================================================================

#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    /// List items. Published-only listings order featured items first;
    /// admin listings are newest first.
    async fn list(&self, published_only: bool) -> RepoResult<Vec<PortfolioItem>>;

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<PortfolioItem>>;

    async fn find_by_slug(
        &self,
        slug: &str,
        published_only: bool,
    ) -> RepoResult<Option<PortfolioItem>>;

    async fn create(&self, item: &PortfolioItem) -> RepoResult<()>;

    async fn update(&self, item: &PortfolioItem) -> RepoResult<()>;

    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Contact Repository
// ============================================================================

#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// List submissions (newest first) with a separate total count
    async fn list(
        &self,
        filter: ContactFilter,
        page: Page,
    ) -> RepoResult<(Vec<ContactSubmission>, i64)>;

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<ContactSubmission>>;

    async fn create(&self, submission: &ContactSubmission) -> RepoResult<()>;

    async fn update(&self, submission: &ContactSubmission) -> RepoResult<()>;

    /// Delete a submission. Returns `false` when the row was already gone;
    /// deletion is idempotent at the handler level.
    async fn delete(&self, id: Uuid) -> RepoResult<bool>;

    /// Count submissions, optionally restricted to one status
    async fn count_by_status(&self, status: Option<ContactStatus>) -> RepoResult<i64>;
}

// ============================================================================
// Subscriber Repository
// ============================================================================

#[async_trait]
pub trait SubscriberRepository: Send + Sync {
    /// List subscribers (newest first) with a separate total count
    async fn list(
        &self,
        filter: SubscriberFilter,
        page: Page,
    ) -> RepoResult<(Vec<Subscriber>, i64)>;

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Subscriber>>;

    /// Emails are stored lowercase; lookups expect a lowercased input
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Subscriber>>;

    async fn find_by_confirm_token(&self, token: &str) -> RepoResult<Option<Subscriber>>;

    async fn create(&self, subscriber: &Subscriber) -> RepoResult<()>;

    async fn update(&self, subscriber: &Subscriber) -> RepoResult<()>;

    async fn delete(&self, id: Uuid) -> RepoResult<()>;

    /// Count subscribers, optionally restricted to one status
    async fn count_by_status(&self, status: Option<SubscriberStatus>) -> RepoResult<i64>;
}
