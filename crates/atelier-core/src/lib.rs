//! # atelier-core
//!
//! Domain layer containing entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    generate_confirm_token, AuthorSummary, Category, ContactStatus, ContactSubmission,
    PortfolioItem, PortfolioStatus, Post, PostDetail, PostStatus, PostView, PostWithAuthor,
    Subscriber, SubscriberStatus, Tag, User, UserRole,
};
pub use error::DomainError;
pub use traits::{
    CategoryRepository, ContactFilter, ContactRepository, Page, PortfolioRepository, PostFilter,
    PostRepository, PostSort, PostSortColumn, RepoResult, SortDirection, SubscriberFilter,
    SubscriberRepository, TagRepository, UserRepository,
};
pub use value_objects::{slugify, Slug, SlugParseError};
