//! # atelier-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `atelier-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Model -> entity mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use atelier_db::pool::{create_pool, DatabaseConfig};
//! use atelier_db::repositories::PgPostRepository;
//! use atelier_core::traits::PostRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::new("postgresql://localhost/atelier", 10, 1);
//!     let pool = create_pool(&config).await?;
//!     let post_repo = PgPostRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgCategoryRepository, PgContactRepository, PgPortfolioRepository, PgPostRepository,
    PgSubscriberRepository, PgTagRepository, PgUserRepository,
};
