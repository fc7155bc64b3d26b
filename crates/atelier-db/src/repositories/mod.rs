//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in atelier-core.
//! Each repository handles database operations for a specific domain entity.

mod category;
mod contact;
mod error;
mod portfolio;
mod post;
mod subscriber;
mod tag;
mod user;

pub use category::PgCategoryRepository;
pub use contact::PgContactRepository;
pub use portfolio::PgPortfolioRepository;
pub use post::PgPostRepository;
pub use subscriber::PgSubscriberRepository;
pub use tag::PgTagRepository;
pub use user::PgUserRepository;
