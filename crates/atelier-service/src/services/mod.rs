//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod auth;
pub mod category;
pub mod contact;
pub mod context;
pub mod error;
pub mod portfolio;
pub mod post;
mod slugs;
pub mod stats;
pub mod subscriber;
pub mod tag;
pub mod user;

// Re-export all services for convenience
pub use auth::AuthService;
pub use category::CategoryService;
pub use contact::ContactService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use portfolio::PortfolioService;
pub use post::PostService;
pub use stats::StatsService;
pub use subscriber::SubscriberService;
pub use tag::TagService;
pub use user::UserService;
