//! Domain entities - core business objects

mod category;
mod contact;
mod portfolio;
mod post;
mod post_view;
mod subscriber;
mod tag;
mod user;

pub use category::Category;
pub use contact::{ContactStatus, ContactSubmission};
pub use portfolio::{PortfolioItem, PortfolioStatus};
pub use post::{AuthorSummary, Post, PostDetail, PostStatus, PostWithAuthor};
pub use post_view::PostView;
pub use subscriber::{generate_confirm_token, Subscriber, SubscriberStatus};
pub use tag::Tag;
pub use user::{User, UserRole};
