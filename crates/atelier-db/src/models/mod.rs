//! Database models - SQLx-compatible structs for PostgreSQL tables

mod category;
mod contact;
mod portfolio;
mod post;
mod subscriber;
mod tag;
mod user;

pub use category::{CategoryModel, CategoryWithCountModel};
pub use contact::ContactSubmissionModel;
pub use portfolio::PortfolioItemModel;
pub use post::{PostModel, PostWithAuthorModel};
pub use subscriber::SubscriberModel;
pub use tag::{TagModel, TagWithCountModel};
pub use user::UserModel;
