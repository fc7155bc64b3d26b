//! Value objects - immutable domain primitives

mod slug;

pub use slug::{slugify, Slug, SlugParseError};
