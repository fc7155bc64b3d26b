//! Slug value object - URL-safe unique identifier for content
//!
//! A slug is lowercase ASCII letters, digits, and single hyphens,
//! never leading or trailing. Distinct from the row's UUID.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Maximum slug length, matching the VARCHAR(255) columns
pub const MAX_SLUG_LEN: usize = 255;

/// Validated slug
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

/// Error parsing a slug from a string
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlugParseError {
    #[error("slug cannot be empty")]
    Empty,

    #[error("slug exceeds {MAX_SLUG_LEN} characters")]
    TooLong,

    #[error("slug contains invalid character: {0:?}")]
    InvalidCharacter(char),

    #[error("slug cannot start or end with a hyphen")]
    EdgeHyphen,
}

impl Slug {
    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the inner string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromStr for Slug {
    type Err = SlugParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(SlugParseError::Empty);
        }
        if s.len() > MAX_SLUG_LEN {
            return Err(SlugParseError::TooLong);
        }
        if s.starts_with('-') || s.ends_with('-') {
            return Err(SlugParseError::EdgeHyphen);
        }
        for c in s.chars() {
            if !(c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-') {
                return Err(SlugParseError::InvalidCharacter(c));
            }
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for Slug {
    type Error = SlugParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derive a slug from free text: lowercase, non-alphanumerics collapsed
/// to single hyphens, trimmed at the edges.
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_hyphen = true; // suppresses a leading hyphen
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
            last_hyphen = false;
        } else if !last_hyphen {
            out.push('-');
            last_hyphen = true;
        }
    }
    if out.ends_with('-') {
        out.pop();
    }
    out.truncate(MAX_SLUG_LEN);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_slug() {
        let slug: Slug = "my-first-post-2".parse().unwrap();
        assert_eq!(slug.as_str(), "my-first-post-2");
    }

    #[test]
    fn test_rejects_invalid() {
        assert_eq!("".parse::<Slug>(), Err(SlugParseError::Empty));
        assert_eq!("-lead".parse::<Slug>(), Err(SlugParseError::EdgeHyphen));
        assert_eq!("trail-".parse::<Slug>(), Err(SlugParseError::EdgeHyphen));
        assert_eq!(
            "Has Upper".parse::<Slug>(),
            Err(SlugParseError::InvalidCharacter('H'))
        );
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  Rust & Axum 101 "), "rust-axum-101");
        assert_eq!(slugify("---"), "");
        assert_eq!(slugify("Already-Valid"), "already-valid");
    }

    #[test]
    fn test_slugify_output_parses() {
        let slug = slugify("A Post: With (many) symbols?");
        assert!(slug.parse::<Slug>().is_ok());
    }
}
