//! Shared slug resolution for authoring services

use atelier_core::value_objects::{slugify, Slug};

use super::error::{ServiceError, ServiceResult};

/// Use the explicit slug when given, otherwise derive one from the text
pub(crate) fn resolve_slug(explicit: Option<&str>, text: &str) -> ServiceResult<String> {
    match explicit {
        Some(slug) => validate_slug(slug),
        None => {
            let derived = slugify(text);
            if derived.is_empty() {
                return Err(ServiceError::validation(
                    "Text does not produce a usable slug",
                ));
            }
            Ok(derived)
        }
    }
}

/// Validate a caller-provided slug
pub(crate) fn validate_slug(slug: &str) -> ServiceResult<String> {
    slug.parse::<Slug>()
        .map(Slug::into_inner)
        .map_err(|e| ServiceError::validation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_slug_prefers_explicit() {
        assert_eq!(
            resolve_slug(Some("my-slug"), "Some Title").unwrap(),
            "my-slug"
        );
        assert_eq!(resolve_slug(None, "Some Title!").unwrap(), "some-title");
        assert!(resolve_slug(None, "!!!").is_err());
        assert!(resolve_slug(Some("Bad Slug"), "title").is_err());
    }
}
