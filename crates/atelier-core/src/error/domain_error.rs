//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    #[error("Post not found: {0}")]
    PostNotFound(Uuid),

    #[error("Category not found: {0}")]
    CategoryNotFound(Uuid),

    #[error("Tag not found: {0}")]
    TagNotFound(Uuid),

    #[error("Portfolio item not found: {0}")]
    PortfolioItemNotFound(Uuid),

    #[error("Contact submission not found: {0}")]
    ContactNotFound(Uuid),

    #[error("Subscriber not found: {0}")]
    SubscriberNotFound(Uuid),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid slug: {0}")]
    InvalidSlug(String),

    // =========================================================================
    // Authorization / Protection Errors
    // =========================================================================
    #[error("The root admin account cannot be demoted or deleted")]
    RootAdminProtected,

    #[error("You cannot delete your own account")]
    CannotDeleteSelf,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Slug already in use: {0}")]
    SlugAlreadyExists(String),

    #[error("Name already in use: {0}")]
    NameAlreadyExists(String),

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Confirmation token is invalid or already used")]
    ConfirmTokenAlreadyUsed,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::CategoryNotFound(_) => "UNKNOWN_CATEGORY",
            Self::TagNotFound(_) => "UNKNOWN_TAG",
            Self::PortfolioItemNotFound(_) => "UNKNOWN_PORTFOLIO_ITEM",
            Self::ContactNotFound(_) => "UNKNOWN_CONTACT",
            Self::SubscriberNotFound(_) => "UNKNOWN_SUBSCRIBER",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidSlug(_) => "INVALID_SLUG",

            // Authorization
            Self::RootAdminProtected => "ROOT_ADMIN_PROTECTED",
            Self::CannotDeleteSelf => "CANNOT_DELETE_SELF",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::SlugAlreadyExists(_) => "SLUG_ALREADY_EXISTS",
            Self::NameAlreadyExists(_) => "NAME_ALREADY_EXISTS",

            // Business Rules
            Self::ConfirmTokenAlreadyUsed => "CONFIRM_TOKEN_USED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a not-found error (maps to 404)
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::PostNotFound(_)
                | Self::CategoryNotFound(_)
                | Self::TagNotFound(_)
                | Self::PortfolioItemNotFound(_)
                | Self::ContactNotFound(_)
                | Self::SubscriberNotFound(_)
        )
    }

    /// Check if this is a validation error (maps to 400)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidSlug(_) | Self::CannotDeleteSelf
        )
    }

    /// Check if this is an authorization error (maps to 403)
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::RootAdminProtected)
    }

    /// Check if this is a conflict error (maps to 409)
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::EmailAlreadyExists
                | Self::SlugAlreadyExists(_)
                | Self::NameAlreadyExists(_)
                | Self::ConfirmTokenAlreadyUsed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        let err = DomainError::PostNotFound(Uuid::nil());
        assert!(err.is_not_found());
        assert!(!err.is_conflict());
        assert_eq!(err.code(), "UNKNOWN_POST");
    }

    #[test]
    fn test_conflict_classification() {
        let err = DomainError::SlugAlreadyExists("hello".to_string());
        assert!(err.is_conflict());
        assert!(!err.is_not_found());
        assert_eq!(err.code(), "SLUG_ALREADY_EXISTS");
    }

    #[test]
    fn test_root_admin_is_authorization() {
        assert!(DomainError::RootAdminProtected.is_authorization());
        assert!(!DomainError::RootAdminProtected.is_validation());
    }

    #[test]
    fn test_self_delete_is_validation() {
        assert!(DomainError::CannotDeleteSelf.is_validation());
    }
}
