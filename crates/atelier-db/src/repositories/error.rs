//! Error handling utilities for repositories

use atelier_core::error::DomainError;
use sqlx::Error as SqlxError;
use uuid::Uuid;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "user not found" error
pub fn user_not_found(id: Uuid) -> DomainError {
    DomainError::UserNotFound(id)
}

/// Create a "post not found" error
pub fn post_not_found(id: Uuid) -> DomainError {
    DomainError::PostNotFound(id)
}

/// Create a "category not found" error
pub fn category_not_found(id: Uuid) -> DomainError {
    DomainError::CategoryNotFound(id)
}

/// Create a "tag not found" error
pub fn tag_not_found(id: Uuid) -> DomainError {
    DomainError::TagNotFound(id)
}

/// Create a "portfolio item not found" error
pub fn portfolio_item_not_found(id: Uuid) -> DomainError {
    DomainError::PortfolioItemNotFound(id)
}

/// Create a "subscriber not found" error
pub fn subscriber_not_found(id: Uuid) -> DomainError {
    DomainError::SubscriberNotFound(id)
}
