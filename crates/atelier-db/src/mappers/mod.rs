//! Model -> entity mappers
//!
//! Status columns are stored as text; conversion back to the domain enums
//! is fallible and surfaces bad rows as database errors.

mod category;
mod contact;
mod portfolio;
mod post;
mod subscriber;
mod tag;
mod user;

use std::str::FromStr;

use atelier_core::error::DomainError;

/// Parse a stored status string into its domain enum
pub(crate) fn parse_status<T>(s: &str) -> Result<T, DomainError>
where
    T: FromStr<Err = String>,
{
    s.parse().map_err(DomainError::DatabaseError)
}
