//! User entity - an account in the admin dashboard

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role attached to a user account
///
/// New accounts start as `Pending` until an admin promotes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Pending,
    Author,
    Admin,
}

impl UserRole {
    /// Check if this role grants admin access
    #[inline]
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Check if this role may author content (authors and admins)
    #[inline]
    pub fn can_author(&self) -> bool {
        matches!(self, Self::Author | Self::Admin)
    }

    /// String form stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Author => "author",
            Self::Admin => "admin",
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "author" => Ok(Self::Author),
            "admin" => Ok(Self::Admin),
            other => Err(format!("unknown user role: {other}")),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User entity representing a dashboard account
///
/// The password hash never leaves the repository layer; it is not a field
/// here so it cannot leak through a response DTO.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub email_verified: bool,
    pub image: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new pending user with required fields
    pub fn new(id: Uuid, name: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            email,
            role: UserRole::Pending,
            email_verified: false,
            image: None,
            bio: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Change the role
    pub fn set_role(&mut self, role: UserRole) {
        self.role = role;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_is_pending() {
        let user = User::new(Uuid::new_v4(), "Alice".to_string(), "a@b.com".to_string());
        assert_eq!(user.role, UserRole::Pending);
        assert!(!user.role.is_admin());
        assert!(!user.role.can_author());
    }

    #[test]
    fn test_role_round_trip() {
        for role in [UserRole::Pending, UserRole::Author, UserRole::Admin] {
            assert_eq!(role.as_str().parse::<UserRole>().unwrap(), role);
        }
        assert!("root".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_author_can_author() {
        assert!(UserRole::Author.can_author());
        assert!(UserRole::Admin.can_author());
        assert!(UserRole::Admin.is_admin());
        assert!(!UserRole::Author.is_admin());
    }
}
