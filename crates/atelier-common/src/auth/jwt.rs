//! JWT utilities for authentication
//!
//! Provides token encoding, decoding, and validation using the `jsonwebtoken` crate.
//! A single bearer token carries the principal (user id + role) with a
//! 7-day default expiry; there is no refresh-token flow.

use atelier_core::UserRole;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Role at issuance time
    pub role: UserRole,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Get the user ID as a Uuid
    ///
    /// # Errors
    /// Returns an error if the subject cannot be parsed as a UUID
    pub fn user_id(&self) -> Result<Uuid, AppError> {
        self.sub.parse::<Uuid>().map_err(|_| AppError::InvalidToken)
    }

    /// Check if the token is expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// JWT service for encoding and decoding tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_expiry: i64,
}

impl JwtService {
    /// Create a new JWT service with the given secret and expiry in seconds
    #[must_use]
    pub fn new(secret: &str, token_expiry: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            token_expiry,
        }
    }

    /// Token lifetime in seconds
    #[must_use]
    pub fn token_expiry(&self) -> i64 {
        self.token_expiry
    }

    /// Issue a signed token for a user
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue_token(&self, user_id: Uuid, role: UserRole) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            role,
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.token_expiry)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode JWT")))
    }

    /// Decode and validate a token's signature and expiry
    ///
    /// # Errors
    /// Returns an error if the token is invalid or expired
    pub fn verify_token(&self, token: &str) -> Result<Claims, AppError> {
        let validation = Validation::default();

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            }
        })?;

        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("token_expiry", &self.token_expiry)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> JwtService {
        JwtService::new("test-secret-key-that-is-long-enough", 604_800)
    }

    #[test]
    fn test_issue_and_verify() {
        let service = create_test_service();
        let user_id = Uuid::new_v4();

        let token = service.issue_token(user_id, UserRole::Admin).unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.user_id().unwrap(), user_id);
        assert_eq!(claims.role, UserRole::Admin);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_seven_day_expiry() {
        let service = create_test_service();
        let token = service
            .issue_token(Uuid::new_v4(), UserRole::Author)
            .unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.exp - claims.iat, 604_800);
    }

    #[test]
    fn test_rejects_garbage_token() {
        let service = create_test_service();
        assert!(matches!(
            service.verify_token("not-a-jwt"),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn test_rejects_wrong_secret() {
        let service = create_test_service();
        let other = JwtService::new("a-completely-different-secret", 604_800);

        let token = service
            .issue_token(Uuid::new_v4(), UserRole::Pending)
            .unwrap();
        assert!(other.verify_token(&token).is_err());
    }

    #[test]
    fn test_rejects_expired_token() {
        // Expiry must be further back than the decoder's 60s leeway.
        let service = JwtService::new("test-secret-key-that-is-long-enough", -300);
        let token = service
            .issue_token(Uuid::new_v4(), UserRole::Admin)
            .unwrap();
        assert!(matches!(
            service.verify_token(&token),
            Err(AppError::TokenExpired) | Err(AppError::InvalidToken)
        ));
    }
}
