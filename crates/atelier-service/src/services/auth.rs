//! Authentication service
//!
//! Handles login and current-user lookup. There is a single session token;
//! logging out is purely client-side (drop the token).

use tracing::{info, instrument, warn};
use uuid::Uuid;

use atelier_common::auth::verify_password;
use atelier_common::AppError;

use crate::dto::{AuthResponse, LoginRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Login with email and password.
    ///
    /// Unknown email, missing hash, and wrong password all surface as the
    /// same `InvalidCredentials` error so the responses are
    /// indistinguishable to a caller probing for accounts.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        let token = self
            .ctx
            .jwt_service()
            .issue_token(user.id, user.role)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        info!(user_id = %user.id, "User logged in successfully");

        Ok(AuthResponse::new(
            token,
            self.ctx.jwt_service().token_expiry(),
            UserResponse::from(&user),
        ))
    }

    /// Get the current authenticated user
    #[instrument(skip(self))]
    pub async fn me(&self, user_id: Uuid) -> ServiceResult<UserResponse> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    // Login paths are covered by the black-box integration tests.
}
