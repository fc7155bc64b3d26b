//! User management service
//!
//! Admin-only account management. The root admin account (matched by the
//! configured email) cannot have its role changed or be deleted, and an
//! admin cannot delete their own account.

use tracing::{info, instrument};
use uuid::Uuid;

use atelier_common::auth::hash_password;
use atelier_core::entities::User;
use atelier_core::error::DomainError;

use crate::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User management service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all users
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<UserResponse>> {
        let users = self.ctx.user_repo().list().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// Fetch a user by id
    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> ServiceResult<UserResponse> {
        self.ctx
            .user_repo()
            .find_by_id(id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| ServiceError::not_found("User", id.to_string()))
    }

    /// Create a user. The password is optional; passwordless accounts can
    /// only sign in once a credential is provisioned elsewhere.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn create(&self, request: CreateUserRequest) -> ServiceResult<UserResponse> {
        let email = request.email.trim().to_lowercase();

        if self.ctx.user_repo().email_exists(&email).await? {
            return Err(ServiceError::Domain(DomainError::EmailAlreadyExists));
        }

        let password_hash = match request.password.as_deref() {
            Some(password) => Some(hash_password(password)?),
            None => None,
        };

        let mut user = User::new(Uuid::new_v4(), request.name, email);
        if let Some(role) = request.role {
            user.set_role(role);
        }
        user.image = request.image;
        user.bio = request.bio;

        self.ctx
            .user_repo()
            .create(&user, password_hash.as_deref())
            .await?;

        info!(user_id = %user.id, role = %user.role.as_str(), "User created");

        Ok(UserResponse::from(user))
    }

    /// Update a user. Role changes are rejected for the root admin.
    #[instrument(skip(self, request))]
    pub async fn update(&self, id: Uuid, request: UpdateUserRequest) -> ServiceResult<UserResponse> {
        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", id.to_string()))?;

        if let Some(role) = request.role {
            if user.email == self.ctx.root_admin_email() && role != user.role {
                return Err(ServiceError::Domain(DomainError::RootAdminProtected));
            }
            user.set_role(role);
        }
        if let Some(name) = request.name {
            user.name = name;
        }
        if let Some(email_verified) = request.email_verified {
            user.email_verified = email_verified;
        }
        if let Some(image) = request.image {
            user.image = Some(image);
        }
        if let Some(bio) = request.bio {
            user.bio = Some(bio);
        }

        self.ctx.user_repo().update(&user).await?;

        info!(user_id = %id, "User updated");

        Ok(UserResponse::from(user))
    }

    /// Delete a user. Self-deletion and the root admin are both rejected.
    #[instrument(skip(self))]
    pub async fn delete(&self, actor_id: Uuid, id: Uuid) -> ServiceResult<()> {
        if actor_id == id {
            return Err(ServiceError::Domain(DomainError::CannotDeleteSelf));
        }

        let user = self
            .ctx
            .user_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", id.to_string()))?;

        if user.email == self.ctx.root_admin_email() {
            return Err(ServiceError::Domain(DomainError::RootAdminProtected));
        }

        self.ctx.user_repo().delete(id).await?;

        info!(user_id = %id, "User deleted");

        Ok(())
    }
}
