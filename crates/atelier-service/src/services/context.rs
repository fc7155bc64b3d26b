//! Service context - dependency container for services
//!
//! Holds all repositories and shared infrastructure needed by services.

use std::sync::Arc;

use atelier_common::auth::JwtService;
use atelier_core::traits::{
    CategoryRepository, ContactRepository, PortfolioRepository, PostRepository,
    SubscriberRepository, TagRepository, UserRepository,
};
use atelier_db::PgPool;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - JWT service for authentication
/// - The root admin email used by user-management safeguards
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    post_repo: Arc<dyn PostRepository>,
    category_repo: Arc<dyn CategoryRepository>,
    tag_repo: Arc<dyn TagRepository>,
    portfolio_repo: Arc<dyn PortfolioRepository>,
    contact_repo: Arc<dyn ContactRepository>,
    subscriber_repo: Arc<dyn SubscriberRepository>,

    // Services
    jwt_service: Arc<JwtService>,

    // The account that can never be demoted or deleted
    root_admin_email: String,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        post_repo: Arc<dyn PostRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        tag_repo: Arc<dyn TagRepository>,
        portfolio_repo: Arc<dyn PortfolioRepository>,
        contact_repo: Arc<dyn ContactRepository>,
        subscriber_repo: Arc<dyn SubscriberRepository>,
        jwt_service: Arc<JwtService>,
        root_admin_email: String,
    ) -> Self {
        Self {
            pool,
            user_repo,
            post_repo,
            category_repo,
            tag_repo,
            portfolio_repo,
            contact_repo,
            subscriber_repo,
            jwt_service,
            root_admin_email,
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the post repository
    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    /// Get the category repository
    pub fn category_repo(&self) -> &dyn CategoryRepository {
        self.category_repo.as_ref()
    }

    /// Get the tag repository
    pub fn tag_repo(&self) -> &dyn TagRepository {
        self.tag_repo.as_ref()
    }

    /// Get the portfolio repository
    pub fn portfolio_repo(&self) -> &dyn PortfolioRepository {
        self.portfolio_repo.as_ref()
    }

    /// Get the contact repository
    pub fn contact_repo(&self) -> &dyn ContactRepository {
        self.contact_repo.as_ref()
    }

    /// Get the subscriber repository
    pub fn subscriber_repo(&self) -> &dyn SubscriberRepository {
        self.subscriber_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Email of the protected root admin account
    pub fn root_admin_email(&self) -> &str {
        &self.root_admin_email
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("root_admin_email", &self.root_admin_email)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    post_repo: Option<Arc<dyn PostRepository>>,
    category_repo: Option<Arc<dyn CategoryRepository>>,
    tag_repo: Option<Arc<dyn TagRepository>>,
    portfolio_repo: Option<Arc<dyn PortfolioRepository>>,
    contact_repo: Option<Arc<dyn ContactRepository>>,
    subscriber_repo: Option<Arc<dyn SubscriberRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    root_admin_email: Option<String>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            user_repo: None,
            post_repo: None,
            category_repo: None,
            tag_repo: None,
            portfolio_repo: None,
            contact_repo: None,
            subscriber_repo: None,
            jwt_service: None,
            root_admin_email: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn category_repo(mut self, repo: Arc<dyn CategoryRepository>) -> Self {
        self.category_repo = Some(repo);
        self
    }

    pub fn tag_repo(mut self, repo: Arc<dyn TagRepository>) -> Self {
        self.tag_repo = Some(repo);
        self
    }

    pub fn portfolio_repo(mut self, repo: Arc<dyn PortfolioRepository>) -> Self {
        self.portfolio_repo = Some(repo);
        self
    }

    pub fn contact_repo(mut self, repo: Arc<dyn ContactRepository>) -> Self {
        self.contact_repo = Some(repo);
        self
    }

    pub fn subscriber_repo(mut self, repo: Arc<dyn SubscriberRepository>) -> Self {
        self.subscriber_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn root_admin_email(mut self, email: impl Into<String>) -> Self {
        self.root_admin_email = Some(email.into());
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool.ok_or_else(|| super::error::ServiceError::validation("pool is required"))?,
            self.user_repo.ok_or_else(|| super::error::ServiceError::validation("user_repo is required"))?,
            self.post_repo.ok_or_else(|| super::error::ServiceError::validation("post_repo is required"))?,
            self.category_repo.ok_or_else(|| super::error::ServiceError::validation("category_repo is required"))?,
            self.tag_repo.ok_or_else(|| super::error::ServiceError::validation("tag_repo is required"))?,
            self.portfolio_repo.ok_or_else(|| super::error::ServiceError::validation("portfolio_repo is required"))?,
            self.contact_repo.ok_or_else(|| super::error::ServiceError::validation("contact_repo is required"))?,
            self.subscriber_repo.ok_or_else(|| super::error::ServiceError::validation("subscriber_repo is required"))?,
            self.jwt_service.ok_or_else(|| super::error::ServiceError::validation("jwt_service is required"))?,
            self.root_admin_email.ok_or_else(|| super::error::ServiceError::validation("root_admin_email is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
