//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{
    auth, categories, contact, health, newsletter, portfolio, posts, stats, tags, users,
};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(public_routes())
        .merge(auth_routes())
        .merge(admin_routes())
}

/// Public content routes
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(posts::list_posts))
        .route("/posts/:slug", get(posts::get_post))
        .route("/posts/:slug/views", post(posts::record_view))
        .route("/categories", get(categories::list_categories))
        .route("/categories/:slug", get(categories::get_category))
        .route("/tags", get(tags::list_tags))
        .route("/tags/:slug", get(tags::get_tag))
        .route("/portfolio", get(portfolio::list_items))
        .route("/portfolio/:slug", get(portfolio::get_item))
        .route("/contact", post(contact::submit))
        .route("/newsletter/subscribe", post(newsletter::subscribe))
        .route("/newsletter/confirm/:token", get(newsletter::confirm))
        .route("/newsletter/unsubscribe", post(newsletter::unsubscribe))
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(auth::login))
        .route("/auth/me", get(auth::me))
}

/// Admin routes (bearer token + role checks in handlers)
fn admin_routes() -> Router<AppState> {
    Router::new()
        // Posts
        .route("/admin/posts", get(posts::admin_list_posts))
        .route("/admin/posts", post(posts::create_post))
        .route("/admin/posts/:id", get(posts::admin_get_post))
        .route("/admin/posts/:id", patch(posts::update_post))
        .route("/admin/posts/:id", delete(posts::delete_post))
        .route("/admin/posts/:id/publish", post(posts::publish_post))
        .route("/admin/posts/:id/unpublish", post(posts::unpublish_post))
        // Categories
        .route("/admin/categories", post(categories::create_category))
        .route("/admin/categories/:id", patch(categories::update_category))
        .route("/admin/categories/:id", delete(categories::delete_category))
        // Tags
        .route("/admin/tags", post(tags::create_tag))
        .route("/admin/tags/:id", patch(tags::update_tag))
        .route("/admin/tags/:id", delete(tags::delete_tag))
        // Portfolio
        .route("/admin/portfolio", get(portfolio::admin_list_items))
        .route("/admin/portfolio", post(portfolio::create_item))
        .route("/admin/portfolio/:id", get(portfolio::admin_get_item))
        .route("/admin/portfolio/:id", patch(portfolio::update_item))
        .route("/admin/portfolio/:id", delete(portfolio::delete_item))
        // Contact inbox
        .route("/admin/contacts", get(contact::admin_list))
        .route("/admin/contacts/:id", get(contact::admin_get))
        .route("/admin/contacts/:id", patch(contact::admin_update))
        .route("/admin/contacts/:id", delete(contact::admin_delete))
        // Subscribers
        .route("/admin/subscribers", get(newsletter::admin_list))
        .route("/admin/subscribers/:id", get(newsletter::admin_get))
        .route("/admin/subscribers/:id", patch(newsletter::admin_update))
        .route("/admin/subscribers/:id", delete(newsletter::admin_delete))
        // Users
        .route("/admin/users", get(users::list_users))
        .route("/admin/users", post(users::create_user))
        .route("/admin/users/:id", get(users::get_user))
        .route("/admin/users/:id", patch(users::update_user))
        .route("/admin/users/:id", delete(users::delete_user))
        // Stats
        .route("/admin/stats", get(stats::overview))
}
