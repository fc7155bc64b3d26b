//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer, TEST_PASSWORD,
};
use atelier_core::UserRole;
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, email, _) = server.seed_admin().await.unwrap();

    let body = LoginBody {
        email: email.clone(),
        password: TEST_PASSWORD.to_string(),
    };
    let response = server.post("/api/v1/auth/login", &body).await.unwrap();
    let auth: Envelope<AuthData> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(auth.success);
    assert!(!auth.data.token.is_empty());
    assert_eq!(auth.data.token_type, "Bearer");
    assert!(auth.data.expires_in > 0);
    assert_eq!(auth.data.user.email, email);
    assert_eq!(auth.data.user.role, "admin");
}

#[tokio::test]
async fn test_login_wrong_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, email, _) = server.seed_admin().await.unwrap();

    let body = LoginBody {
        email,
        password: "not-the-password".to_string(),
    };
    let response = server.post("/api/v1/auth/login", &body).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_me_requires_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/auth/me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();

    let (_, email, token) = server.seed_admin().await.unwrap();
    let response = server.get_auth("/api/v1/auth/me", &token).await.unwrap();
    let me: Envelope<UserData> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.data.email, email);
}

#[tokio::test]
async fn test_admin_route_rejects_non_admin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, _, token) = server.seed_user(UserRole::Pending).await.unwrap();

    let response = server.get_auth("/api/v1/admin/stats", &token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Post Tests
// ============================================================================

#[tokio::test]
async fn test_public_list_hides_drafts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, _, token) = server.seed_admin().await.unwrap();

    // One draft, one published
    let draft = CreatePostBody::unique();
    let response = server
        .post_auth("/api/v1/admin/posts", &token, &draft)
        .await
        .unwrap();
    let draft: Envelope<PostData> = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(draft.data.status, "draft");

    let published = CreatePostBody::published();
    let response = server
        .post_auth("/api/v1/admin/posts", &token, &published)
        .await
        .unwrap();
    let published: Envelope<PostData> = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(published.data.status, "published");

    // Public listing only contains published posts
    let response = server.get("/api/v1/posts?limit=100").await.unwrap();
    let page: PageEnvelope<PostData> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(page.data.iter().all(|p| p.status == "published"));
    assert!(page.data.iter().any(|p| p.slug == published.data.slug));
    assert!(page.data.iter().all(|p| p.slug != draft.data.slug));

    // Public detail lookup of a draft is a 404
    let response = server
        .get(&format!("/api/v1/posts/{}", draft.data.slug))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    // Admin detail lookup sees the draft
    let response = server
        .get_auth(&format!("/api/v1/admin/posts/{}", draft.data.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_duplicate_slug_conflict() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, _, token) = server.seed_admin().await.unwrap();

    let mut body = CreatePostBody::unique();
    body.slug = Some(format!("fixed-slug-{}", unique_suffix()));

    let response = server
        .post_auth("/api/v1/admin/posts", &token, &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Same slug again
    body.title = format!("Another Title {}", unique_suffix());
    let response = server
        .post_auth("/api/v1/admin/posts", &token, &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_pagination_limits_are_clamped() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/posts?page=0&limit=500").await.unwrap();
    let page: PageEnvelope<PostData> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.pagination.page, 1);
    assert_eq!(page.pagination.limit, 100);

    let response = server.get("/api/v1/posts?page=2&limit=5").await.unwrap();
    let page: PageEnvelope<PostData> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.pagination.page, 2);
    assert_eq!(page.pagination.limit, 5);
}

#[tokio::test]
async fn test_unpublish_preserves_published_at() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, _, token) = server.seed_admin().await.unwrap();

    let body = CreatePostBody::unique();
    let response = server
        .post_auth("/api/v1/admin/posts", &token, &body)
        .await
        .unwrap();
    let post: Envelope<PostData> = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(post.data.published_at.is_none());
    let id = post.data.id;

    // Publish stamps published_at
    let response = server
        .post_auth_empty(&format!("/api/v1/admin/posts/{id}/publish"), &token)
        .await
        .unwrap();
    let published: Envelope<PostData> = assert_json(response, StatusCode::OK).await.unwrap();
    let first_published_at = published.data.published_at.clone().expect("published_at set");

    // Unpublish reverts to draft but keeps the stamp
    let response = server
        .post_auth_empty(&format!("/api/v1/admin/posts/{id}/unpublish"), &token)
        .await
        .unwrap();
    let unpublished: Envelope<PostData> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(unpublished.data.status, "draft");
    assert_eq!(
        unpublished.data.published_at.as_deref(),
        Some(first_published_at.as_str())
    );

    // Re-publishing does not move the original stamp
    let response = server
        .post_auth_empty(&format!("/api/v1/admin/posts/{id}/publish"), &token)
        .await
        .unwrap();
    let republished: Envelope<PostData> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(
        republished.data.published_at.as_deref(),
        Some(first_published_at.as_str())
    );
}

#[tokio::test]
async fn test_record_view_on_published_post() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, _, token) = server.seed_admin().await.unwrap();

    let body = CreatePostBody::published();
    let response = server
        .post_auth("/api/v1/admin/posts", &token, &body)
        .await
        .unwrap();
    let post: Envelope<PostData> = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post(
            &format!("/api/v1/posts/{}/views", post.data.slug),
            &serde_json::json!({}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

// ============================================================================
// Contact Tests
// ============================================================================

#[tokio::test]
async fn test_contact_submission_and_triage() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, _, token) = server.seed_admin().await.unwrap();

    let body = ContactBody::unique();
    let response = server.post("/api/v1/contact", &body).await.unwrap();
    let submitted: Envelope<ContactData> = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(submitted.data.status, "new");
    assert!(submitted.data.replied_at.is_none());
    let id = submitted.data.id;

    // Marking replied stamps replied_at
    let response = server
        .patch_auth(
            &format!("/api/v1/admin/contacts/{id}"),
            &token,
            &serde_json::json!({"status": "replied"}),
        )
        .await
        .unwrap();
    let replied: Envelope<ContactData> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(replied.data.status, "replied");
    assert!(replied.data.replied_at.is_some());
}

#[tokio::test]
async fn test_contact_delete_is_idempotent() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, _, token) = server.seed_admin().await.unwrap();

    let body = ContactBody::unique();
    let response = server.post("/api/v1/contact", &body).await.unwrap();
    let submitted: Envelope<ContactData> = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/api/v1/admin/contacts/{}", submitted.data.id);

    let response = server.delete_auth(&path, &token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Deleting again still succeeds
    let response = server.delete_auth(&path, &token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

// ============================================================================
// Newsletter Tests
// ============================================================================

#[tokio::test]
async fn test_newsletter_double_opt_in() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let body = SubscribeBody::unique();
    let response = server
        .post("/api/v1/newsletter/subscribe", &body)
        .await
        .unwrap();
    let subscribed: Envelope<SubscriberData> =
        assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(subscribed.data.status, "pending");

    // The token is never exposed over the API; read it from storage
    let stored = server
        .state
        .service_context()
        .subscriber_repo()
        .find_by_email(&body.email)
        .await
        .unwrap()
        .expect("subscriber exists");
    let confirm_token = stored.confirm_token.expect("pending token");

    let response = server
        .get(&format!("/api/v1/newsletter/confirm/{confirm_token}"))
        .await
        .unwrap();
    let confirmed: Envelope<SubscriberData> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(confirmed.data.status, "active");

    // The token is single-use
    let response = server
        .get(&format!("/api/v1/newsletter/confirm/{confirm_token}"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    // Subscribing again while active is a conflict
    let response = server
        .post("/api/v1/newsletter/subscribe", &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    // Unsubscribe succeeds
    let response = server
        .post(
            "/api/v1/newsletter/unsubscribe",
            &serde_json::json!({"email": body.email}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_pending_resubscribe_is_idempotent() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let body = SubscribeBody::unique();
    let response = server
        .post("/api/v1/newsletter/subscribe", &body)
        .await
        .unwrap();
    let first: Envelope<SubscriberData> = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post("/api/v1/newsletter/subscribe", &body)
        .await
        .unwrap();
    let second: Envelope<SubscriberData> =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(first.data.id, second.data.id);
    assert_eq!(second.data.status, "pending");
}

#[tokio::test]
async fn test_subscribe_source_defaults_to_blog() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/v1/newsletter/subscribe", &SubscribeBody::unique())
        .await
        .unwrap();
    let defaulted: Envelope<SubscriberData> =
        assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(defaulted.data.source, "blog");

    let response = server
        .post(
            "/api/v1/newsletter/subscribe",
            &SubscribeBody::with_source("landing"),
        )
        .await
        .unwrap();
    let custom: Envelope<SubscriberData> =
        assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(custom.data.source, "landing");
}

#[tokio::test]
async fn test_admin_subscriber_get_and_update() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, _, token) = server.seed_admin().await.unwrap();

    let response = server
        .post("/api/v1/newsletter/subscribe", &SubscribeBody::unique())
        .await
        .unwrap();
    let subscribed: Envelope<SubscriberData> =
        assert_json(response, StatusCode::CREATED).await.unwrap();
    let id = subscribed.data.id;

    let response = server
        .get_auth(&format!("/api/v1/admin/subscribers/{id}"), &token)
        .await
        .unwrap();
    let fetched: Envelope<SubscriberData> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.data.status, "pending");

    let response = server
        .patch_auth(
            &format!("/api/v1/admin/subscribers/{id}"),
            &token,
            &serde_json::json!({"status": "active"}),
        )
        .await
        .unwrap();
    let updated: Envelope<SubscriberData> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.data.status, "active");

    let response = server
        .get_auth(&format!("/api/v1/admin/subscribers/{id}"), &token)
        .await
        .unwrap();
    let fetched: Envelope<SubscriberData> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.data.status, "active");
}

// ============================================================================
// User Admin Tests
// ============================================================================

#[tokio::test]
async fn test_admin_cannot_delete_self() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (admin_id, _, token) = server.seed_admin().await.unwrap();

    let response = server
        .delete_auth(&format!("/api/v1/admin/users/{admin_id}"), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}
