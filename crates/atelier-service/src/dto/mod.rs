//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    CreateCategoryRequest, CreateContactRequest, CreatePortfolioRequest, CreatePostRequest,
    CreateTagRequest, CreateUserRequest, LoginRequest, RecordViewRequest, SubscribeRequest,
    UnsubscribeRequest, UpdateCategoryRequest, UpdateContactRequest, UpdatePortfolioRequest,
    UpdatePostRequest, UpdateSubscriberRequest, UpdateTagRequest, UpdateUserRequest,
};

// Re-export commonly used response types
pub use responses::{
    AuthResponse, AuthorResponse, CategoryResponse, ContactStatsResponse,
    ContactSubmissionResponse, HealthChecks, HealthResponse, PaginatedResponse, PaginationMeta,
    PortfolioItemResponse, PostDetailResponse, PostStatsResponse, PostSummaryResponse,
    ReadinessResponse, StatsResponse, SubscriberResponse, SubscriberStatsResponse, TagResponse,
    UserResponse,
};
