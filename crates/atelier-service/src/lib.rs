//! # atelier-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export the request/response types and services handlers work with
pub use dto::{
    AuthResponse, AuthorResponse, CategoryResponse, ContactStatsResponse,
    ContactSubmissionResponse, CreateCategoryRequest, CreateContactRequest,
    CreatePortfolioRequest, CreatePostRequest, CreateTagRequest, CreateUserRequest, HealthChecks,
    HealthResponse, LoginRequest, PaginatedResponse, PaginationMeta, PortfolioItemResponse,
    PostDetailResponse, PostStatsResponse, PostSummaryResponse, ReadinessResponse,
    RecordViewRequest, StatsResponse, SubscribeRequest, SubscriberResponse,
    SubscriberStatsResponse, TagResponse, UnsubscribeRequest, UpdateCategoryRequest,
    UpdateContactRequest, UpdatePortfolioRequest, UpdatePostRequest, UpdateSubscriberRequest,
    UpdateTagRequest, UpdateUserRequest, UserResponse,
};
pub use services::{
    AuthService, CategoryService, ContactService, PortfolioService, PostService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, StatsService, SubscriberService,
    TagService, UserService,
};
