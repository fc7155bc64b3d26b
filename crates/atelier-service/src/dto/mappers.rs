//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use atelier_core::entities::{
    AuthorSummary, Category, ContactSubmission, PortfolioItem, PostDetail, PostWithAuthor,
    Subscriber, Tag, User,
};

use super::responses::{
    AuthorResponse, CategoryResponse, ContactSubmissionResponse, PortfolioItemResponse,
    PostDetailResponse, PostSummaryResponse, SubscriberResponse, TagResponse, UserResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            email_verified: user.email_verified,
            image: user.image.clone(),
            bio: user.bio.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<AuthorSummary> for AuthorResponse {
    fn from(author: AuthorSummary) -> Self {
        Self {
            id: author.id,
            name: author.name,
            email: author.email,
            image: author.image,
        }
    }
}

// ============================================================================
// Post Mappers
// ============================================================================

impl From<PostWithAuthor> for PostSummaryResponse {
    fn from(item: PostWithAuthor) -> Self {
        let post = item.post;
        Self {
            id: post.id,
            title: post.title,
            slug: post.slug,
            excerpt: post.excerpt,
            cover_image: post.cover_image,
            status: post.status,
            is_featured: post.is_featured,
            read_time_minutes: post.read_time_minutes,
            published_at: post.published_at,
            created_at: post.created_at,
            updated_at: post.updated_at,
            author: item.author.map(AuthorResponse::from),
        }
    }
}

impl From<PostDetail> for PostDetailResponse {
    fn from(detail: PostDetail) -> Self {
        let post = detail.post;
        Self {
            id: post.id,
            title: post.title,
            slug: post.slug,
            excerpt: post.excerpt,
            content: post.content,
            cover_image: post.cover_image,
            status: post.status,
            is_featured: post.is_featured,
            read_time_minutes: post.read_time_minutes,
            seo_title: post.seo_title,
            seo_description: post.seo_description,
            seo_image: post.seo_image,
            published_at: post.published_at,
            created_at: post.created_at,
            updated_at: post.updated_at,
            author: detail.author.map(AuthorResponse::from),
            categories: detail
                .categories
                .into_iter()
                .map(CategoryResponse::from)
                .collect(),
            tags: detail.tags.into_iter().map(TagResponse::from).collect(),
        }
    }
}

// ============================================================================
// Category / Tag Mappers
// ============================================================================

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            slug: category.slug,
            description: category.description,
            color: category.color,
            sort_order: category.sort_order,
            created_at: category.created_at,
            post_count: None,
        }
    }
}

impl From<(Category, i64)> for CategoryResponse {
    fn from((category, count): (Category, i64)) -> Self {
        let mut response = Self::from(category);
        response.post_count = Some(count);
        response
    }
}

impl From<Tag> for TagResponse {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id,
            name: tag.name,
            slug: tag.slug,
            created_at: tag.created_at,
            post_count: None,
        }
    }
}

impl From<(Tag, i64)> for TagResponse {
    fn from((tag, count): (Tag, i64)) -> Self {
        let mut response = Self::from(tag);
        response.post_count = Some(count);
        response
    }
}

// ============================================================================
// Portfolio Mappers
// ============================================================================

impl From<PortfolioItem> for PortfolioItemResponse {
    fn from(item: PortfolioItem) -> Self {
        Self {
            id: item.id,
            title: item.title,
            slug: item.slug,
            summary: item.summary,
            content: item.content,
            client: item.client,
            category: item.category,
            tags: item.tags,
            cover_image: item.cover_image,
            gallery: item.gallery,
            live_url: item.live_url,
            repo_url: item.repo_url,
            status: item.status,
            is_featured: item.is_featured,
            completed_at: item.completed_at,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

// ============================================================================
// Contact Mappers
// ============================================================================

impl From<ContactSubmission> for ContactSubmissionResponse {
    fn from(submission: ContactSubmission) -> Self {
        Self {
            id: submission.id,
            name: submission.name,
            email: submission.email,
            subject: submission.subject,
            message: submission.message,
            status: submission.status,
            ip_address: submission.ip_address,
            user_agent: submission.user_agent,
            metadata: submission.metadata,
            replied_at: submission.replied_at,
            created_at: submission.created_at,
        }
    }
}

// ============================================================================
// Newsletter Mappers
// ============================================================================

impl From<Subscriber> for SubscriberResponse {
    fn from(subscriber: Subscriber) -> Self {
        Self {
            id: subscriber.id,
            email: subscriber.email,
            first_name: subscriber.first_name,
            status: subscriber.status,
            source: subscriber.source,
            confirmed_at: subscriber.confirmed_at,
            unsubscribed_at: subscriber.unsubscribed_at,
            created_at: subscriber.created_at,
        }
    }
}
