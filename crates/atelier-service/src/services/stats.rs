//! Dashboard statistics service

use tracing::instrument;

use atelier_core::entities::{ContactStatus, PostStatus, SubscriberStatus};

use crate::dto::{
    ContactStatsResponse, PostStatsResponse, StatsResponse, SubscriberStatsResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Dashboard statistics service
pub struct StatsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StatsService<'a> {
    /// Create a new StatsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Aggregate counts for the admin dashboard
    #[instrument(skip(self))]
    pub async fn overview(&self) -> ServiceResult<StatsResponse> {
        let posts = self.ctx.post_repo();
        let contacts = self.ctx.contact_repo();
        let subscribers = self.ctx.subscriber_repo();

        let total_posts = posts.count_by_status(None).await?;
        let published = posts.count_by_status(Some(PostStatus::Published)).await?;
        let draft = posts.count_by_status(Some(PostStatus::Draft)).await?;
        let archived = posts.count_by_status(Some(PostStatus::Archived)).await?;
        let total_views = posts.count_views().await?;

        let users = self.ctx.user_repo().count().await?;

        let total_contacts = contacts.count_by_status(None).await?;
        let unread_contacts = contacts.count_by_status(Some(ContactStatus::New)).await?;

        let total_subscribers = subscribers.count_by_status(None).await?;
        let active_subscribers = subscribers
            .count_by_status(Some(SubscriberStatus::Active))
            .await?;
        let pending_subscribers = subscribers
            .count_by_status(Some(SubscriberStatus::Pending))
            .await?;

        Ok(StatsResponse {
            posts: PostStatsResponse {
                total: total_posts,
                published,
                draft,
                archived,
            },
            total_views,
            users,
            contacts: ContactStatsResponse {
                total: total_contacts,
                unread: unread_contacts,
            },
            subscribers: SubscriberStatsResponse {
                total: total_subscribers,
                active: active_subscribers,
                pending: pending_subscribers,
            },
        })
    }
}
