//! Newsletter subscriber service
//!
//! Double opt-in: a subscription stays `pending` until its confirm token is
//! redeemed. Confirmation links are logged; delivery is out of scope here.

use tracing::{info, instrument};
use uuid::Uuid;

use atelier_core::entities::{Subscriber, SubscriberStatus};
use atelier_core::traits::{Page, SubscriberFilter};

use crate::dto::{
    PaginatedResponse, SubscribeRequest, SubscriberResponse, UnsubscribeRequest,
    UpdateSubscriberRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Newsletter subscriber service
pub struct SubscriberService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SubscriberService<'a> {
    /// Create a new SubscriberService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Subscribe an email address.
    ///
    /// Re-subscribing a pending address is idempotent and keeps the original
    /// token. An unsubscribed address gets a fresh token and goes back to
    /// pending. An active address is a conflict.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn subscribe(&self, request: SubscribeRequest) -> ServiceResult<SubscriberResponse> {
        let email = request.email.trim().to_lowercase();

        if let Some(mut existing) = self.ctx.subscriber_repo().find_by_email(&email).await? {
            return match existing.status {
                SubscriberStatus::Active => Err(ServiceError::conflict(
                    "Email address is already subscribed",
                )),
                SubscriberStatus::Pending => {
                    Self::log_confirm_link(&existing);
                    Ok(SubscriberResponse::from(existing))
                }
                SubscriberStatus::Unsubscribed => {
                    existing.resubscribe(request.first_name);
                    self.ctx.subscriber_repo().update(&existing).await?;
                    info!(subscriber_id = %existing.id, "Subscriber re-subscribed");
                    Self::log_confirm_link(&existing);
                    Ok(SubscriberResponse::from(existing))
                }
            };
        }

        let source = request.source.unwrap_or_else(|| "blog".to_string());
        let subscriber = Subscriber::new(Uuid::new_v4(), email, request.first_name, source);

        self.ctx.subscriber_repo().create(&subscriber).await?;

        info!(subscriber_id = %subscriber.id, "New subscriber pending confirmation");
        Self::log_confirm_link(&subscriber);

        Ok(SubscriberResponse::from(subscriber))
    }

    /// Redeem a confirmation token
    #[instrument(skip(self, token))]
    pub async fn confirm(&self, token: &str) -> ServiceResult<SubscriberResponse> {
        let mut subscriber = self
            .ctx
            .subscriber_repo()
            .find_by_confirm_token(token)
            .await?
            .ok_or_else(|| ServiceError::not_found("Confirmation token", "<redacted>"))?;

        subscriber.confirm()?;

        self.ctx.subscriber_repo().update(&subscriber).await?;

        info!(subscriber_id = %subscriber.id, "Subscription confirmed");

        Ok(SubscriberResponse::from(subscriber))
    }

    /// Unsubscribe an email address. Already-unsubscribed is not an error.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn unsubscribe(&self, request: UnsubscribeRequest) -> ServiceResult<()> {
        let email = request.email.trim().to_lowercase();

        let mut subscriber = self
            .ctx
            .subscriber_repo()
            .find_by_email(&email)
            .await?
            .ok_or_else(|| ServiceError::not_found("Subscriber", email.clone()))?;

        subscriber.unsubscribe();

        self.ctx.subscriber_repo().update(&subscriber).await?;

        info!(subscriber_id = %subscriber.id, "Subscriber unsubscribed");

        Ok(())
    }

    /// List subscribers for the admin dashboard
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        filter: SubscriberFilter,
        page: i64,
        limit: i64,
    ) -> ServiceResult<PaginatedResponse<SubscriberResponse>> {
        let window = Page {
            limit,
            offset: (page - 1) * limit,
        };

        let (subscribers, total) = self.ctx.subscriber_repo().list(filter, window).await?;

        Ok(PaginatedResponse::new(
            subscribers.into_iter().map(SubscriberResponse::from).collect(),
            page,
            limit,
            total,
        ))
    }

    /// Fetch a single subscriber for the admin dashboard
    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> ServiceResult<SubscriberResponse> {
        let subscriber = self
            .ctx
            .subscriber_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Subscriber", id.to_string()))?;

        Ok(SubscriberResponse::from(subscriber))
    }

    /// Apply an admin edit. Only supplied fields change; status is set
    /// directly without the public opt-in transitions.
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateSubscriberRequest,
    ) -> ServiceResult<SubscriberResponse> {
        let mut subscriber = self
            .ctx
            .subscriber_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Subscriber", id.to_string()))?;

        if let Some(email) = request.email {
            subscriber.email = email.trim().to_lowercase();
        }
        if let Some(first_name) = request.first_name {
            subscriber.first_name = Some(first_name);
        }
        if let Some(source) = request.source {
            subscriber.source = source;
        }
        if let Some(status) = request.status {
            subscriber.status = status;
        }

        self.ctx.subscriber_repo().update(&subscriber).await?;

        info!(subscriber_id = %subscriber.id, "Subscriber updated");

        Ok(SubscriberResponse::from(subscriber))
    }

    /// Remove a subscriber record entirely
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        self.ctx.subscriber_repo().delete(id).await?;
        info!(subscriber_id = %id, "Subscriber deleted");
        Ok(())
    }

    fn log_confirm_link(subscriber: &Subscriber) {
        if let Some(token) = &subscriber.confirm_token {
            info!(
                subscriber_id = %subscriber.id,
                "Confirmation link: /api/v1/newsletter/confirm/{token}"
            );
        }
    }
}
