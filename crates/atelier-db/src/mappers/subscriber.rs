//! Subscriber model -> entity mapper

use atelier_core::entities::Subscriber;
use atelier_core::error::DomainError;

use crate::models::SubscriberModel;

use super::parse_status;

impl TryFrom<SubscriberModel> for Subscriber {
    type Error = DomainError;

    fn try_from(model: SubscriberModel) -> Result<Self, Self::Error> {
        Ok(Subscriber {
            id: model.id,
            email: model.email,
            first_name: model.first_name,
            status: parse_status(&model.status)?,
            source: model.source,
            confirm_token: model.confirm_token,
            confirmed_at: model.confirmed_at,
            unsubscribed_at: model.unsubscribed_at,
            created_at: model.created_at,
        })
    }
}
