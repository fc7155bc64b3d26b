//! Subscriber database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for subscribers table
#[derive(Debug, Clone, FromRow)]
pub struct SubscriberModel {
    pub id: Uuid,
    pub email: String,
    pub first_name: Option<String>,
    pub status: String,
    pub source: String,
    pub confirm_token: Option<String>,
    pub confirmed_at: Option<DateTime<Utc>>,
    pub unsubscribed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
