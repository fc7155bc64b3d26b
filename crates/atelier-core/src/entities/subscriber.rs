//! Subscriber entity - newsletter opt-in with double confirmation
//!
//! The only real state machine in the system:
//! `pending -> active` on confirm-token redemption,
//! `pending|active -> unsubscribed` on unsubscribe,
//! `unsubscribed -> pending` on resubscribe (with a fresh token).

use chrono::{DateTime, Utc};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Newsletter subscription status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriberStatus {
    Pending,
    Active,
    Unsubscribed,
}

impl SubscriberStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Unsubscribed => "unsubscribed",
        }
    }
}

impl std::str::FromStr for SubscriberStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "active" => Ok(Self::Active),
            "unsubscribed" => Ok(Self::Unsubscribed),
            other => Err(format!("unknown subscriber status: {other}")),
        }
    }
}

impl std::fmt::Display for SubscriberStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generate a single-use confirmation token: 32 random bytes, hex-encoded
pub fn generate_confirm_token() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Subscriber entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscriber {
    pub id: Uuid,
    pub email: String,
    pub first_name: Option<String>,
    pub status: SubscriberStatus,
    pub source: String,
    pub confirm_token: Option<String>,
    pub confirmed_at: Option<DateTime<Utc>>,
    pub unsubscribed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Subscriber {
    /// Create a new pending subscriber with a fresh confirm token
    pub fn new(id: Uuid, email: String, first_name: Option<String>, source: String) -> Self {
        Self {
            id,
            email,
            first_name,
            status: SubscriberStatus::Pending,
            source,
            confirm_token: Some(generate_confirm_token()),
            confirmed_at: None,
            unsubscribed_at: None,
            created_at: Utc::now(),
        }
    }

    /// Redeem the confirm token: pending -> active, token cleared.
    ///
    /// Fails once the token has been cleared, which makes confirmation
    /// single-use.
    pub fn confirm(&mut self) -> Result<(), DomainError> {
        if self.status != SubscriberStatus::Pending || self.confirm_token.is_none() {
            return Err(DomainError::ConfirmTokenAlreadyUsed);
        }
        self.status = SubscriberStatus::Active;
        self.confirm_token = None;
        self.confirmed_at = Some(Utc::now());
        Ok(())
    }

    /// pending|active -> unsubscribed; idempotent
    pub fn unsubscribe(&mut self) {
        if self.status != SubscriberStatus::Unsubscribed {
            self.status = SubscriberStatus::Unsubscribed;
            self.unsubscribed_at = Some(Utc::now());
        }
    }

    /// unsubscribed -> pending with a freshly generated token
    pub fn resubscribe(&mut self, first_name: Option<String>) {
        self.status = SubscriberStatus::Pending;
        self.confirm_token = Some(generate_confirm_token());
        self.unsubscribed_at = None;
        if first_name.is_some() {
            self.first_name = first_name;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subscriber() -> Subscriber {
        Subscriber::new(
            Uuid::new_v4(),
            "reader@example.com".to_string(),
            None,
            "blog".to_string(),
        )
    }

    #[test]
    fn test_confirm_token_format() {
        let token = generate_confirm_token();
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(token, generate_confirm_token());
    }

    #[test]
    fn test_confirm_is_single_use() {
        let mut sub = subscriber();
        assert!(sub.confirm().is_ok());
        assert_eq!(sub.status, SubscriberStatus::Active);
        assert!(sub.confirm_token.is_none());
        assert!(sub.confirmed_at.is_some());

        // Second redemption fails: token already cleared
        assert!(sub.confirm().is_err());
    }

    #[test]
    fn test_unsubscribe_then_resubscribe() {
        let mut sub = subscriber();
        let original_token = sub.confirm_token.clone();

        sub.unsubscribe();
        assert_eq!(sub.status, SubscriberStatus::Unsubscribed);
        assert!(sub.unsubscribed_at.is_some());

        sub.resubscribe(Some("Reader".to_string()));
        assert_eq!(sub.status, SubscriberStatus::Pending);
        assert!(sub.unsubscribed_at.is_none());
        assert!(sub.confirm_token.is_some());
        assert_ne!(sub.confirm_token, original_token);
        assert_eq!(sub.first_name.as_deref(), Some("Reader"));
    }

    #[test]
    fn test_unsubscribe_is_idempotent() {
        let mut sub = subscriber();
        sub.unsubscribe();
        let stamp = sub.unsubscribed_at;
        sub.unsubscribe();
        assert_eq!(sub.unsubscribed_at, stamp);
    }
}
