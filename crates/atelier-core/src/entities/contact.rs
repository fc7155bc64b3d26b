//! Contact submission entity - messages from the public contact form

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Triage status of a contact submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    New,
    Read,
    Replied,
    Archived,
}

impl ContactStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Read => "read",
            Self::Replied => "replied",
            Self::Archived => "archived",
        }
    }
}

impl std::str::FromStr for ContactStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Self::New),
            "read" => Ok(Self::Read),
            "replied" => Ok(Self::Replied),
            "archived" => Ok(Self::Archived),
            other => Err(format!("unknown contact status: {other}")),
        }
    }
}

impl std::fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contact submission entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: ContactStatus,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub metadata: Option<serde_json::Value>,
    pub replied_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl ContactSubmission {
    /// Create a new submission in the `New` state
    pub fn new(id: Uuid, name: String, email: String, subject: String, message: String) -> Self {
        Self {
            id,
            name,
            email,
            subject,
            message,
            status: ContactStatus::New,
            ip_address: None,
            user_agent: None,
            metadata: None,
            replied_at: None,
            created_at: Utc::now(),
        }
    }

    /// Move to a new triage status; entering `Replied` stamps `replied_at`
    pub fn set_status(&mut self, status: ContactStatus) {
        if status == ContactStatus::Replied && self.replied_at.is_none() {
            self.replied_at = Some(Utc::now());
        }
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> ContactSubmission {
        ContactSubmission::new(
            Uuid::new_v4(),
            "Bob".to_string(),
            "bob@example.com".to_string(),
            "Hi".to_string(),
            "Hello there".to_string(),
        )
    }

    #[test]
    fn test_replied_stamps_timestamp() {
        let mut sub = submission();
        assert!(sub.replied_at.is_none());

        sub.set_status(ContactStatus::Replied);
        let first = sub.replied_at.expect("replied_at set");

        // A second transition through replied keeps the original stamp
        sub.set_status(ContactStatus::Archived);
        sub.set_status(ContactStatus::Replied);
        assert_eq!(sub.replied_at, Some(first));
    }

    #[test]
    fn test_read_does_not_stamp(){
        let mut sub = submission();
        sub.set_status(ContactStatus::Read);
        assert!(sub.replied_at.is_none());
    }
}
