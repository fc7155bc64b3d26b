//! Post view - append-only analytics row

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A single recorded view of a post. Written once, never updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostView {
    pub id: Uuid,
    pub post_id: Uuid,
    /// SHA-256 hex digest of the viewer IP; the raw address is never stored
    pub ip_hash: Option<String>,
    pub user_agent: Option<String>,
    pub referrer: Option<String>,
    pub viewed_at: DateTime<Utc>,
}

impl PostView {
    pub fn new(id: Uuid, post_id: Uuid) -> Self {
        Self {
            id,
            post_id,
            ip_hash: None,
            user_agent: None,
            referrer: None,
            viewed_at: Utc::now(),
        }
    }
}
