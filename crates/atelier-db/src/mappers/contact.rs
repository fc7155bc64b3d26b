//! Contact submission model -> entity mapper

use atelier_core::entities::ContactSubmission;
use atelier_core::error::DomainError;

use crate::models::ContactSubmissionModel;

use super::parse_status;

impl TryFrom<ContactSubmissionModel> for ContactSubmission {
    type Error = DomainError;

    fn try_from(model: ContactSubmissionModel) -> Result<Self, Self::Error> {
        Ok(ContactSubmission {
            id: model.id,
            name: model.name,
            email: model.email,
            subject: model.subject,
            message: model.message,
            status: parse_status(&model.status)?,
            ip_address: model.ip_address,
            user_agent: model.user_agent,
            metadata: model.metadata,
            replied_at: model.replied_at,
            created_at: model.created_at,
        })
    }
}
