//! Contact submission service
//!
//! Public intake plus the admin triage operations. Submissions only log a
//! notification; mail delivery is handled by an out-of-band worker.

use tracing::{info, instrument};
use uuid::Uuid;

use atelier_core::entities::ContactSubmission;
use atelier_core::traits::{ContactFilter, Page};

use crate::dto::{
    ContactSubmissionResponse, CreateContactRequest, PaginatedResponse, UpdateContactRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Contact submission service
pub struct ContactService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ContactService<'a> {
    /// Create a new ContactService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Accept a public contact submission
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn submit(
        &self,
        request: CreateContactRequest,
        ip_address: Option<String>,
        user_agent: Option<String>,
    ) -> ServiceResult<ContactSubmissionResponse> {
        let mut submission = ContactSubmission::new(
            Uuid::new_v4(),
            request.name,
            request.email,
            request.subject,
            request.message,
        );
        submission.ip_address = ip_address;
        submission.user_agent = user_agent;
        submission.metadata = request.metadata;

        self.ctx.contact_repo().create(&submission).await?;

        info!(
            submission_id = %submission.id,
            subject = %submission.subject,
            "New contact submission received"
        );

        Ok(ContactSubmissionResponse::from(submission))
    }

    /// List submissions for the admin inbox
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        filter: ContactFilter,
        page: i64,
        limit: i64,
    ) -> ServiceResult<PaginatedResponse<ContactSubmissionResponse>> {
        let window = Page {
            limit,
            offset: (page - 1) * limit,
        };

        let (submissions, total) = self.ctx.contact_repo().list(filter, window).await?;

        Ok(PaginatedResponse::new(
            submissions
                .into_iter()
                .map(ContactSubmissionResponse::from)
                .collect(),
            page,
            limit,
            total,
        ))
    }

    /// Fetch a single submission
    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> ServiceResult<ContactSubmissionResponse> {
        self.ctx
            .contact_repo()
            .find_by_id(id)
            .await?
            .map(ContactSubmissionResponse::from)
            .ok_or_else(|| ServiceError::not_found("Contact submission", id.to_string()))
    }

    /// Update the triage status. The first move to `replied` stamps
    /// `replied_at`; later status changes leave the stamp alone.
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateContactRequest,
    ) -> ServiceResult<ContactSubmissionResponse> {
        let mut submission = self
            .ctx
            .contact_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Contact submission", id.to_string()))?;

        submission.set_status(request.status);

        self.ctx.contact_repo().update(&submission).await?;

        info!(submission_id = %id, status = %submission.status, "Contact submission updated");

        Ok(ContactSubmissionResponse::from(submission))
    }

    /// Delete a submission. Deleting an id that is already gone succeeds.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        let deleted = self.ctx.contact_repo().delete(id).await?;

        if deleted {
            info!(submission_id = %id, "Contact submission deleted");
        } else {
            info!(submission_id = %id, "Contact submission already absent");
        }

        Ok(())
    }
}
