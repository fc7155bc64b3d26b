//! User model -> entity mapper

use atelier_core::entities::User;
use atelier_core::error::DomainError;

use crate::models::UserModel;

use super::parse_status;

impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        Ok(User {
            id: model.id,
            name: model.name,
            email: model.email,
            role: parse_status(&model.role)?,
            email_verified: model.email_verified,
            image: model.image,
            bio: model.bio,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
