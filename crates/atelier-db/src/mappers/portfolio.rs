//! Portfolio model -> entity mapper

use atelier_core::entities::PortfolioItem;
use atelier_core::error::DomainError;

use crate::models::PortfolioItemModel;

use super::parse_status;

impl TryFrom<PortfolioItemModel> for PortfolioItem {
    type Error = DomainError;

    fn try_from(model: PortfolioItemModel) -> Result<Self, Self::Error> {
        Ok(PortfolioItem {
            id: model.id,
            title: model.title,
            slug: model.slug,
            summary: model.summary,
            content: model.content,
            client: model.client,
            category: model.category,
            tags: model.tags.0,
            cover_image: model.cover_image,
            gallery: model.gallery.0,
            live_url: model.live_url,
            repo_url: model.repo_url,
            status: parse_status(&model.status)?,
            is_featured: model.is_featured,
            completed_at: model.completed_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
