//! Post model -> entity mappers

use atelier_core::entities::{AuthorSummary, Post, PostWithAuthor};
use atelier_core::error::DomainError;

use crate::models::{PostModel, PostWithAuthorModel};

use super::parse_status;

impl TryFrom<PostModel> for Post {
    type Error = DomainError;

    fn try_from(model: PostModel) -> Result<Self, Self::Error> {
        Ok(Post {
            id: model.id,
            author_id: model.author_id,
            title: model.title,
            slug: model.slug,
            excerpt: model.excerpt,
            content: model.content,
            cover_image: model.cover_image,
            status: parse_status(&model.status)?,
            is_featured: model.is_featured,
            read_time_minutes: model.read_time_minutes,
            seo_title: model.seo_title,
            seo_description: model.seo_description,
            seo_image: model.seo_image,
            published_at: model.published_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl TryFrom<PostWithAuthorModel> for PostWithAuthor {
    type Error = DomainError;

    fn try_from(model: PostWithAuthorModel) -> Result<Self, Self::Error> {
        // The author summary is present only while the authoring user exists
        let author = match (model.author_id, model.author_name, model.author_email) {
            (Some(id), Some(name), Some(email)) => Some(AuthorSummary {
                id,
                name,
                email,
                image: model.author_image,
            }),
            _ => None,
        };

        let post = Post {
            id: model.id,
            author_id: model.author_id,
            title: model.title,
            slug: model.slug,
            excerpt: model.excerpt,
            content: model.content,
            cover_image: model.cover_image,
            status: parse_status(&model.status)?,
            is_featured: model.is_featured,
            read_time_minutes: model.read_time_minutes,
            seo_title: model.seo_title,
            seo_description: model.seo_description,
            seo_image: model.seo_image,
            published_at: model.published_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        };

        Ok(PostWithAuthor { post, author })
    }
}
