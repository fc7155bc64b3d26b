//! Tag model -> entity mappers

use atelier_core::entities::Tag;

use crate::models::{TagModel, TagWithCountModel};

impl From<TagModel> for Tag {
    fn from(model: TagModel) -> Self {
        Tag {
            id: model.id,
            name: model.name,
            slug: model.slug,
            created_at: model.created_at,
        }
    }
}

impl TagWithCountModel {
    /// Split into the tag entity and its derived post count
    pub fn into_pair(self) -> (Tag, i64) {
        (
            Tag {
                id: self.id,
                name: self.name,
                slug: self.slug,
                created_at: self.created_at,
            },
            self.post_count,
        )
    }
}
