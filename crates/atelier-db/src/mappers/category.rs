//! Category model -> entity mappers

use atelier_core::entities::Category;

use crate::models::{CategoryModel, CategoryWithCountModel};

impl From<CategoryModel> for Category {
    fn from(model: CategoryModel) -> Self {
        Category {
            id: model.id,
            name: model.name,
            slug: model.slug,
            description: model.description,
            color: model.color,
            sort_order: model.sort_order,
            created_at: model.created_at,
        }
    }
}

impl CategoryWithCountModel {
    /// Split into the category entity and its derived post count
    pub fn into_pair(self) -> (Category, i64) {
        (
            Category {
                id: self.id,
                name: self.name,
                slug: self.slug,
                description: self.description,
                color: self.color,
                sort_order: self.sort_order,
                created_at: self.created_at,
            },
            self.post_count,
        )
    }
}
