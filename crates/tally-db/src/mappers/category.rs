//! Category entity <-> model mapper

use tally_core::entities::Category;
use tally_core::value_objects::{CategoryId, UserId};

use crate::models::CategoryModel;

impl From<CategoryModel> for Category {
    fn from(model: CategoryModel) -> Self {
        Category {
            id: CategoryId::from_uuid(model.id),
            name: model.name,
            author_id: UserId::from_uuid(model.author_id),
            created_at: model.created_at,
        }
    }
}
