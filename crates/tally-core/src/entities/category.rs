//! Category entity - blog post categories

use chrono::{DateTime, Utc};

use crate::value_objects::{CategoryId, UserId};

/// Blog category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Category {
    /// Maximum category name length
    pub const MAX_NAME_LENGTH: usize = 100;

    pub fn new(id: CategoryId, name: String, author_id: UserId) -> Self {
        Self {
            id,
            name,
            author_id,
            created_at: Utc::now(),
        }
    }
}
