//! Post database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for posts table
#[derive(Debug, Clone, FromRow)]
pub struct PostModel {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author_id: Uuid,
    pub category_id: Uuid,
    pub image: Option<String>,
    pub likes: Vec<Uuid>,
    pub dislikes: Vec<Uuid>,
    pub claps: i64,
    pub post_views: Vec<Uuid>,
    pub scheduled_publish: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub version: i64,
}

/// Post row joined with its author and category (both optional via LEFT JOIN)
#[derive(Debug, Clone, FromRow)]
pub struct PostDetailsModel {
    #[sqlx(flatten)]
    pub post: PostModel,
    pub author_username: Option<String>,
    pub author_email: Option<String>,
    pub author_updated_at: Option<DateTime<Utc>>,
    pub category_name: Option<String>,
    pub category_author_id: Option<Uuid>,
    pub category_created_at: Option<DateTime<Utc>>,
}
