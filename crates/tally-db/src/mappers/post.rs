//! Post entity <-> model mapper

use tally_core::entities::{Author, Category, Post, PostDetails};
use tally_core::value_objects::{CategoryId, PostId, UserId};
use uuid::Uuid;

use crate::models::{PostDetailsModel, PostModel};

fn user_set(ids: Vec<Uuid>) -> std::collections::BTreeSet<UserId> {
    ids.into_iter().map(UserId::from_uuid).collect()
}

/// Convert PostModel to Post entity
impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: PostId::from_uuid(model.id),
            title: model.title,
            content: model.content,
            author_id: UserId::from_uuid(model.author_id),
            category_id: CategoryId::from_uuid(model.category_id),
            image: model.image,
            likes: user_set(model.likes),
            dislikes: user_set(model.dislikes),
            claps: u64::try_from(model.claps).unwrap_or_default(),
            post_views: user_set(model.post_views),
            scheduled_publish: model.scheduled_publish,
            created_at: model.created_at,
            updated_at: model.updated_at,
            version: model.version,
        }
    }
}

impl From<PostDetailsModel> for PostDetails {
    fn from(model: PostDetailsModel) -> Self {
        let author = match (model.author_username, model.author_email, model.author_updated_at) {
            (Some(username), Some(email), Some(updated_at)) => Some(Author {
                id: UserId::from_uuid(model.post.author_id),
                username,
                email,
                updated_at,
            }),
            _ => None,
        };

        let category = match (
            model.category_name,
            model.category_author_id,
            model.category_created_at,
        ) {
            (Some(name), Some(author_id), Some(created_at)) => Some(Category {
                id: CategoryId::from_uuid(model.post.category_id),
                name,
                author_id: UserId::from_uuid(author_id),
                created_at,
            }),
            _ => None,
        };

        PostDetails {
            post: Post::from(model.post),
            author,
            category,
        }
    }
}

/// Post entity flattened into bindable column values
pub struct PostWrite<'a> {
    pub id: Uuid,
    pub title: &'a str,
    pub content: &'a str,
    pub author_id: Uuid,
    pub category_id: Uuid,
    pub image: Option<&'a str>,
    pub likes: Vec<Uuid>,
    pub dislikes: Vec<Uuid>,
    pub claps: i64,
    pub post_views: Vec<Uuid>,
}

impl<'a> PostWrite<'a> {
    pub fn new(post: &'a Post) -> Self {
        let ids = |set: &std::collections::BTreeSet<UserId>| {
            set.iter().copied().map(UserId::into_inner).collect::<Vec<_>>()
        };

        Self {
            id: post.id.into_inner(),
            title: &post.title,
            content: &post.content,
            author_id: post.author_id.into_inner(),
            category_id: post.category_id.into_inner(),
            image: post.image.as_deref(),
            likes: ids(&post.likes),
            dislikes: ids(&post.dislikes),
            claps: i64::try_from(post.claps).unwrap_or(i64::MAX),
            post_views: ids(&post.post_views),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_write_flattens_reaction_sets() {
        let mut post = Post::new(
            PostId::generate(),
            UserId::generate(),
            CategoryId::generate(),
            "t".to_string(),
            "c".to_string(),
            None,
        );
        let a = UserId::generate();
        post.likes.insert(a);
        post.claps = 3;

        let write = PostWrite::new(&post);
        assert_eq!(write.likes, vec![a.into_inner()]);
        assert!(write.dislikes.is_empty());
        assert_eq!(write.claps, 3);
    }

    #[test]
    fn test_details_without_joined_rows() {
        let now = Utc::now();
        let model = PostDetailsModel {
            post: PostModel {
                id: Uuid::new_v4(),
                title: "t".to_string(),
                content: "c".to_string(),
                author_id: Uuid::new_v4(),
                category_id: Uuid::new_v4(),
                image: None,
                likes: vec![],
                dislikes: vec![],
                claps: -1,
                post_views: vec![],
                scheduled_publish: None,
                created_at: now,
                updated_at: now,
                version: 2,
            },
            author_username: None,
            author_email: None,
            author_updated_at: None,
            category_name: Some("Rust".to_string()),
            category_author_id: Some(Uuid::new_v4()),
            category_created_at: Some(now),
        };

        let details = PostDetails::from(model);
        assert!(details.author.is_none());
        assert_eq!(details.category.unwrap().name, "Rust");
        assert_eq!(details.post.claps, 0);
        assert_eq!(details.post.version, 2);
    }
}
