//! Post entity - a blog post together with its reaction state

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use super::{Author, Category};
use crate::value_objects::{CategoryId, PostId, UserId};

/// Which of the two mutually exclusive reactions is being toggled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReactionKind {
    Like,
    Dislike,
}

/// Net effect of a toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionOutcome {
    /// The user now holds the reaction
    Added,
    /// The user's existing reaction was withdrawn
    Removed,
}

impl ReactionKind {
    /// Human readable confirmation for a toggle outcome
    pub fn message(self, outcome: ReactionOutcome) -> &'static str {
        match (self, outcome) {
            (Self::Like, ReactionOutcome::Added) => "Post liked successfully",
            (Self::Like, ReactionOutcome::Removed) => "Post unliked successfully",
            (Self::Dislike, ReactionOutcome::Added) => "Post disliked successfully",
            (Self::Dislike, ReactionOutcome::Removed) => "Post undisliked successfully",
        }
    }
}

/// Post entity
///
/// `likes` and `dislikes` are disjoint. That holds only because every
/// mutation goes through [`Post::toggle`]; storage does not enforce it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author_id: UserId,
    pub category_id: CategoryId,
    pub image: Option<String>,
    pub likes: BTreeSet<UserId>,
    pub dislikes: BTreeSet<UserId>,
    pub claps: u64,
    pub post_views: BTreeSet<UserId>,
    pub scheduled_publish: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Optimistic concurrency token, bumped by the repository on each save
    pub version: i64,
}

impl Post {
    /// Create a new post with empty reaction state
    pub fn new(
        id: PostId,
        author_id: UserId,
        category_id: CategoryId,
        title: String,
        content: String,
        image: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            content,
            author_id,
            category_id,
            image,
            likes: BTreeSet::new(),
            dislikes: BTreeSet::new(),
            claps: 0,
            post_views: BTreeSet::new(),
            scheduled_publish: None,
            created_at: now,
            updated_at: now,
            version: 0,
        }
    }

    /// Apply the like/dislike toggle for `user`
    ///
    /// If the user already holds `kind` it is withdrawn. Otherwise it is added
    /// and the opposite reaction is cleared in the same step.
    pub fn toggle(&mut self, kind: ReactionKind, user: UserId) -> ReactionOutcome {
        let (target, opposite) = match kind {
            ReactionKind::Like => (&mut self.likes, &mut self.dislikes),
            ReactionKind::Dislike => (&mut self.dislikes, &mut self.likes),
        };

        if target.remove(&user) {
            ReactionOutcome::Removed
        } else {
            target.insert(user);
            opposite.remove(&user);
            ReactionOutcome::Added
        }
    }

    /// Increment the clap counter by one
    pub fn clap(&mut self) {
        self.claps = self.claps.saturating_add(1);
    }

    /// Record that `user` viewed the post; returns whether the set changed
    pub fn record_view(&mut self, user: UserId) -> bool {
        self.post_views.insert(user)
    }

    #[inline]
    pub fn is_authored_by(&self, user: UserId) -> bool {
        self.author_id == user
    }

    /// Apply an edit; fields left as `None` are unchanged
    pub fn edit(
        &mut self,
        title: Option<String>,
        content: Option<String>,
        category_id: Option<CategoryId>,
        image: Option<String>,
    ) {
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(content) = content {
            self.content = content;
        }
        if let Some(category_id) = category_id {
            self.category_id = category_id;
        }
        if let Some(image) = image {
            self.image = Some(image);
        }
        self.updated_at = Utc::now();
    }

    /// Set the scheduled publish time
    pub fn schedule(&mut self, at: DateTime<Utc>) {
        self.scheduled_publish = Some(at);
        self.updated_at = Utc::now();
    }
}

/// A post with its author and category resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDetails {
    pub post: Post,
    pub author: Option<Author>,
    pub category: Option<Category>,
}
