//! Post service
//!
//! Reaction toggles, claps, view tracking and the post lifecycle. Every write
//! to an existing post is a read-modify-write guarded by the post's version;
//! on a version conflict the whole cycle is re-run against fresh state.

use tally_common::Principal;
use tally_core::entities::{Author, Post, PostDetails, ReactionKind, ReactionOutcome};
use tally_core::{DomainError, PostId, UserId};
use tracing::{debug, info, instrument, warn};

use crate::dto::{CreatePostRequest, PostResponse, SchedulePostRequest, UpdatePostRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    // ========================================================================
    // Reactions
    // ========================================================================

    /// Toggle `kind` for `user_id` on a post
    ///
    /// Adding a reaction clears the opposite one in the same write.
    #[instrument(skip(self))]
    pub async fn toggle_reaction(
        &self,
        post_id: PostId,
        user_id: UserId,
        kind: ReactionKind,
    ) -> ServiceResult<(ReactionOutcome, PostResponse)> {
        let (outcome, details) = self
            .mutate(post_id, |post| Ok((post.toggle(kind, user_id), true)))
            .await?;

        info!(
            post_id = %post_id,
            user_id = %user_id,
            kind = ?kind,
            outcome = ?outcome,
            "Reaction toggled"
        );

        Ok((outcome, details.into()))
    }

    /// Like toggle
    pub async fn like_post(
        &self,
        post_id: PostId,
        user_id: UserId,
    ) -> ServiceResult<(ReactionOutcome, PostResponse)> {
        self.toggle_reaction(post_id, user_id, ReactionKind::Like).await
    }

    /// Dislike toggle
    pub async fn dislike_post(
        &self,
        post_id: PostId,
        user_id: UserId,
    ) -> ServiceResult<(ReactionOutcome, PostResponse)> {
        self.toggle_reaction(post_id, user_id, ReactionKind::Dislike)
            .await
    }

    /// Add one clap
    #[instrument(skip(self))]
    pub async fn clap_post(&self, post_id: PostId) -> ServiceResult<PostResponse> {
        let (claps, details) = self
            .mutate(post_id, |post| {
                post.clap();
                Ok((post.claps, true))
            })
            .await?;

        info!(post_id = %post_id, claps, "Post clapped");

        Ok(details.into())
    }

    /// Record that `user_id` viewed a post
    ///
    /// Repeat views leave the post untouched and issue no write.
    #[instrument(skip(self))]
    pub async fn record_view(&self, post_id: PostId, user_id: UserId) -> ServiceResult<PostResponse> {
        let (first_view, details) = self
            .mutate(post_id, |post| {
                let inserted = post.record_view(user_id);
                Ok((inserted, inserted))
            })
            .await?;

        if first_view {
            info!(post_id = %post_id, user_id = %user_id, "Post view recorded");
        }

        Ok(details.into())
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Create a post authored by `principal`
    #[instrument(skip(self, req), fields(user_id = %principal.user_id))]
    pub async fn create_post(
        &self,
        principal: &Principal,
        req: CreatePostRequest,
    ) -> ServiceResult<PostResponse> {
        if self
            .ctx
            .category_repo()
            .find_by_id(req.category)
            .await?
            .is_none()
        {
            return Err(ServiceError::validation("Category does not exist"));
        }

        self.ctx
            .author_repo()
            .upsert(&Author::new(
                principal.user_id,
                principal.username.clone(),
                principal.email.clone(),
            ))
            .await?;

        let post = Post::new(
            PostId::generate(),
            principal.user_id,
            req.category,
            req.title,
            req.content,
            req.image,
        );

        match self.ctx.post_repo().create(&post).await {
            Ok(()) => {}
            // category removed between the check and the insert
            Err(DomainError::CategoryNotFound(_)) => {
                return Err(ServiceError::validation("Category does not exist"));
            }
            Err(e) => return Err(e.into()),
        }

        info!(post_id = %post.id, category_id = %post.category_id, "Post created");

        self.details(post.id).await
    }

    /// Get a single post
    #[instrument(skip(self))]
    pub async fn get_post(&self, post_id: PostId) -> ServiceResult<PostResponse> {
        self.details(post_id).await
    }

    /// All posts, newest first
    #[instrument(skip(self))]
    pub async fn list_posts(&self) -> ServiceResult<Vec<PostResponse>> {
        let posts = self.ctx.post_repo().list_details(None).await?;
        Ok(posts.into_iter().map(PostResponse::from).collect())
    }

    /// The newest posts, capped by the configured public limit
    #[instrument(skip(self))]
    pub async fn public_posts(&self) -> ServiceResult<Vec<PostResponse>> {
        let limit = self.ctx.post_config().public_limit;
        let posts = self.ctx.post_repo().list_details(Some(limit)).await?;
        Ok(posts.into_iter().map(PostResponse::from).collect())
    }

    /// Edit a post; only its author may do so
    #[instrument(skip(self, req), fields(user_id = %principal.user_id))]
    pub async fn update_post(
        &self,
        principal: &Principal,
        post_id: PostId,
        req: UpdatePostRequest,
    ) -> ServiceResult<PostResponse> {
        let category = match req.category {
            Some(category_id) => Some(
                self.ctx
                    .category_repo()
                    .find_by_id(category_id)
                    .await?
                    .ok_or_else(|| ServiceError::validation("Category does not exist"))?,
            ),
            None => None,
        };

        let user_id = principal.user_id;
        let ((), mut details) = self.mutate(post_id, |post| {
            ensure_author(post, user_id)?;
            post.edit(
                req.title.clone(),
                req.content.clone(),
                req.category,
                req.image.clone(),
            );
            Ok(((), true))
        })
        .await
        .map_err(|e| match e {
            ServiceError::Domain(DomainError::CategoryNotFound(_)) => {
                ServiceError::validation("Category does not exist")
            }
            other => other,
        })?;

        if category.is_some() {
            details.category = category;
        }

        info!(post_id = %post_id, "Post updated");

        Ok(details.into())
    }

    /// Delete a post together with its reaction state; author only
    #[instrument(skip(self), fields(user_id = %principal.user_id))]
    pub async fn delete_post(&self, principal: &Principal, post_id: PostId) -> ServiceResult<()> {
        let post = self.load(post_id).await?;
        ensure_author(&post, principal.user_id)?;

        self.ctx.post_repo().delete(post_id).await?;

        info!(post_id = %post_id, "Post deleted");

        Ok(())
    }

    /// Set the scheduled publish time; author only
    #[instrument(skip(self), fields(user_id = %principal.user_id))]
    pub async fn schedule_post(
        &self,
        principal: &Principal,
        post_id: PostId,
        req: SchedulePostRequest,
    ) -> ServiceResult<PostResponse> {
        let user_id = principal.user_id;
        let ((), details) = self.mutate(post_id, |post| {
            ensure_author(post, user_id)?;
            post.schedule(req.scheduled_publish);
            Ok(((), true))
        })
        .await?;

        info!(
            post_id = %post_id,
            scheduled_publish = %req.scheduled_publish,
            "Post scheduled"
        );

        Ok(details.into())
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    async fn load(&self, post_id: PostId) -> ServiceResult<Post> {
        self.ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| DomainError::PostNotFound(post_id).into())
    }

    async fn load_details(&self, post_id: PostId) -> ServiceResult<PostDetails> {
        self.ctx
            .post_repo()
            .find_details(post_id)
            .await?
            .ok_or_else(|| DomainError::PostNotFound(post_id).into())
    }

    async fn details(&self, post_id: PostId) -> ServiceResult<PostResponse> {
        self.load_details(post_id).await.map(PostResponse::from)
    }

    /// Load, apply `change`, and conditionally save
    ///
    /// `change` returns its result plus whether the post was modified; an
    /// unmodified post is not written. A stale version re-runs the cycle up
    /// to `write_retries` attempts in total, after which the conflict is
    /// returned. On success the post comes back as written, with the author
    /// and category from the same read.
    async fn mutate<T, F>(&self, post_id: PostId, mut change: F) -> ServiceResult<(T, PostDetails)>
    where
        F: FnMut(&mut Post) -> ServiceResult<(T, bool)>,
    {
        let attempts = self.ctx.post_config().write_retries.max(1);
        let mut attempt = 0;

        loop {
            attempt += 1;
            let mut details = self.load_details(post_id).await?;
            let (value, changed) = change(&mut details.post)?;

            if !changed {
                return Ok((value, details));
            }

            match self.ctx.post_repo().save(&details.post).await {
                Ok(version) => {
                    debug!(post_id = %post_id, version, attempt, "Post saved");
                    details.post.version = version;
                    return Ok((value, details));
                }
                Err(DomainError::VersionConflict(_)) if attempt < attempts => {
                    warn!(post_id = %post_id, attempt, "Post version conflict, retrying");
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}

fn ensure_author(post: &Post, user_id: UserId) -> ServiceResult<()> {
    if post.is_authored_by(user_id) {
        Ok(())
    } else {
        Err(DomainError::NotPostAuthor.into())
    }
}
