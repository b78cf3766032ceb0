//! Post handlers
//!
//! Reaction toggles, claps, view tracking and the post lifecycle.

use axum::{extract::State, Json};
use tally_core::{PostId, ReactionKind};
use tally_service::{
    CreatePostRequest, MessageEnvelope, PostEnvelope, PostListEnvelope, PostService,
    SchedulePostRequest, UpdatePostRequest,
};

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Toggle like
///
/// PUT /posts/likes/{id}
pub async fn like_post(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(post_id): IdPath<PostId>,
) -> ApiResult<Json<PostEnvelope>> {
    toggle(&state, &auth, post_id, ReactionKind::Like).await
}

/// Toggle dislike
///
/// PUT /posts/dislikes/{id}
pub async fn dislike_post(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(post_id): IdPath<PostId>,
) -> ApiResult<Json<PostEnvelope>> {
    toggle(&state, &auth, post_id, ReactionKind::Dislike).await
}

async fn toggle(
    state: &AppState,
    auth: &AuthUser,
    post_id: PostId,
    kind: ReactionKind,
) -> ApiResult<Json<PostEnvelope>> {
    let service = PostService::new(state.service_context());
    let (outcome, post) = service
        .toggle_reaction(post_id, auth.user_id(), kind)
        .await?;
    Ok(Json(PostEnvelope::success(kind.message(outcome), post)))
}

/// Clap
///
/// PUT /posts/claps/{id}
pub async fn clap_post(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(post_id): IdPath<PostId>,
) -> ApiResult<Json<PostEnvelope>> {
    let service = PostService::new(state.service_context());
    let post = service.clap_post(post_id).await?;
    Ok(Json(PostEnvelope::success("Post clapped successfully", post)))
}

/// Record a view
///
/// PUT /posts/{id}/post-view-count
pub async fn record_view(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(post_id): IdPath<PostId>,
) -> ApiResult<Json<PostEnvelope>> {
    let service = PostService::new(state.service_context());
    let post = service.record_view(post_id, auth.user_id()).await?;
    Ok(Json(PostEnvelope::success(
        "Post view recorded successfully",
        post,
    )))
}

/// Create post
///
/// POST /posts
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreatePostRequest>,
) -> ApiResult<Created<Json<PostEnvelope>>> {
    let service = PostService::new(state.service_context());
    let post = service.create_post(auth.principal(), request).await?;
    Ok(Created(Json(PostEnvelope::success(
        "Post created successfully",
        post,
    ))))
}

/// List all posts
///
/// GET /posts
pub async fn list_posts(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<PostListEnvelope>> {
    let service = PostService::new(state.service_context());
    let posts = service.list_posts().await?;
    Ok(Json(PostListEnvelope::success(
        "Posts fetched successfully",
        posts,
    )))
}

/// Newest posts for anonymous visitors
///
/// GET /posts/public
pub async fn public_posts(State(state): State<AppState>) -> ApiResult<Json<PostListEnvelope>> {
    let service = PostService::new(state.service_context());
    let posts = service.public_posts().await?;
    Ok(Json(PostListEnvelope::success(
        "Public posts fetched successfully",
        posts,
    )))
}

/// Get post
///
/// GET /posts/{id}
pub async fn get_post(
    State(state): State<AppState>,
    IdPath(post_id): IdPath<PostId>,
) -> ApiResult<Json<PostEnvelope>> {
    let service = PostService::new(state.service_context());
    let post = service.get_post(post_id).await?;
    Ok(Json(PostEnvelope::success("Post fetched successfully", post)))
}

/// Update post
///
/// PUT /posts/{id}
pub async fn update_post(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(post_id): IdPath<PostId>,
    ValidatedJson(request): ValidatedJson<UpdatePostRequest>,
) -> ApiResult<Json<PostEnvelope>> {
    let service = PostService::new(state.service_context());
    let post = service
        .update_post(auth.principal(), post_id, request)
        .await?;
    Ok(Json(PostEnvelope::success("Post updated successfully", post)))
}

/// Delete post
///
/// DELETE /posts/{id}
pub async fn delete_post(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(post_id): IdPath<PostId>,
) -> ApiResult<Json<MessageEnvelope>> {
    let service = PostService::new(state.service_context());
    service.delete_post(auth.principal(), post_id).await?;
    Ok(Json(MessageEnvelope::success("Post deleted successfully")))
}

/// Schedule post
///
/// PUT /posts/schedule/{id}
pub async fn schedule_post(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(post_id): IdPath<PostId>,
    ValidatedJson(request): ValidatedJson<SchedulePostRequest>,
) -> ApiResult<Json<PostEnvelope>> {
    let service = PostService::new(state.service_context());
    let post = service
        .schedule_post(auth.principal(), post_id, request)
        .await?;
    Ok(Json(PostEnvelope::success(
        "Post scheduled successfully",
        post,
    )))
}
