//! Route definitions
//!
//! Blog and ledger routes mounted under /api/v1.

use axum::{
    routing::{get, put},
    Router,
};

use crate::handlers::{categories, expenses, health, posts};
use crate::state::AppState;

/// Create the API router (health routes are mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes, kept outside the rate limiter
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(post_routes())
        .merge(category_routes())
        .merge(ledger_routes())
}

/// Post routes
fn post_routes() -> Router<AppState> {
    Router::new()
        // Engagement
        .route("/posts/likes/:id", put(posts::like_post))
        .route("/posts/dislikes/:id", put(posts::dislike_post))
        .route("/posts/claps/:id", put(posts::clap_post))
        .route("/posts/:id/post-view-count", put(posts::record_view))
        .route("/posts/schedule/:id", put(posts::schedule_post))
        // Lifecycle
        .route("/posts", get(posts::list_posts).post(posts::create_post))
        .route("/posts/public", get(posts::public_posts))
        .route(
            "/posts/:id",
            get(posts::get_post)
                .put(posts::update_post)
                .delete(posts::delete_post),
        )
}

/// Category routes
fn category_routes() -> Router<AppState> {
    Router::new().route(
        "/categories",
        get(categories::list_categories).post(categories::create_category),
    )
}

/// Expense ledger routes
fn ledger_routes() -> Router<AppState> {
    Router::new()
        .route("/stats", get(expenses::stats))
        .route(
            "/expenses",
            get(expenses::list_transactions).post(expenses::create_transaction),
        )
        .route("/expenses/categories", get(expenses::transaction_categories))
        .route(
            "/expenses/:id",
            put(expenses::update_transaction).delete(expenses::delete_transaction),
        )
}
