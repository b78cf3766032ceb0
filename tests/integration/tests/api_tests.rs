//! API Integration Tests
//!
//! Each test starts its own server over a fresh in-memory store.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_error, assert_json, assert_status, fixtures::*, TestServer, TestUser,
};
use reqwest::StatusCode;
use serde_json::{json, Value};

const NO_BODY: Option<&Value> = None;

async fn seeded_post(server: &TestServer, author: &TestUser) -> PostBody {
    let response = server
        .post_api("/categories", Some(author), &NewCategory::unique())
        .await
        .unwrap();
    let category: CategoryEnvelope = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_api(
            "/posts",
            Some(author),
            &NewPost::in_category(&category.category.id),
        )
        .await
        .unwrap();
    let created: PostEnvelope = assert_json(response, StatusCode::CREATED).await.unwrap();
    created.post
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let url = format!("{}/health", server.base_url());
    let response = server.get(&url).await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let url = format!("{}/health/ready", server.base_url());
    let response = server.get(&url).await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ready");
}

// ============================================================================
// Authentication Tests
// ============================================================================

#[tokio::test]
async fn test_reaction_without_token() {
    let server = TestServer::start().await.unwrap();
    let author = server.user().unwrap();
    let post = seeded_post(&server, &author).await;

    let response = server
        .put_api(&format!("/posts/likes/{}", post.id), None, NO_BODY)
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "MISSING_AUTHORIZATION");
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let server = TestServer::start().await.unwrap();
    let token = server.expired_token().unwrap();

    let response = server
        .client
        .get(server.api("/posts"))
        .bearer_auth(token)
        .send()
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "TOKEN_EXPIRED");
}

// ============================================================================
// Reaction Tests
// ============================================================================

#[tokio::test]
async fn test_like_dislike_scenario() {
    let server = TestServer::start().await.unwrap();
    let author = server.user().unwrap();
    let reader = server.user().unwrap();
    let post = seeded_post(&server, &author).await;
    let reader_id = reader.principal.user_id.to_string();

    let like = format!("/posts/likes/{}", post.id);
    let dislike = format!("/posts/dislikes/{}", post.id);

    let response = server.put_api(&like, Some(&reader), NO_BODY).await.unwrap();
    let body: PostEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.status, "success");
    assert_eq!(body.message, "Post liked successfully");
    assert_eq!(body.post.likes, vec![reader_id.clone()]);
    assert!(body.post.dislikes.is_empty());

    // Dislike moves the reader across
    let response = server.put_api(&dislike, Some(&reader), NO_BODY).await.unwrap();
    let body: PostEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "Post disliked successfully");
    assert!(body.post.likes.is_empty());
    assert_eq!(body.post.dislikes, vec![reader_id.clone()]);

    let response = server.put_api(&like, Some(&reader), NO_BODY).await.unwrap();
    let body: PostEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.post.likes, vec![reader_id]);
    assert!(body.post.dislikes.is_empty());

    let response = server.put_api(&like, Some(&reader), NO_BODY).await.unwrap();
    let body: PostEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "Post unliked successfully");
    assert!(body.post.likes.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_likes_keep_sets_consistent() {
    let server = TestServer::start().await.unwrap();
    let author = server.user().unwrap();
    let post = seeded_post(&server, &author).await;
    let url = server.api(&format!("/posts/likes/{}", post.id));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let client = server.client.clone();
            let url = url.clone();
            let token = server.user().unwrap().token;
            tokio::spawn(async move { client.put(url).bearer_auth(token).send().await })
        })
        .collect();

    let mut accepted = 0;
    for handle in handles {
        let status = handle.await.unwrap().unwrap().status();
        // A caller may exhaust its retries under contention
        assert!(status == StatusCode::OK || status == StatusCode::CONFLICT);
        if status == StatusCode::OK {
            accepted += 1;
        }
    }

    let response = server
        .get_api(&format!("/posts/{}", post.id), None)
        .await
        .unwrap();
    let body: PostEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.post.likes.len(), accepted);
    assert!(body.post.dislikes.is_empty());
}

#[tokio::test]
async fn test_unknown_post() {
    let server = TestServer::start().await.unwrap();
    let reader = server.user().unwrap();

    let response = server
        .put_api(
            "/posts/likes/00000000-0000-4000-8000-000000000000",
            Some(&reader),
            NO_BODY,
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_POST");
}

#[tokio::test]
async fn test_claps_and_views() {
    let server = TestServer::start().await.unwrap();
    let author = server.user().unwrap();
    let reader = server.user().unwrap();
    let post = seeded_post(&server, &author).await;

    for _ in 0..2 {
        let response = server
            .put_api(&format!("/posts/claps/{}", post.id), Some(&reader), NO_BODY)
            .await
            .unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let view = format!("/posts/{}/post-view-count", post.id);
    server.put_api(&view, Some(&reader), NO_BODY).await.unwrap();
    let response = server.put_api(&view, Some(&reader), NO_BODY).await.unwrap();
    let body: PostEnvelope = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.post.claps, 2);
    assert_eq!(body.post.post_views.len(), 1);
}

// ============================================================================
// Post Lifecycle Tests
// ============================================================================

#[tokio::test]
async fn test_post_populates_author_and_category() {
    let server = TestServer::start().await.unwrap();
    let author = server.user().unwrap();
    let post = seeded_post(&server, &author).await;

    let author_body = post.author.expect("author populated");
    assert_eq!(author_body.id, author.principal.user_id.to_string());
    assert_eq!(author_body.username, author.principal.username);
    assert!(post.category.is_some());
}

#[tokio::test]
async fn test_create_post_with_unknown_category() {
    let server = TestServer::start().await.unwrap();
    let author = server.user().unwrap();

    let response = server
        .post_api(
            "/posts",
            Some(&author),
            &NewPost::in_category("00000000-0000-4000-8000-000000000000"),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_only_author_may_edit_or_delete() {
    let server = TestServer::start().await.unwrap();
    let author = server.user().unwrap();
    let other = server.user().unwrap();
    let post = seeded_post(&server, &author).await;
    let path = format!("/posts/{}", post.id);

    let response = server
        .put_api(&path, Some(&other), Some(&json!({"title": "Hijacked"})))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "NOT_POST_AUTHOR");

    let response = server.delete_api(&path, Some(&other)).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .put_api(&path, Some(&author), Some(&json!({"title": "Revised"})))
        .await
        .unwrap();
    let body: PostEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "Post updated successfully");
    assert_eq!(body.post.title, "Revised");

    let response = server.delete_api(&path, Some(&author)).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["message"], "Post deleted successfully");

    let response = server.get_api(&path, None).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_schedule_post() {
    let server = TestServer::start().await.unwrap();
    let author = server.user().unwrap();
    let post = seeded_post(&server, &author).await;

    let response = server
        .put_api(
            &format!("/posts/schedule/{}", post.id),
            Some(&author),
            Some(&json!({"scheduledPublish": "2030-01-01T09:00:00Z"})),
        )
        .await
        .unwrap();
    let body: PostEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "Post scheduled successfully");
    assert!(body
        .post
        .scheduled_publish
        .is_some_and(|at| at.starts_with("2030-01-01T09:00:00")));
}

#[tokio::test]
async fn test_public_posts_need_no_token() {
    let server = TestServer::start().await.unwrap();
    let author = server.user().unwrap();
    for _ in 0..5 {
        seeded_post(&server, &author).await;
    }

    let response = server.get_api("/posts/public", None).await.unwrap();
    let body: PostListEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "Public posts fetched successfully");
    assert_eq!(body.posts.len(), 4);

    let response = server.get_api("/posts", Some(&author)).await.unwrap();
    let body: PostListEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.posts.len(), 5);
}

#[tokio::test]
async fn test_invalid_post_body() {
    let server = TestServer::start().await.unwrap();
    let author = server.user().unwrap();

    let response = server
        .post_api("/posts", Some(&author), &json!({"title": "No content"}))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_BODY");
}

// ============================================================================
// Category Tests
// ============================================================================

#[tokio::test]
async fn test_categories() {
    let server = TestServer::start().await.unwrap();
    let author = server.user().unwrap();

    let response = server
        .post_api("/categories", Some(&author), &json!({"name": "Systems"}))
        .await
        .unwrap();
    let body: CategoryEnvelope = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(body.message, "Category created successfully");
    assert_eq!(body.category.name, "Systems");

    let response = server.get_api("/categories", None).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["categories"].as_array().map(Vec::len), Some(1));

    let response = server
        .post_api("/categories", None, &json!({"name": "Anonymous"}))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Ledger Tests
// ============================================================================

#[tokio::test]
async fn test_transaction_lifecycle() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post_api(
            "/expenses",
            None,
            &NewTransaction::expense("Groceries", 200.0, "Food"),
        )
        .await
        .unwrap();
    let created: TransactionBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.kind, "expense");
    assert_eq!(created.date, chrono::Utc::now().date_naive().to_string());

    let path = format!("/expenses/{}", created.id);
    let response = server
        .put_api(&path, None, Some(&json!({"amount": 250.5, "description": "Market"})))
        .await
        .unwrap();
    let updated: TransactionBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!((updated.amount - 250.5).abs() < f64::EPSILON);
    assert_eq!(updated.description, "Market");
    assert_eq!(updated.category, "Food");

    let response = server
        .put_api(&path, None, Some(&json!({"category": "Salary"})))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_CATEGORY");

    let response = server.delete_api(&path, None).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.delete_api(&path, None).await.unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_TRANSACTION");
}

#[tokio::test]
async fn test_transaction_validation() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post_api("/expenses", None, &NewTransaction::expense("Refund", -5.0, "Food"))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_AMOUNT");

    let response = server
        .post_api(
            "/expenses",
            None,
            &NewTransaction::income("Bonus", 100.0, "Food"),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_CATEGORY");

    for amount in [0.0001, 12.345, 1e12, 5e28] {
        let response = server
            .post_api("/expenses", None, &NewTransaction::expense("Edge", amount, "Food"))
            .await
            .unwrap();
        let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert_eq!(code, "INVALID_AMOUNT", "amount {amount}");
    }

    let response = server
        .post_api(
            "/expenses",
            None,
            &NewTransaction::expense("Ceiling", 999_999_999_999.99, "Food"),
        )
        .await
        .unwrap();
    let created: TransactionBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let path = format!("/expenses/{}", created.id);
    let response = server
        .put_api(&path, None, Some(&json!({"amount": 0.001})))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_AMOUNT");

    let response = server.get_api("/stats", None).await.unwrap();
    let stats: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stats["totalTransactions"], 1);
    assert_eq!(stats["totalExpenses"].as_f64(), Some(999_999_999_999.99));
}

#[tokio::test]
async fn test_filters_and_stats() {
    let server = TestServer::start().await.unwrap();
    for tx in [
        NewTransaction::expense("Groceries", 200.0, "Food"),
        NewTransaction::expense("Bus", 50.0, "Transportation"),
        NewTransaction::income("Salary", 3000.0, "Salary"),
    ] {
        let response = server.post_api("/expenses", None, &tx).await.unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server.get_api("/expenses?type=expense", None).await.unwrap();
    let expenses: Vec<TransactionBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(expenses.len(), 2);
    assert!(expenses.iter().all(|tx| tx.kind == "expense"));

    let response = server.get_api("/expenses?category=Food", None).await.unwrap();
    let food: Vec<TransactionBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(food.len(), 1);

    let response = server
        .get_api("/expenses?startDate=2024-03-01&endDate=2024-01-01", None)
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_QUERY_PARAMETER");

    let response = server.get_api("/stats", None).await.unwrap();
    let stats: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stats["totalIncome"], json!(3000.0));
    assert_eq!(stats["totalExpenses"], json!(250.0));
    assert_eq!(stats["balance"], json!(2750.0));
    assert_eq!(stats["totalTransactions"], json!(3));
    assert_eq!(stats["categoryRanking"][0]["category"], "Food");
}

#[tokio::test]
async fn test_transaction_categories() {
    let server = TestServer::start().await.unwrap();

    let response = server.get_api("/expenses/categories", None).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body["expense"]
        .as_array()
        .is_some_and(|c| c.contains(&json!("Food"))));
    assert!(body["income"]
        .as_array()
        .is_some_and(|c| c.contains(&json!("Salary"))));
}

// ============================================================================
// Rate Limiting Tests
// ============================================================================

#[tokio::test]
async fn test_rate_limit_spares_health_routes() {
    let server = TestServer::start_with(|key| match key {
        "RATE_LIMIT_REQUESTS_PER_SECOND" => Some("1".to_string()),
        "RATE_LIMIT_BURST" => Some("1".to_string()),
        _ => None,
    })
    .await
    .unwrap();

    let first = server.get_api("/expenses/categories", None).await.unwrap();
    assert_status(first, StatusCode::OK).await.unwrap();

    let second = server.get_api("/expenses/categories", None).await.unwrap();
    assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);

    let url = format!("{}/health", server.base_url());
    let health = server.get(&url).await.unwrap();
    assert_status(health, StatusCode::OK).await.unwrap();
}
