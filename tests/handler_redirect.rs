mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use linksnip::api::handlers::redirect_handler;
use sqlx::PgPool;

fn redirect_app(state: linksnip::AppState) -> Router {
    Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state)
}

#[sqlx::test]
async fn test_redirect_success(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(redirect_app(state)).unwrap();

    common::create_test_link(&pool, "redir1", "https://example.com/target").await;

    let response = server.get("/redir1").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[sqlx::test]
async fn test_redirect_not_found(pool: PgPool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(redirect_app(state)).unwrap();

    let response = server.get("/ghost1").await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_redirect_counts_click(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(redirect_app(state)).unwrap();

    common::create_test_link(&pool, "count1", "https://example.com").await;

    let response = server.get("/count1").await;
    assert_eq!(response.status_code(), 302);

    let (clicks, last_clicked) = common::fetch_counters(&pool, "count1").await;
    assert_eq!(clicks, 1);
    assert!(last_clicked.is_some());
}

#[sqlx::test]
async fn test_redirect_returns_stored_target_unchanged(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(redirect_app(state)).unwrap();

    // Pre-existing counters must not affect the returned destination.
    common::create_clicked_link(&pool, "click5", "https://example.com/Page?q=1", 5).await;

    let response = server.get("/click5").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/Page?q=1");

    let (clicks, _) = common::fetch_counters(&pool, "click5").await;
    assert_eq!(clicks, 6);
}
