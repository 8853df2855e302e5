mod common;

use alias_shortener::routes::router;
use axum_test::TestServer;
use serde_json::json;
use sqlx::PgPool;
use std::time::Duration;

fn server(pool: PgPool) -> TestServer {
    let app = router(common::create_test_state(pool), Duration::from_secs(4));
    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_save_resolve_delete_scenario(pool: PgPool) {
    let server = server(pool);

    let response = server
        .post("/")
        .json(&json!({ "url": "https://example.com", "alias": "abc", "user": "alice" }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);

    let response = server.get("/abc").await;
    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com");

    server
        .post("/del")
        .json(&json!({ "alias": "abc", "user": "bob" }))
        .await
        .assert_status_forbidden();

    server
        .post("/del")
        .json(&json!({ "alias": "abc", "user": "alice" }))
        .await
        .assert_status_ok();

    server.get("/abc").await.assert_status_not_found();
}

#[sqlx::test]
async fn test_request_id_is_generated(pool: PgPool) {
    let server = server(pool);

    let response = server.get("/health").await;

    response.assert_status_ok();
    assert!(response.maybe_header("x-request-id").is_some());
}

#[sqlx::test]
async fn test_request_id_is_propagated(pool: PgPool) {
    let server = server(pool);

    let response = server
        .get("/health")
        .add_header("x-request-id", "test-request-42")
        .await;

    assert_eq!(response.header("x-request-id"), "test-request-42");
}

#[sqlx::test]
async fn test_health_route_wins_over_alias(pool: PgPool) {
    common::create_test_mapping(&pool, "health", "https://example.com", "alice").await;
    let server = server(pool);

    let response = server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["status"], "healthy");
}
