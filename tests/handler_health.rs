mod common;

use alias_shortener::api::handlers::health_handler;
use axum::{Router, routing::get};
use axum_test::TestServer;
use sqlx::PgPool;

#[sqlx::test]
async fn test_health_endpoint_success(pool: PgPool) {
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(common::create_test_state(pool));

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert!(json.get("version").is_some());
}

#[sqlx::test]
async fn test_health_endpoint_degraded_when_pool_closed(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    pool.close().await;

    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status(axum::http::StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
}
