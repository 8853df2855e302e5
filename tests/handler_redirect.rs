mod common;

use alias_shortener::api::handlers::redirect_handler;
use axum::{Router, routing::get};
use axum_test::TestServer;
use sqlx::PgPool;

fn server(pool: PgPool) -> TestServer {
    let app = Router::new()
        .route("/{alias}", get(redirect_handler))
        .with_state(common::create_test_state(pool));

    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_redirect_success(pool: PgPool) {
    common::create_test_mapping(&pool, "target", "https://example.com/target", "alice").await;
    let server = server(pool);

    let response = server.get("/target").await;

    assert_eq!(response.status_code(), 302);

    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[sqlx::test]
async fn test_redirect_not_found(pool: PgPool) {
    let server = server(pool);

    let response = server.get("/notfound").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[sqlx::test]
async fn test_redirect_is_case_sensitive(pool: PgPool) {
    common::create_test_mapping(&pool, "CaSe", "https://example.com", "alice").await;
    let server = server(pool);

    server.get("/case").await.assert_status_not_found();
    assert_eq!(server.get("/CaSe").await.status_code(), 302);
}
