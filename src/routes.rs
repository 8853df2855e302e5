//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /`         - Save a mapping
//! - `POST /del`      - Delete an alias
//! - `GET  /health`   - Health check
//! - `GET  /{alias}`  - Alias redirect
//!
//! # Middleware
//!
//! - **Request id** - `x-request-id` assigned and echoed back
//! - **Tracing** - Structured request/response logging
//! - **Timeout** - Requests exceeding the configured timeout get 408
//! - **Panic recovery** - A panicking handler yields 500 instead of a dropped connection
//! - **Path normalization** - Trailing slash handling

use std::time::Duration;

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{request_id, tracing};
use crate::state::AppState;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower::Layer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::timeout::TimeoutLayer;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `request_timeout` - upper bound on handler execution time
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, request_timeout))
}

/// Routes and middleware without path normalization.
pub fn router(state: AppState, request_timeout: Duration) -> Router {
    let routes = Router::new()
        .merge(api::routes::alias_routes())
        .route("/health", get(health_handler))
        .route("/{alias}", get(redirect_handler))
        .with_state(state);

    with_middleware(routes, request_timeout)
}

/// Wraps already-registered routes in the request middleware stack.
///
/// Layers apply only to routes present when this is called.
pub fn with_middleware(routes: Router, request_timeout: Duration) -> Router {
    routes
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(request_id::propagate_layer())
        .layer(tracing::layer())
        .layer(request_id::set_layer())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockAliasRepository;
    use axum_test::TestServer;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    fn server(repo: MockAliasRepository) -> TestServer {
        let state = AppState::new(Arc::new(repo));
        TestServer::new(router(state, Duration::from_secs(4))).unwrap()
    }

    #[tokio::test]
    async fn test_url_with_control_characters_is_rejected() {
        let mut repo = MockAliasRepository::new();
        repo.expect_save_url().times(0);
        repo.expect_get_url().times(0);
        let server = server(repo);

        let response = server
            .post("/")
            .json(&json!({
                "url": "https://example.com/a\u{1}b",
                "alias": "ctl",
                "user": "alice"
            }))
            .await;

        response.assert_status_bad_request();
        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"]["code"], "validation_error");
    }

    #[tokio::test]
    async fn test_saved_destination_becomes_location() {
        let stored = Arc::new(Mutex::new(None::<String>));
        let mut repo = MockAliasRepository::new();

        let saved = stored.clone();
        repo.expect_save_url().times(1).returning(move |m| {
            *saved.lock().unwrap() = Some(m.destination);
            Ok(1)
        });
        let lookup = stored.clone();
        repo.expect_get_url()
            .withf(|alias| alias == "cafe")
            .times(1)
            .returning(move |alias| {
                lookup
                    .lock()
                    .unwrap()
                    .clone()
                    .ok_or_else(|| crate::domain::error::StoreError::AliasNotFound(alias.into()))
            });
        let server = server(repo);

        let destination = "https://example.com/caf\u{e9}?q=1";
        server
            .post("/")
            .json(&json!({ "url": destination, "alias": "cafe", "user": "alice" }))
            .await
            .assert_status(StatusCode::CREATED);

        let response = server.get("/cafe").await;

        assert_eq!(response.status_code(), StatusCode::FOUND);
        assert_eq!(response.header("location").as_bytes(), destination.as_bytes());
    }

    async fn slow() -> &'static str {
        tokio::time::sleep(Duration::from_secs(5)).await;
        "done"
    }

    async fn panics() -> &'static str {
        panic!("handler failed")
    }

    #[tokio::test]
    async fn test_slow_request_times_out_with_408() {
        let app = with_middleware(
            Router::new().route("/slow", get(slow)),
            Duration::from_millis(50),
        );
        let server = TestServer::new(app).unwrap();

        let response = server.get("/slow").await;

        response.assert_status(StatusCode::REQUEST_TIMEOUT);
        assert!(response.maybe_header("x-request-id").is_some());
    }

    #[tokio::test]
    async fn test_panicking_handler_returns_500() {
        let app = with_middleware(
            Router::new().route("/panic", get(panics)),
            Duration::from_secs(4),
        );
        let server = TestServer::new(app).unwrap();

        let response = server.get("/panic").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }
}
