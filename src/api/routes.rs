//! API route configuration.

use crate::api::handlers::{delete_handler, save_handler};
use crate::state::AppState;
use axum::{Router, routing::post};

/// Alias management routes.
///
/// # Endpoints
///
/// - `POST /`    - Save a mapping (alias optional)
/// - `POST /del` - Delete an alias owned by the caller
pub fn alias_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(save_handler))
        .route("/del", post(delete_handler))
}
