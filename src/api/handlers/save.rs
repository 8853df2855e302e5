//! Handler for the alias save endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::alias::{AliasResponse, SaveRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Stores a mapping from an alias to a destination URL.
///
/// # Endpoint
///
/// `POST /`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "alias": "docs",   // optional, generated when absent or empty
///   "user": "alice"
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "status": "OK", "alias": "docs" }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if the URL, alias or user is invalid
/// - 409 Conflict if the alias already exists
pub async fn save_handler(
    State(state): State<AppState>,
    Json(payload): Json<SaveRequest>,
) -> Result<(StatusCode, Json<AliasResponse>), AppError> {
    payload.validate()?;

    let alias = state
        .alias_service
        .save(&payload.url, payload.alias.as_deref(), &payload.user)
        .await?;

    Ok((StatusCode::CREATED, Json(AliasResponse::ok(alias))))
}
