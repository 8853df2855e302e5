//! Handler for the alias delete endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::alias::{AliasResponse, DeleteRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Deletes an alias owned by the requesting user.
///
/// # Endpoint
///
/// `POST /del`
///
/// # Request Body
///
/// ```json
/// { "alias": "docs", "user": "alice" }
/// ```
///
/// Deleting an alias that does not exist is reported as success.
///
/// # Errors
///
/// - 400 Bad Request if alias or user is empty
/// - 403 Forbidden if the alias belongs to another user
pub async fn delete_handler(
    State(state): State<AppState>,
    Json(payload): Json<DeleteRequest>,
) -> Result<Json<AliasResponse>, AppError> {
    payload.validate()?;

    state
        .alias_service
        .delete(&payload.alias, &payload.user)
        .await?;

    Ok(Json(AliasResponse::ok(payload.alias)))
}
