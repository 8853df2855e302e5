//! Handler for alias redirects.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its destination URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// Every request reads from the database; there is no cache in front of it.
///
/// # Errors
///
/// Returns 404 Not Found if the alias doesn't exist.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let destination = state.alias_service.resolve(&alias).await?;

    let location = HeaderValue::from_str(&destination).map_err(|_| {
        AppError::internal(
            "Stored URL is not a valid Location header",
            json!({ "alias": alias }),
        )
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}
