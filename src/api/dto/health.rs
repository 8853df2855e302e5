//! Response body of `GET /health`.

use serde::Serialize;

/// Overall verdict plus the per-dependency results it was derived from.
///
/// `status` is `"healthy"` when every check passed and `"degraded"` otherwise.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

/// Per-dependency results; the alias store is the only one checked.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: CheckStatus,
}

/// `"ok"` or `"error"`, with an optional human-readable note.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
