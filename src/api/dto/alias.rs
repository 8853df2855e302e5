//! DTOs for alias save and delete endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to store a mapping.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveRequest {
    /// Destination URL (must be a valid URL).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    /// Optional alias; a random one is generated when absent or empty.
    pub alias: Option<String>,

    /// Owner label used to authorize deletion.
    #[validate(length(min = 1, message = "User is required"))]
    pub user: String,
}

/// Request to delete an alias.
#[derive(Debug, Deserialize, Validate)]
pub struct DeleteRequest {
    #[validate(length(min = 1, message = "Alias is required"))]
    pub alias: String,

    #[validate(length(min = 1, message = "User is required"))]
    pub user: String,
}

/// Successful save or delete response.
#[derive(Debug, Serialize)]
pub struct AliasResponse {
    pub status: &'static str,
    pub alias: String,
}

impl AliasResponse {
    pub fn ok(alias: impl Into<String>) -> Self {
        Self {
            status: "OK",
            alias: alias.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_request_without_alias() {
        let request: SaveRequest =
            serde_json::from_str(r#"{"url": "https://example.com", "user": "alice"}"#).unwrap();

        assert!(request.alias.is_none());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_save_request_rejects_bad_url_and_empty_user() {
        let request = SaveRequest {
            url: "not a url".to_string(),
            alias: None,
            user: String::new(),
        };

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("url"));
        assert!(fields.contains_key("user"));
    }

    #[test]
    fn test_delete_request_requires_both_fields() {
        let request = DeleteRequest {
            alias: String::new(),
            user: "alice".to_string(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_alias_response_serialization() {
        let json = serde_json::to_value(AliasResponse::ok("abc")).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "OK", "alias": "abc" }));
    }
}
