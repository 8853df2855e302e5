//! Alias creation, resolution and deletion service.

use regex::Regex;
use serde_json::json;
use std::sync::{Arc, LazyLock};
use url::Url;

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::error::StoreError;
use crate::domain::repositories::AliasRepository;
use crate::error::AppError;
use crate::utils::alias_generator::{ALIAS_LENGTH, generate};

/// Number of generate-then-save attempts before giving up on a random alias.
pub const MAX_GENERATE_ATTEMPTS: usize = 5;

/// Longest alias a caller may supply.
pub const MAX_ALIAS_LENGTH: usize = 64;

/// Aliases that would be shadowed by fixed routes.
const RESERVED_ALIASES: &[&str] = &["health", "del"];

/// Characters allowed in a caller-supplied alias (must fit in one path segment).
static ALIAS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("alias regex is valid"));

/// Service for managing alias mappings.
///
/// Wraps an [`AliasRepository`] with input validation and the retry policy for
/// randomly generated aliases. Works with any repository, including trait
/// objects (`AliasService<dyn AliasRepository>`).
pub struct AliasService<R: AliasRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: AliasRepository + ?Sized> AliasService<R> {
    /// Creates a new alias service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Stores a mapping and returns the alias used.
    ///
    /// A blank or missing `alias` means "generate one": up to
    /// [`MAX_GENERATE_ATTEMPTS`] random aliases are tried, retrying whenever the
    /// store reports a collision. A caller-supplied alias is tried exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the owner is blank, the destination
    /// is not an absolute http(s) URL, or the supplied alias is malformed.
    ///
    /// Returns [`AppError::Conflict`] if the supplied alias already exists.
    ///
    /// Returns [`AppError::Internal`] on storage failures or when every
    /// generated alias collided.
    pub async fn save(
        &self,
        destination: &str,
        alias: Option<&str>,
        owner: &str,
    ) -> Result<String, AppError> {
        validate_owner(owner)?;
        validate_destination(destination)?;

        match alias.filter(|a| !a.trim().is_empty()) {
            Some(alias) => {
                validate_alias(alias)?;
                let id = self
                    .repository
                    .save_url(NewMapping::new(alias, destination, owner))
                    .await?;

                tracing::info!(id, alias, "Alias saved");
                Ok(alias.to_string())
            }
            None => self.save_generated(destination, owner).await,
        }
    }

    async fn save_generated(&self, destination: &str, owner: &str) -> Result<String, AppError> {
        for attempt in 1..=MAX_GENERATE_ATTEMPTS {
            let alias = generate(ALIAS_LENGTH);

            match self
                .repository
                .save_url(NewMapping::new(alias.as_str(), destination, owner))
                .await
            {
                Ok(id) => {
                    tracing::info!(id, alias = %alias, "Generated alias saved");
                    return Ok(alias);
                }
                Err(StoreError::AliasExists(_)) => {
                    tracing::warn!(attempt, alias = %alias, "Generated alias collided, retrying");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique alias",
            json!({ "attempts": MAX_GENERATE_ATTEMPTS }),
        ))
    }

    /// Resolves an alias to its destination URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the alias is blank or unknown.
    /// Returns [`AppError::Internal`] on storage failures.
    pub async fn resolve(&self, alias: &str) -> Result<String, AppError> {
        if alias.trim().is_empty() {
            return Err(AppError::not_found("Alias not found", json!({ "alias": alias })));
        }

        let destination = self.repository.get_url(alias).await?;
        tracing::debug!(alias, destination = %destination, "Alias resolved");

        Ok(destination)
    }

    /// Deletes an alias owned by `owner`.
    ///
    /// Deleting an alias that does not exist succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if alias or owner is blank.
    /// Returns [`AppError::Forbidden`] if the alias belongs to another owner.
    /// Returns [`AppError::Internal`] on storage failures.
    pub async fn delete(&self, alias: &str, owner: &str) -> Result<(), AppError> {
        if alias.trim().is_empty() {
            return Err(AppError::bad_request("Alias is empty", json!({})));
        }
        validate_owner(owner)?;

        self.repository.delete_alias(alias, owner).await?;
        tracing::info!(alias, "Alias deleted");

        Ok(())
    }

    /// Returns the full mapping for an alias.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the alias is unknown.
    pub async fn describe(&self, alias: &str) -> Result<Mapping, AppError> {
        self.repository
            .find_mapping(alias)
            .await?
            .ok_or_else(|| AppError::not_found("Alias not found", json!({ "alias": alias })))
    }

    /// Checks that the backing store answers.
    pub async fn ping(&self) -> Result<(), StoreError> {
        self.repository.ping().await
    }
}

fn validate_owner(owner: &str) -> Result<(), AppError> {
    if owner.trim().is_empty() {
        return Err(AppError::bad_request("User is empty", json!({})));
    }
    Ok(())
}

/// Accepts absolute `http`/`https` URLs with a host.
///
/// The destination is stored verbatim and later sent as a `Location` header,
/// so ASCII control characters are rejected even though `Url::parse` would
/// silently encode or strip them.
fn validate_destination(destination: &str) -> Result<(), AppError> {
    if destination.chars().any(|c| c.is_ascii_control()) {
        return Err(AppError::bad_request(
            "URL must not contain control characters",
            json!({ "url": destination }),
        ));
    }

    let parsed = Url::parse(destination).map_err(|e| {
        AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
    })?;

    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(AppError::bad_request(
            "URL must be an absolute http or https URL",
            json!({ "url": destination }),
        ));
    }

    Ok(())
}

/// Validates a caller-supplied alias.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters, digits, `-` and `_` (so surrounding
///   whitespace is rejected, never trimmed)
/// - Cannot be a reserved route name
fn validate_alias(alias: &str) -> Result<(), AppError> {
    if alias.len() > MAX_ALIAS_LENGTH {
        return Err(AppError::bad_request(
            "Alias is too long",
            json!({ "max_length": MAX_ALIAS_LENGTH, "provided_length": alias.len() }),
        ));
    }

    if !ALIAS_REGEX.is_match(alias) {
        return Err(AppError::bad_request(
            "Alias can only contain letters, digits, hyphens and underscores",
            json!({ "alias": alias }),
        ));
    }

    if RESERVED_ALIASES.contains(&alias) {
        return Err(AppError::bad_request(
            "This alias is reserved",
            json!({ "alias": alias }),
        ));
    }

    Ok(())
}
