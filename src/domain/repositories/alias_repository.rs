//! Repository trait for alias mapping data access.

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::error::StoreResult;
use async_trait::async_trait;

/// Repository interface for alias mappings.
///
/// Implementations must be safe for concurrent use without external locking.
/// Alias uniqueness is enforced atomically by the storage engine, never by a
/// read followed by an insert.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAliasRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AliasRepository: Send + Sync {
    /// Creates the backing table and index if they do not exist yet.
    ///
    /// Safe to call on every process start.
    async fn ensure_schema(&self) -> StoreResult<()>;

    /// Inserts a new mapping and returns its surrogate id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AliasExists`](crate::domain::error::StoreError::AliasExists)
    /// if the alias is already taken, or a storage failure otherwise.
    async fn save_url(&self, new_mapping: NewMapping) -> StoreResult<i64>;

    /// Looks up the destination stored for `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AliasNotFound`](crate::domain::error::StoreError::AliasNotFound)
    /// if no mapping exists.
    async fn get_url(&self, alias: &str) -> StoreResult<String>;

    /// Returns the full mapping for `alias`, including its owner.
    ///
    /// Used by administrative tooling; the redirect path uses [`Self::get_url`].
    async fn find_mapping(&self, alias: &str) -> StoreResult<Option<Mapping>>;

    /// Deletes the mapping for `alias` if it is owned by `owner`.
    ///
    /// Deleting an alias that does not exist succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::WrongUser`](crate::domain::error::StoreError::WrongUser)
    /// if the alias exists under a different owner. The mapping is left intact.
    async fn delete_alias(&self, alias: &str, owner: &str) -> StoreResult<()>;

    /// Performs a trivial round-trip to the storage engine.
    async fn ping(&self) -> StoreResult<()>;
}
