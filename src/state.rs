//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::AliasService;
use crate::domain::repositories::AliasRepository;

/// State shared by all request handlers.
///
/// Holds the storage handle indirectly through the service; the pool itself
/// is owned by [`crate::server::run`] and closed on shutdown.
#[derive(Clone)]
pub struct AppState {
    pub alias_service: Arc<AliasService<dyn AliasRepository>>,
}

impl AppState {
    /// Builds state around any alias repository.
    pub fn new(repository: Arc<dyn AliasRepository>) -> Self {
        Self {
            alias_service: Arc::new(AliasService::new(repository)),
        }
    }
}
