//! Domain layer containing the alias mapping model and storage contract.
//!
//! The domain layer has no knowledge of HTTP or PostgreSQL. It defines what a
//! mapping is, which errors the store may report, and the repository trait the
//! infrastructure layer implements.
//!
//! # Architecture
//!
//! - [`entities`] - Persisted data structures
//! - [`error`] - Store error taxonomy ([`error::StoreError`])
//! - [`repositories`] - Data access trait definitions
//!
//! # Mapping Lifecycle
//!
//! Each alias is either absent or present:
//!
//! 1. `save_url` moves an absent alias to present (fails if already present)
//! 2. `get_url` reads a present alias without changing it
//! 3. `delete_alias` moves a present alias back to absent, gated by owner match

pub mod entities;
pub mod error;
pub mod repositories;
