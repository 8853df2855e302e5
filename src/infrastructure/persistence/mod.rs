//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx prepared
//! statements. Driver errors are translated into
//! [`StoreError`](crate::domain::error::StoreError) here and never escape.
//!
//! # Repositories
//!
//! - [`PgAliasRepository`] - Alias mapping storage

pub mod pg_alias_repository;

pub use pg_alias_repository::PgAliasRepository;
