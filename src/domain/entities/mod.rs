//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`Mapping`] - A persisted alias → destination mapping
//! - [`NewMapping`] - Input for creating a mapping

pub mod mapping;

pub use mapping::{Mapping, NewMapping};
