//! Domain layer containing the URL record model and storage contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures ([`entities::UrlRecord`])
//! - [`repositories`] - Data access trait definitions
//! - [`error`] - Typed failures surfaced by the registry
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business logic lives in [`crate::application::services`]

pub mod entities;
pub mod error;
pub mod repositories;

pub use error::RegistryError;
