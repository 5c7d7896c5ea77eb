//! # URL Registry
//!
//! A small URL shortening service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - URL record entity, repository trait, error taxonomy
//! - **Application Layer** ([`application`]) - [`application::services::UrlRegistry`]
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Short Codes
//!
//! Codes are 6 URL-safe characters drawn from 4 random bytes. Uniqueness is
//! backed by a `UNIQUE` constraint on `short_code`; a collision, whether seen
//! before insert or reported by the constraint, triggers a bounded retry.
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://urls.db"
//! cargo run
//!
//! curl -X POST localhost:3000/shorten -d 'example.com/docs'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::UrlRegistry;
    pub use crate::domain::RegistryError;
    pub use crate::domain::entities::{NewUrlRecord, UrlRecord};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
