//! Business logic services for the application layer.

pub mod url_registry;

pub use url_registry::{DEFAULT_MAX_CREATE_ATTEMPTS, UrlRegistry};
