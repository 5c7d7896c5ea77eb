//! Shared state injected into every HTTP handler.

use std::sync::Arc;

use crate::application::services::UrlRegistry;
use crate::infrastructure::persistence::SqliteUrlRepository;

/// Registry type served over HTTP.
pub type Registry = UrlRegistry<SqliteUrlRepository>;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
}

impl AppState {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }
}
