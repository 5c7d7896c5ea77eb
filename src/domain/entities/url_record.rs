//! URL record entity representing a short code mapping.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A shortened URL with its bookkeeping timestamps.
///
/// Timestamps carry second precision; `created_at <= updated_at` holds for
/// every record read back from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlRecord {
    pub id: i64,
    pub url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(
        id: i64,
        url: String,
        short_code: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            url,
            short_code,
            created_at,
            updated_at,
        }
    }

    /// Returns true if the URL was changed after creation.
    pub fn is_modified(&self) -> bool {
        self.updated_at > self.created_at
    }
}

/// Input data for inserting a new record.
#[derive(Debug, Clone)]
pub struct NewUrlRecord {
    pub url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
}
