//! Repository trait for URL record data access.

use chrono::{DateTime, Utc};

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::error::RegistryError;
use async_trait::async_trait;

/// Repository interface for stored short code mappings.
///
/// Each method runs as its own statement against the store; no connection
/// or transaction outlives a call.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new record with `updated_at = created_at`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateCode`] if the short code is already stored.
    /// Returns [`RegistryError::StoreUnavailable`] on database errors.
    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, RegistryError>;

    /// Finds a record by its exact short code.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::StoreUnavailable`] on database errors.
    async fn find_by_code(&self, short_code: &str) -> Result<Option<UrlRecord>, RegistryError>;

    /// Returns true if a record exists for the short code.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::StoreUnavailable`] on database errors.
    async fn exists(&self, short_code: &str) -> Result<bool, RegistryError>;

    /// Replaces the URL of a record and bumps `updated_at`.
    ///
    /// `updated_at` never moves below its stored value, so `created_at <= updated_at`
    /// survives clock steps. Returns `Ok(None)` if no record matched.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::StoreUnavailable`] on database errors.
    async fn update_url(
        &self,
        short_code: &str,
        url: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<UrlRecord>, RegistryError>;

    /// Removes a record. Returns `Ok(false)` if no record matched.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::StoreUnavailable`] on database errors.
    async fn delete(&self, short_code: &str) -> Result<bool, RegistryError>;

    /// Counts stored records.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::StoreUnavailable`] on database errors.
    async fn count(&self) -> Result<i64, RegistryError>;
}
