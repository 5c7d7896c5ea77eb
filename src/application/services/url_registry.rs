//! Short code registry: allocation, resolution, update and removal.

use std::sync::Arc;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::error::RegistryError;
use crate::domain::repositories::UrlRepository;
use crate::utils::code_generator::CodeGenerator;
use crate::utils::timestamp;

/// Default number of attempts made by [`UrlRegistry::create`] before giving up.
///
/// With 2^32 possible codes, reaching this bound means the code space is
/// close to full or the generator is broken.
pub const DEFAULT_MAX_CREATE_ATTEMPTS: usize = 256;

/// Registry owning the short code → URL mapping.
///
/// Uniqueness is enforced twice: a cheap existence check skips codes that
/// are already taken, and the `UNIQUE` constraint on `short_code` rejects
/// an insert that lost a race against a concurrent writer. Both count as a
/// collision and trigger a retry with a fresh code.
pub struct UrlRegistry<R: UrlRepository> {
    repository: Arc<R>,
    generator: Arc<dyn CodeGenerator>,
    max_attempts: usize,
}

impl<R: UrlRepository> UrlRegistry<R> {
    /// Creates a registry with an explicit generator and retry bound.
    ///
    /// `max_attempts` is raised to 1 if zero.
    pub fn with_generator(
        repository: Arc<R>,
        generator: Arc<dyn CodeGenerator>,
        max_attempts: usize,
    ) -> Self {
        Self {
            repository,
            generator,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Stores `url` under a fresh short code and returns the code.
    ///
    /// `url` must already be validated (see [`crate::utils::url_validator`]).
    /// Exactly one row is inserted on success.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidUrl`] if `url` is empty.
    /// Returns [`RegistryError::Exhausted`] if every attempt collided.
    /// Returns [`RegistryError::StoreUnavailable`] on database errors.
    pub async fn create(&self, url: &str) -> Result<String, RegistryError> {
        if url.is_empty() {
            return Err(RegistryError::InvalidUrl {
                reason: "URL must not be empty".to_string(),
            });
        }

        for attempt in 1..=self.max_attempts {
            let code = self.generator.generate();

            if self.repository.exists(&code).await? {
                tracing::debug!(attempt, code = %code, "Generated code already taken, retrying");
                continue;
            }

            let new_record = NewUrlRecord {
                url: url.to_string(),
                short_code: code,
                created_at: timestamp::now(),
            };

            match self.repository.insert(new_record).await {
                Ok(record) => {
                    tracing::info!(
                        short_code = %record.short_code,
                        id = record.id,
                        attempt,
                        "Short code created"
                    );
                    return Ok(record.short_code);
                }
                Err(RegistryError::DuplicateCode { code }) => {
                    tracing::warn!(attempt, code = %code, "Concurrent insert took code, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        tracing::error!(
            attempts = self.max_attempts,
            "Failed to generate unique code"
        );
        Err(RegistryError::Exhausted {
            attempts: self.max_attempts,
        })
    }

    /// Returns the URL stored under `short_code`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no record matches.
    /// Returns [`RegistryError::StoreUnavailable`] on database errors.
    pub async fn resolve(&self, short_code: &str) -> Result<String, RegistryError> {
        self.get(short_code).await.map(|record| record.url)
    }

    /// Returns the full record stored under `short_code`.
    ///
    /// # Errors
    ///
    /// See [`Self::resolve`].
    pub async fn get(&self, short_code: &str) -> Result<UrlRecord, RegistryError> {
        self.repository
            .find_by_code(short_code)
            .await?
            .ok_or_else(|| RegistryError::not_found(short_code))
    }

    /// Points `short_code` at `new_url` and bumps `updated_at`.
    ///
    /// `short_code` and `created_at` are left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidUrl`] if `new_url` is empty.
    /// Returns [`RegistryError::NotFound`] if no record matches.
    /// Returns [`RegistryError::StoreUnavailable`] on database errors.
    pub async fn update(&self, short_code: &str, new_url: &str) -> Result<UrlRecord, RegistryError> {
        if new_url.is_empty() {
            return Err(RegistryError::InvalidUrl {
                reason: "URL must not be empty".to_string(),
            });
        }

        let record = self
            .repository
            .update_url(short_code, new_url, timestamp::now())
            .await?
            .ok_or_else(|| RegistryError::not_found(short_code))?;

        tracing::info!(short_code, "Short code updated");
        Ok(record)
    }

    /// Removes the record stored under `short_code`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no record matches.
    /// Returns [`RegistryError::StoreUnavailable`] on database errors.
    pub async fn delete(&self, short_code: &str) -> Result<(), RegistryError> {
        if !self.repository.delete(short_code).await? {
            return Err(RegistryError::not_found(short_code));
        }

        tracing::info!(short_code, "Short code deleted");
        Ok(())
    }

    /// Number of stored records.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::StoreUnavailable`] on database errors.
    pub async fn count(&self) -> Result<i64, RegistryError> {
        self.repository.count().await
    }
}
