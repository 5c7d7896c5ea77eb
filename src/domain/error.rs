//! Error taxonomy of the URL registry.

use thiserror::Error;

/// Failures produced by registry operations and the storage behind them.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Input could not be turned into an absolute HTTP(S) URL.
    #[error("Invalid URL: {reason}")]
    InvalidUrl { reason: String },

    /// No record is stored under the given short code.
    #[error("Short code not found: {code}")]
    NotFound { code: String },

    /// Insert rejected by the `short_code` uniqueness constraint.
    ///
    /// Used by the registry as a retry signal; callers only ever see
    /// [`RegistryError::Exhausted`] once retries run out.
    #[error("Short code already taken: {code}")]
    DuplicateCode { code: String },

    /// Every candidate code collided with an existing record.
    #[error("Failed to allocate a unique short code after {attempts} attempts")]
    Exhausted { attempts: usize },

    /// The backing store could not serve the request.
    #[error("Storage unavailable: {reason}")]
    StoreUnavailable { reason: String },
}

impl RegistryError {
    pub fn not_found(code: impl Into<String>) -> Self {
        Self::NotFound { code: code.into() }
    }

    pub fn store_unavailable(reason: impl Into<String>) -> Self {
        Self::StoreUnavailable {
            reason: reason.into(),
        }
    }
}

impl From<sqlx::Error> for RegistryError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = %e, "Store operation failed");
        Self::store_unavailable(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_contains_code() {
        let err = RegistryError::not_found("ab12cd");
        assert!(err.to_string().contains("ab12cd"));
    }

    #[test]
    fn test_exhausted_message_contains_attempts() {
        let err = RegistryError::Exhausted { attempts: 256 };
        assert!(err.to_string().contains("256"));
    }

    #[test]
    fn test_sqlx_error_maps_to_store_unavailable() {
        let err: RegistryError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, RegistryError::StoreUnavailable { .. }));
    }
}
