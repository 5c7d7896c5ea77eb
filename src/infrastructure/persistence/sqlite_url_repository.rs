//! SQLite implementation of the URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::error::RegistryError;
use crate::domain::repositories::UrlRepository;
use crate::utils::db_error::is_unique_violation_on_code;
use crate::utils::timestamp;

/// Row shape of the `shortened_urls` table; timestamps are stored as text.
#[derive(Debug, FromRow)]
struct UrlRow {
    id: i64,
    url: String,
    short_code: String,
    created_at: String,
    updated_at: String,
}

impl TryFrom<UrlRow> for UrlRecord {
    type Error = RegistryError;

    fn try_from(row: UrlRow) -> Result<Self, Self::Error> {
        let parse = |text: &str| {
            timestamp::parse(text).map_err(|e| {
                tracing::error!(short_code = %row.short_code, value = text, "Corrupt timestamp in store");
                RegistryError::store_unavailable(format!("Corrupt timestamp '{text}': {e}"))
            })
        };
        let created_at = parse(&row.created_at)?;
        let updated_at = parse(&row.updated_at)?;

        Ok(UrlRecord::new(
            row.id,
            row.url,
            row.short_code,
            created_at,
            updated_at,
        ))
    }
}

/// SQLite repository for URL records.
///
/// Every method issues a single statement on a pooled connection, which is
/// returned to the pool when the call finishes, whatever the outcome.
pub struct SqliteUrlRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, RegistryError> {
        let created_at = timestamp::format(new_record.created_at);

        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            INSERT INTO shortened_urls (url, short_code, created_at, updated_at)
            VALUES (?, ?, ?, ?)
            RETURNING id, url, short_code, created_at, updated_at
            "#,
        )
        .bind(&new_record.url)
        .bind(&new_record.short_code)
        .bind(&created_at)
        .bind(&created_at)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on_code(&e) {
                RegistryError::DuplicateCode {
                    code: new_record.short_code.clone(),
                }
            } else {
                e.into()
            }
        })?;

        row.try_into()
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<UrlRecord>, RegistryError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, url, short_code, created_at, updated_at
            FROM shortened_urls
            WHERE short_code = ?
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(UrlRecord::try_from).transpose()
    }

    async fn exists(&self, short_code: &str) -> Result<bool, RegistryError> {
        let found: i64 = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM shortened_urls WHERE short_code = ?)",
        )
        .bind(short_code)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(found != 0)
    }

    async fn update_url(
        &self,
        short_code: &str,
        url: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<UrlRecord>, RegistryError> {
        // Text timestamps share one fixed-width format, so MAX() orders them by time.
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            UPDATE shortened_urls
            SET url = ?, updated_at = MAX(updated_at, ?)
            WHERE short_code = ?
            RETURNING id, url, short_code, created_at, updated_at
            "#,
        )
        .bind(url)
        .bind(timestamp::format(updated_at))
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(UrlRecord::try_from).transpose()
    }

    async fn delete(&self, short_code: &str) -> Result<bool, RegistryError> {
        let result = sqlx::query("DELETE FROM shortened_urls WHERE short_code = ?")
            .bind(short_code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, RegistryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM shortened_urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
