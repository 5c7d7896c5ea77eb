mod common;

use chrono::{Duration, TimeZone, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;
use url_registry::domain::RegistryError;
use url_registry::domain::entities::NewUrlRecord;
use url_registry::domain::repositories::UrlRepository;
use url_registry::infrastructure::persistence::SqliteUrlRepository;

fn new_record(code: &str, url: &str) -> NewUrlRecord {
    NewUrlRecord {
        url: url.to_string(),
        short_code: code.to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
    }
}

#[sqlx::test]
async fn test_insert_record(pool: SqlitePool) {
    let repo = SqliteUrlRepository::new(Arc::new(pool));

    let record = repo
        .insert(new_record("abc123", "https://example.com/"))
        .await
        .unwrap();

    assert!(record.id > 0);
    assert_eq!(record.short_code, "abc123");
    assert_eq!(record.url, "https://example.com/");
    assert_eq!(record.created_at, record.updated_at);
    assert!(!record.is_modified());
}

#[sqlx::test]
async fn test_insert_duplicate_code(pool: SqlitePool) {
    let repo = SqliteUrlRepository::new(Arc::new(pool.clone()));

    repo.insert(new_record("dup001", "https://example.com/a"))
        .await
        .unwrap();
    let err = repo
        .insert(new_record("dup001", "https://example.com/b"))
        .await
        .unwrap_err();

    assert!(matches!(err, RegistryError::DuplicateCode { code } if code == "dup001"));
    assert_eq!(common::count_records(&pool).await, 1);
}

#[sqlx::test]
async fn test_insert_empty_url_rejected_by_store(pool: SqlitePool) {
    let repo = SqliteUrlRepository::new(Arc::new(pool.clone()));

    let err = repo.insert(new_record("empty1", "")).await.unwrap_err();

    assert!(matches!(err, RegistryError::StoreUnavailable { .. }));
    assert_eq!(common::count_records(&pool).await, 0);
}

#[sqlx::test]
async fn test_find_by_code(pool: SqlitePool) {
    common::create_test_record(&pool, "ab12cd", "https://example.com/x", "2024-05-01T10:00:00Z")
        .await;

    let repo = SqliteUrlRepository::new(Arc::new(pool));
    let record = repo.find_by_code("ab12cd").await.unwrap().unwrap();

    assert_eq!(record.url, "https://example.com/x");
    assert_eq!(
        record.created_at,
        Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
    );
}

#[sqlx::test]
async fn test_find_by_code_is_case_sensitive(pool: SqlitePool) {
    common::create_test_record(&pool, "AbCdEf", "https://example.com/", "2024-05-01T10:00:00Z")
        .await;

    let repo = SqliteUrlRepository::new(Arc::new(pool));

    assert!(repo.find_by_code("AbCdEf").await.unwrap().is_some());
    assert!(repo.find_by_code("abcdef").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_find_by_code_not_found(pool: SqlitePool) {
    let repo = SqliteUrlRepository::new(Arc::new(pool));

    let result = repo.find_by_code("nope00").await.unwrap();

    assert!(result.is_none());
}

#[sqlx::test]
async fn test_exists(pool: SqlitePool) {
    common::create_test_record(&pool, "here01", "https://example.com/", "2024-05-01T10:00:00Z")
        .await;

    let repo = SqliteUrlRepository::new(Arc::new(pool));

    assert!(repo.exists("here01").await.unwrap());
    assert!(!repo.exists("gone01").await.unwrap());
}

#[sqlx::test]
async fn test_update_url_keeps_code_and_created_at(pool: SqlitePool) {
    common::create_test_record(&pool, "upd001", "https://example.com/a", "2024-05-01T10:00:00Z")
        .await;

    let repo = SqliteUrlRepository::new(Arc::new(pool));
    let later = Utc.with_ymd_and_hms(2024, 5, 1, 10, 5, 0).unwrap();

    let record = repo
        .update_url("upd001", "https://example.com/b", later)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(record.short_code, "upd001");
    assert_eq!(record.url, "https://example.com/b");
    assert_eq!(
        record.created_at,
        Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
    );
    assert_eq!(record.updated_at, later);
    assert!(record.is_modified());
}

#[sqlx::test]
async fn test_update_url_never_moves_updated_at_backwards(pool: SqlitePool) {
    common::create_test_record(&pool, "clk001", "https://example.com/a", "2024-05-01T10:00:00Z")
        .await;

    let repo = SqliteUrlRepository::new(Arc::new(pool));
    let created = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();

    let record = repo
        .update_url("clk001", "https://example.com/b", created - Duration::hours(1))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(record.url, "https://example.com/b");
    assert_eq!(record.updated_at, created);
    assert!(record.created_at <= record.updated_at);
}

#[sqlx::test]
async fn test_update_url_not_found(pool: SqlitePool) {
    let repo = SqliteUrlRepository::new(Arc::new(pool));

    let result = repo
        .update_url("nope00", "https://example.com/", Utc::now())
        .await
        .unwrap();

    assert!(result.is_none());
}

#[sqlx::test]
async fn test_delete(pool: SqlitePool) {
    common::create_test_record(&pool, "del001", "https://example.com/", "2024-05-01T10:00:00Z")
        .await;

    let repo = SqliteUrlRepository::new(Arc::new(pool));

    assert!(repo.delete("del001").await.unwrap());
    assert!(!repo.delete("del001").await.unwrap());
    assert!(repo.find_by_code("del001").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_deleted_code_can_be_reused(pool: SqlitePool) {
    let repo = SqliteUrlRepository::new(Arc::new(pool));

    let first = repo
        .insert(new_record("again1", "https://example.com/a"))
        .await
        .unwrap();
    repo.delete("again1").await.unwrap();
    let second = repo
        .insert(new_record("again1", "https://example.com/b"))
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(second.url, "https://example.com/b");
}

#[sqlx::test]
async fn test_count(pool: SqlitePool) {
    let repo = SqliteUrlRepository::new(Arc::new(pool));

    assert_eq!(repo.count().await.unwrap(), 0);

    repo.insert(new_record("cnt001", "https://example.com/a"))
        .await
        .unwrap();
    repo.insert(new_record("cnt002", "https://example.com/b"))
        .await
        .unwrap();

    assert_eq!(repo.count().await.unwrap(), 2);
}

#[sqlx::test]
async fn test_corrupt_timestamp_reports_store_error(pool: SqlitePool) {
    common::create_test_record(&pool, "bad001", "https://example.com/", "yesterday").await;

    let repo = SqliteUrlRepository::new(Arc::new(pool));
    let err = repo.find_by_code("bad001").await.unwrap_err();

    assert!(matches!(err, RegistryError::StoreUnavailable { .. }));
}
