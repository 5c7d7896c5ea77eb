#![allow(dead_code)]

use sqlx::SqlitePool;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use url_registry::application::services::{DEFAULT_MAX_CREATE_ATTEMPTS, UrlRegistry};
use url_registry::infrastructure::persistence::SqliteUrlRepository;
use url_registry::state::AppState;
use url_registry::utils::code_generator::{CodeGenerator, RandomCodeGenerator};

/// Hands out a fixed list of codes, repeating the last one forever.
pub struct ScriptedGenerator {
    codes: Mutex<VecDeque<String>>,
    last: String,
}

impl ScriptedGenerator {
    pub fn new(codes: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            codes: Mutex::new(codes.iter().map(|c| c.to_string()).collect()),
            last: codes.last().unwrap().to_string(),
        })
    }
}

impl CodeGenerator for ScriptedGenerator {
    fn generate(&self) -> String {
        self.codes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.last.clone())
    }
}

pub async fn create_test_record(pool: &SqlitePool, code: &str, url: &str, created_at: &str) {
    sqlx::query(
        "INSERT INTO shortened_urls (url, short_code, created_at, updated_at) VALUES (?, ?, ?, ?)",
    )
    .bind(url)
    .bind(code)
    .bind(created_at)
    .bind(created_at)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn count_records(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM shortened_urls")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_registry(
    pool: SqlitePool,
    generator: Arc<dyn CodeGenerator>,
    max_attempts: usize,
) -> UrlRegistry<SqliteUrlRepository> {
    let repository = Arc::new(SqliteUrlRepository::new(Arc::new(pool)));
    UrlRegistry::with_generator(repository, generator, max_attempts)
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    create_test_state_with_generator(
        pool,
        Arc::new(RandomCodeGenerator),
        DEFAULT_MAX_CREATE_ATTEMPTS,
    )
}

pub fn create_test_state_with_generator(
    pool: SqlitePool,
    generator: Arc<dyn CodeGenerator>,
    max_attempts: usize,
) -> AppState {
    AppState::new(Arc::new(create_registry(pool, generator, max_attempts)))
}
