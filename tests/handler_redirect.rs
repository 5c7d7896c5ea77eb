mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use sqlx::SqlitePool;
use url_registry::api::handlers::redirect_handler;

fn make_server(pool: SqlitePool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_redirect_success(pool: SqlitePool) {
    common::create_test_record(&pool, "go0001", "https://example.com/target", "2024-05-01T10:00:00Z")
        .await;
    let server = make_server(pool);

    let response = server.get("/go0001").await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[sqlx::test]
async fn test_redirect_not_found(pool: SqlitePool) {
    let server = make_server(pool);

    server.get("/nope00").await.assert_status_not_found();
}

#[sqlx::test]
async fn test_redirect_malformed_code(pool: SqlitePool) {
    let server = make_server(pool);

    let response = server.get("/favicon.ico").await;

    response.assert_status_not_found();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "not_found");
}

#[sqlx::test]
async fn test_redirect_follows_update(pool: SqlitePool) {
    common::create_test_record(&pool, "go0002", "https://example.com/old", "2024-05-01T10:00:00Z")
        .await;
    sqlx::query("UPDATE shortened_urls SET url = ? WHERE short_code = ?")
        .bind("https://example.com/new")
        .bind("go0002")
        .execute(&pool)
        .await
        .unwrap();
    let server = make_server(pool);

    let response = server.get("/go0002").await;

    assert_eq!(response.header("location"), "https://example.com/new");
}
