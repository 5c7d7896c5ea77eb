//! Handlers for the `/shorten` endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::shorten::{
    ResolveResponse, ShortenResponse, UrlRecordResponse, extract_url_input,
};
use crate::domain::RegistryError;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_validator::validate_url;

/// Creates a short code for a URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// The URL as raw text, as a JSON string, or as `{"url": "..."}`. Bare
/// domains such as `example.com` are accepted and stored as
/// `https://example.com/`.
///
/// # Response
///
/// ```json
/// { "short_code": "Zx9_aQ" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is invalid.
/// Returns 500 Internal Server Error if no free code could be found.
pub async fn shorten_handler(
    State(state): State<AppState>,
    body: String,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let url = validate_url(&extract_url_input(&body)).map_err(RegistryError::from)?;

    let short_code = state.registry.create(&url).await?;

    Ok((StatusCode::CREATED, Json(ShortenResponse { short_code })))
}

/// Returns the URL behind a short code.
///
/// # Endpoint
///
/// `GET /shorten/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown.
pub async fn resolve_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ResolveResponse>, AppError> {
    let original_url = state.registry.resolve(&code).await?;

    Ok(Json(ResolveResponse { original_url }))
}

/// Points an existing short code at a new URL.
///
/// # Endpoint
///
/// `PUT /shorten/{code}`
///
/// # Request Body
///
/// Same forms as `POST /shorten`.
///
/// # Response
///
/// ```json
/// {
///   "id": 1,
///   "url": "https://example.com/b",
///   "short_code": "Zx9_aQ",
///   "created_at": "2024-05-01T10:00:00Z",
///   "updated_at": "2024-05-01T10:05:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is invalid.
/// Returns 404 Not Found if the code is unknown.
pub async fn update_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    body: String,
) -> Result<Json<UrlRecordResponse>, AppError> {
    let url = validate_url(&extract_url_input(&body)).map_err(RegistryError::from)?;

    let record = state.registry.update(&code, &url).await?;

    Ok(Json(record.into()))
}

/// Removes a short code.
///
/// # Endpoint
///
/// `DELETE /shorten/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown or already deleted.
pub async fn delete_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.registry.delete(&code).await?;

    Ok(StatusCode::NO_CONTENT)
}
