//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::domain::RegistryError;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code_generator::is_well_formed;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Responds with 307 Temporary Redirect so later updates to the code take
/// effect for clients that saw the old target.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist. Paths that
/// cannot be a generated code (`/favicon.ico`) are rejected without a lookup.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    if !is_well_formed(&code) {
        return Err(RegistryError::not_found(code).into());
    }

    let url = state.registry.resolve(&code).await?;

    tracing::debug!(short_code = %code, "Redirecting");

    Ok(Redirect::temporary(&url))
}
