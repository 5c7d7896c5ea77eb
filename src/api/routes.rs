//! API route configuration.

use crate::api::handlers::{delete_handler, resolve_handler, shorten_handler, update_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Short code management routes.
///
/// # Endpoints
///
/// - `POST   /shorten`         - Create a short code for a URL
/// - `GET    /shorten/{code}`  - Look up the URL behind a code
/// - `PUT    /shorten/{code}`  - Point a code at a new URL
/// - `DELETE /shorten/{code}`  - Remove a code
pub fn shorten_routes() -> Router<AppState> {
    Router::new().route("/shorten", post(shorten_handler)).route(
        "/shorten/{code}",
        get(resolve_handler)
            .put(update_handler)
            .delete(delete_handler),
    )
}
