//! Route definitions for the `/subcategories` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::subcategory;
use crate::state::AppState;

/// Routes mounted at `/subcategories`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(subcategory::list).post(subcategory::create))
        .route("/{id}", delete(subcategory::delete))
}
