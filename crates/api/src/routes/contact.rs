//! Route definitions for the `/contacts` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Routes mounted at `/contacts`.
///
/// ```text
/// GET    /            -> list
/// POST   /            -> create
/// POST   /import      -> import
/// GET    /{id}        -> get_by_id
/// PUT    /{id}        -> update
/// DELETE /{id}        -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(contact::list).post(contact::create))
        .route("/import", post(contact::import))
        .route(
            "/{id}",
            get(contact::get_by_id)
                .put(contact::update)
                .delete(contact::delete),
        )
}
