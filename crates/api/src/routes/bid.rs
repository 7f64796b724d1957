//! Route definitions for the `/bids` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::bid;
use crate::state::AppState;

/// Routes mounted at `/bids`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(bid::list).post(bid::create))
        .route(
            "/{id}",
            get(bid::get_by_id).put(bid::update).delete(bid::delete),
        )
}
