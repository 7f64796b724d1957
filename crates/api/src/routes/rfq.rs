//! Route definitions for the `/rfqs` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::rfq;
use crate::state::AppState;

/// Routes mounted at `/rfqs`.
///
/// ```text
/// POST   /               -> create
/// GET    /{id}           -> get_by_id
/// POST   /{id}/send      -> send
/// PUT    /{id}/status    -> update_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(rfq::create))
        .route("/{id}", get(rfq::get_by_id))
        .route("/{id}/send", post(rfq::send))
        .route("/{id}/status", put(rfq::update_status))
}
