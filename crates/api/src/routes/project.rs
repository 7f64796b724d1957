//! Route definitions for the `/projects` resource.
//!
//! Also nests the project-scoped RFQ operations under
//! `/projects/{id}/rfqs`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                   -> list
/// POST   /                   -> create
/// GET    /{id}               -> get_by_id
/// PUT    /{id}               -> update
/// DELETE /{id}               -> delete
/// POST   /{id}/archive       -> archive
/// POST   /{id}/unarchive     -> unarchive
/// GET    /{id}/rfqs          -> list_rfqs (grouped by company)
/// POST   /{id}/rfqs          -> create_rfqs
/// POST   /{id}/rfqs/send     -> send_rfqs
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route("/{id}/archive", post(project::archive))
        .route("/{id}/unarchive", post(project::unarchive))
        .route("/{id}/rfqs", get(project::list_rfqs).post(project::create_rfqs))
        .route("/{id}/rfqs/send", post(project::send_rfqs))
}
