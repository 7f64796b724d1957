pub mod bid;
pub mod contact;
pub mod health;
pub mod project;
pub mod rfq;
pub mod subcategory;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /contacts                     list, create
/// /contacts/import              spreadsheet import (POST)
/// /contacts/{id}                get, update, delete
///
/// /projects                     list (?archived=), create
/// /projects/{id}                get, update, delete
/// /projects/{id}/archive        archive (POST)
/// /projects/{id}/unarchive      unarchive (POST)
/// /projects/{id}/rfqs           list grouped by company, bulk create
/// /projects/{id}/rfqs/send      batch send (POST)
///
/// /rfqs                         create (single form flow)
/// /rfqs/{id}                    get
/// /rfqs/{id}/send               send or resend (POST)
/// /rfqs/{id}/status             transition (PUT)
///
/// /bids                         list, create
/// /bids/{id}                    get, update, delete
///
/// /subcategories                list, create
/// /subcategories/{id}           delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/contacts", contact::router())
        .nest("/projects", project::router())
        .nest("/rfqs", rfq::router())
        .nest("/bids", bid::router())
        .nest("/subcategories", subcategory::router())
}
