//! HTTP request handlers grouped by resource.

pub mod bid;
pub mod contact;
pub mod project;
pub mod rfq;
pub mod subcategory;

use estapp_core::types::DbId;
use estapp_db::repositories::UserRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// Resolve the single-tenant default user for this request.
pub(crate) async fn current_user_id(state: &AppState) -> AppResult<DbId> {
    let user = UserRepo::get_or_create_default(&state.pool).await?;
    Ok(user.id)
}
