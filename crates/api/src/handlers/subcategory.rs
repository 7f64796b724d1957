//! Handlers for the `/subcategories` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use estapp_core::contact_type::ContactType;
use estapp_core::error::CoreError;
use estapp_core::types::DbId;
use estapp_db::models::subcategory::{CreateSubcategory, Subcategory};
use estapp_db::repositories::SubcategoryRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

use super::current_user_id;

/// GET /api/v1/subcategories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Subcategory>>> {
    let user_id = current_user_id(&state).await?;
    let subcategories = SubcategoryRepo::list(&state.pool, user_id).await?;
    Ok(Json(subcategories))
}

/// POST /api/v1/subcategories
///
/// The name is trimmed before validation and insert. Creating a
/// (type, name) pair that already exists is a no-op, not an error.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSubcategory>,
) -> AppResult<Response> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Name is required".to_string(),
        )));
    }
    let contact_type = ContactType::from_str(&input.contact_type).ok_or_else(|| {
        AppError::Core(CoreError::Validation(format!(
            "Unknown contact type '{}'",
            input.contact_type
        )))
    })?;

    let user_id = current_user_id(&state).await?;
    match SubcategoryRepo::create(&state.pool, user_id, contact_type.as_str(), name).await? {
        Some(created) => Ok((StatusCode::CREATED, Json(created)).into_response()),
        None => {
            tracing::debug!(
                contact_type = contact_type.label(),
                name,
                "subcategory already exists; nothing to do"
            );
            Ok(StatusCode::NO_CONTENT.into_response())
        }
    }
}

/// DELETE /api/v1/subcategories/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let user_id = current_user_id(&state).await?;
    let deleted = SubcategoryRepo::delete(&state.pool, user_id, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Subcategory",
            id,
        }))
    }
}
