//! Handlers for the `/contacts` resource, including spreadsheet import.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use estapp_core::error::CoreError;
use estapp_core::import::ImportSummary;
use estapp_core::types::DbId;
use estapp_db::models::contact::{Contact, CreateContact, UpdateContact};
use estapp_db::repositories::ContactRepo;
use serde::Deserialize;
use validator::Validate;

use crate::engine::import::{self, WireRow};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

use super::current_user_id;

/// POST /api/v1/contacts
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateContact>,
) -> AppResult<(StatusCode, Json<Contact>)> {
    input.validate()?;
    let user_id = current_user_id(&state).await?;
    let contact = ContactRepo::create(&state.pool, user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(contact)))
}

/// GET /api/v1/contacts
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Contact>>> {
    let user_id = current_user_id(&state).await?;
    let contacts = ContactRepo::list(&state.pool, user_id).await?;
    Ok(Json(contacts))
}

/// GET /api/v1/contacts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Contact>> {
    let user_id = current_user_id(&state).await?;
    let contact = ContactRepo::find_by_id(&state.pool, user_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Contact",
            id,
        }))?;
    Ok(Json(contact))
}

/// PUT /api/v1/contacts/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateContact>,
) -> AppResult<Json<Contact>> {
    let user_id = current_user_id(&state).await?;
    let contact = ContactRepo::update(&state.pool, user_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Contact",
            id,
        }))?;
    Ok(Json(contact))
}

/// DELETE /api/v1/contacts/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let user_id = current_user_id(&state).await?;
    let deleted = ContactRepo::delete(&state.pool, user_id, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Contact",
            id,
        }))
    }
}

/// Body of a spreadsheet import request: the parsed rows, in file order.
#[derive(Debug, Deserialize)]
pub struct ImportRequest {
    pub rows: Vec<WireRow>,
}

/// POST /api/v1/contacts/import
pub async fn import(
    State(state): State<AppState>,
    Json(input): Json<ImportRequest>,
) -> AppResult<Json<ImportSummary>> {
    let user_id = current_user_id(&state).await?;
    let summary = import::import_contacts(&state.pool, user_id, &input.rows).await?;
    Ok(Json(summary))
}
