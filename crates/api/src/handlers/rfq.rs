//! Handlers for the `/rfqs` resource: single creation, sending, and
//! status transitions.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use estapp_core::error::CoreError;
use estapp_core::rfq_status::RfqStatus;
use estapp_core::types::DbId;
use estapp_db::models::rfq::{CreateRfq, Rfq};
use estapp_db::repositories::RfqRepo;
use serde::Deserialize;
use validator::Validate;

use crate::engine::rfq::{self as rfq_engine, SendOutcome};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

use super::current_user_id;

/// POST /api/v1/rfqs
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateRfq>,
) -> AppResult<(StatusCode, Json<Rfq>)> {
    input.validate()?;
    let user_id = current_user_id(&state).await?;
    let rfq = RfqRepo::create(&state.pool, user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(rfq)))
}

/// GET /api/v1/rfqs/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Rfq>> {
    let user_id = current_user_id(&state).await?;
    let rfq = RfqRepo::find_by_id(&state.pool, user_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "RFQ", id }))?;
    Ok(Json(rfq))
}

/// POST /api/v1/rfqs/{id}/send
pub async fn send(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SendOutcome>> {
    let user_id = current_user_id(&state).await?;
    let outcome =
        rfq_engine::mark_sent(&state.pool, user_id, id, &state.config.reply_to_email).await?;
    Ok(Json(outcome))
}

/// Body of a status transition request.
#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub status: String,
}

/// PUT /api/v1/rfqs/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<StatusRequest>,
) -> AppResult<Json<Rfq>> {
    let status = RfqStatus::from_str(&input.status).ok_or_else(|| {
        AppError::Core(CoreError::Validation(format!(
            "Unknown RFQ status '{}'",
            input.status
        )))
    })?;
    let user_id = current_user_id(&state).await?;
    let rfq = rfq_engine::update_status(&state.pool, user_id, id, status).await?;
    Ok(Json(rfq))
}
