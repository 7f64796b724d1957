//! Handlers for the `/bids` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use estapp_core::bid::BidStatus;
use estapp_core::error::CoreError;
use estapp_core::types::DbId;
use estapp_db::models::bid::{Bid, BidWithItems, CreateBid, UpdateBid};
use estapp_db::repositories::BidRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

use super::current_user_id;

fn check_status(status: Option<&str>) -> AppResult<()> {
    if let Some(s) = status {
        BidStatus::from_str(s).ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!("Unknown bid status '{s}'")))
        })?;
    }
    Ok(())
}

/// POST /api/v1/bids
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateBid>,
) -> AppResult<(StatusCode, Json<BidWithItems>)> {
    input.validate()?;
    check_status(input.status.as_deref())?;
    let user_id = current_user_id(&state).await?;
    let bid = BidRepo::create(&state.pool, user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(bid)))
}

/// GET /api/v1/bids
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Bid>>> {
    let user_id = current_user_id(&state).await?;
    let bids = BidRepo::list(&state.pool, user_id).await?;
    Ok(Json(bids))
}

/// GET /api/v1/bids/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<BidWithItems>> {
    let user_id = current_user_id(&state).await?;
    let bid = BidRepo::find_with_items(&state.pool, user_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Bid", id }))?;
    Ok(Json(bid))
}

/// PUT /api/v1/bids/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBid>,
) -> AppResult<Json<BidWithItems>> {
    check_status(input.status.as_deref())?;
    let user_id = current_user_id(&state).await?;
    let bid = BidRepo::update(&state.pool, user_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Bid", id }))?;
    Ok(Json(bid))
}

/// DELETE /api/v1/bids/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let user_id = current_user_id(&state).await?;
    let deleted = BidRepo::delete(&state.pool, user_id, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Bid", id }))
    }
}
