//! Handlers for the `/projects` resource, including archive state and the
//! project-scoped RFQ operations (bulk create, company grouping, batch
//! send).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use estapp_core::error::CoreError;
use estapp_core::rfq::group_by_company;
use estapp_core::types::DbId;
use estapp_db::models::project::{CreateProject, Project, UpdateProject};
use estapp_db::models::rfq::RfqWithContact;
use estapp_db::repositories::{ProjectRepo, RfqRepo};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::engine::rfq::{self as rfq_engine, BatchSendOutcome};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

use super::current_user_id;

/// Query string accepted by the project list endpoint.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// `true` lists archived projects, `false` active ones; absent lists
    /// everything.
    pub archived: Option<bool>,
}

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    input.validate()?;
    let user_id = current_user_id(&state).await?;
    let project = ProjectRepo::create(&state.pool, user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/projects
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Project>>> {
    let user_id = current_user_id(&state).await?;
    let projects = ProjectRepo::list(&state.pool, user_id, query.archived).await?;
    Ok(Json(projects))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    let user_id = current_user_id(&state).await?;
    let project = ProjectRepo::find_by_id(&state.pool, user_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// PUT /api/v1/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    let user_id = current_user_id(&state).await?;
    let project = ProjectRepo::update(&state.pool, user_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// POST /api/v1/projects/{id}/archive
pub async fn archive(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    set_archived(state, id, true).await
}

/// POST /api/v1/projects/{id}/unarchive
pub async fn unarchive(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    set_archived(state, id, false).await
}

async fn set_archived(state: AppState, id: DbId, archived: bool) -> AppResult<StatusCode> {
    let user_id = current_user_id(&state).await?;
    let updated = ProjectRepo::set_archived(&state.pool, user_id, id, archived).await?;
    if updated {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
    }
}

/// DELETE /api/v1/projects/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let user_id = current_user_id(&state).await?;
    let deleted = ProjectRepo::delete(&state.pool, user_id, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
    }
}

/// One company bucket in the grouped RFQ listing.
#[derive(Debug, Serialize)]
pub struct CompanyGroup {
    pub company: String,
    pub rfqs: Vec<RfqWithContact>,
}

/// GET /api/v1/projects/{id}/rfqs
///
/// Lists the project's RFQs grouped by contact company, alphabetically
/// with the no-company bucket last.
pub async fn list_rfqs(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<CompanyGroup>>> {
    let user_id = current_user_id(&state).await?;
    let rfqs = RfqRepo::list_by_project_with_contact(&state.pool, user_id, id).await?;

    let keyed: Vec<(Option<String>, RfqWithContact)> = rfqs
        .into_iter()
        .map(|r| (r.contact_company.clone(), r))
        .collect();
    let groups = group_by_company(keyed)
        .into_iter()
        .map(|(company, rfqs)| CompanyGroup { company, rfqs })
        .collect();
    Ok(Json(groups))
}

/// Body of a bulk RFQ creation request.
#[derive(Debug, Deserialize)]
pub struct CreateRfqsRequest {
    pub contact_ids: Vec<DbId>,
}

/// Response of a bulk RFQ creation request.
#[derive(Debug, Serialize)]
pub struct CreateRfqsResponse {
    pub created: u64,
}

/// POST /api/v1/projects/{id}/rfqs
pub async fn create_rfqs(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateRfqsRequest>,
) -> AppResult<(StatusCode, Json<CreateRfqsResponse>)> {
    let user_id = current_user_id(&state).await?;
    let created = rfq_engine::create_rfqs(&state.pool, user_id, id, &input.contact_ids).await?;
    Ok((StatusCode::CREATED, Json(CreateRfqsResponse { created })))
}

/// Body of a batch send request.
#[derive(Debug, Deserialize)]
pub struct BatchSendRequest {
    pub rfq_ids: Vec<DbId>,
}

/// POST /api/v1/projects/{id}/rfqs/send
pub async fn send_rfqs(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<BatchSendRequest>,
) -> AppResult<Json<BatchSendOutcome>> {
    let user_id = current_user_id(&state).await?;
    let outcome = rfq_engine::mark_batch_sent(
        &state.pool,
        user_id,
        id,
        &input.rfq_ids,
        &state.config.reply_to_email,
    )
    .await?;
    Ok(Json(outcome))
}
