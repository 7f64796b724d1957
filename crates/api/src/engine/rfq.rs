//! RFQ lifecycle engine.
//!
//! Owns the status state machine for a single RFQ and the bulk operations
//! (create for N contacts, batch send) that must stay consistent under
//! partial failure and duplicate-avoidance rules.

use estapp_core::error::CoreError;
use estapp_core::mail::{self, MailMessage};
use estapp_core::rfq::default_subject;
use estapp_core::rfq_status::RfqStatus;
use estapp_core::types::DbId;
use estapp_db::models::rfq::Rfq;
use estapp_db::repositories::{ProjectRepo, RfqRepo};
use serde::Serialize;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};

/// Outcome of a single send: the updated row plus the composed message
/// for the external mail dispatcher.
#[derive(Debug, Serialize)]
pub struct SendOutcome {
    pub rfq: Rfq,
    pub message: MailMessage,
}

/// Outcome of a company batch send.
#[derive(Debug, Serialize)]
pub struct BatchSendOutcome {
    /// Number of RFQs transitioned to `SENT`.
    pub sent: u64,
    /// Combined message addressed to every qualifying contact.
    pub message: MailMessage,
}

/// Create `DRAFT` RFQs for a project, one per contact.
///
/// If the project does not resolve for this user the call is a silent
/// no-op ("nothing to do", not an error). Contacts that already have an
/// RFQ for this project are skipped by the storage-level uniqueness
/// constraint; partial success is expected. Returns the inserted count.
pub async fn create_rfqs(
    pool: &PgPool,
    user_id: DbId,
    project_id: DbId,
    contact_ids: &[DbId],
) -> AppResult<u64> {
    let Some(project) = ProjectRepo::find_by_id(pool, user_id, project_id).await? else {
        tracing::warn!(project_id, "createRFQs for unknown project; nothing to do");
        return Ok(0);
    };

    let created = RfqRepo::create_many_drafts(
        pool,
        user_id,
        project_id,
        contact_ids,
        &default_subject(&project.name),
    )
    .await?;
    tracing::info!(project_id, requested = contact_ids.len(), created, "created RFQs");
    Ok(created)
}

/// Mark a single RFQ sent and compose its message.
///
/// Valid from `DRAFT` (transitions to `SENT`) and from `SENT` (resend:
/// re-dispatch with no state change). Any other current status is
/// rejected with `InvalidTransition` and no state change.
pub async fn mark_sent(
    pool: &PgPool,
    user_id: DbId,
    rfq_id: DbId,
    reply_to: &str,
) -> AppResult<SendOutcome> {
    let rfq = RfqRepo::find_by_id(pool, user_id, rfq_id)
        .await?
        .ok_or(CoreError::NotFound { entity: "RFQ", id: rfq_id })?;

    let current = parse_status(&rfq)?;
    let rfq = match current {
        RfqStatus::Draft => RfqRepo::set_status(pool, user_id, rfq_id, RfqStatus::Sent.as_str())
            .await?
            .ok_or(CoreError::NotFound { entity: "RFQ", id: rfq_id })?,
        RfqStatus::Sent => rfq, // resend self-loop
        from => {
            return Err(CoreError::InvalidTransition { from, to: RfqStatus::Sent }.into());
        }
    };

    let message = compose_single(pool, user_id, &rfq, reply_to).await?;
    Ok(SendOutcome { rfq, message })
}

/// Batch-send a project's RFQs.
///
/// Applies single-send semantics to every id that is still `DRAFT` and
/// whose contact has a deliverable address; ids not meeting the
/// precondition are silently excluded. Returns the updated count and the
/// combined company message ("Hi," salutation, all addresses in one
/// recipient list).
pub async fn mark_batch_sent(
    pool: &PgPool,
    user_id: DbId,
    project_id: DbId,
    rfq_ids: &[DbId],
    reply_to: &str,
) -> AppResult<BatchSendOutcome> {
    let project = ProjectRepo::find_by_id(pool, user_id, project_id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Project", id: project_id })?;

    let sendable = RfqRepo::list_sendable(pool, user_id, project_id, rfq_ids).await?;
    let recipients: Vec<String> = sendable
        .iter()
        .filter_map(|r| r.contact_email.clone())
        .collect();

    let sent = RfqRepo::mark_batch_sent(pool, user_id, project_id, rfq_ids).await?;
    tracing::info!(project_id, requested = rfq_ids.len(), sent, "batch send");

    let message = mail::company_quote_request(
        &project.name,
        recipients,
        project.due_date,
        project.file_url.as_deref(),
        reply_to,
    );
    Ok(BatchSendOutcome { sent, message })
}

/// Validate and apply a one-hop status transition.
///
/// Fails with `InvalidTransition` (and no state change) if `new_status`
/// is not reachable from the current status.
pub async fn update_status(
    pool: &PgPool,
    user_id: DbId,
    rfq_id: DbId,
    new_status: RfqStatus,
) -> AppResult<Rfq> {
    let rfq = RfqRepo::find_by_id(pool, user_id, rfq_id)
        .await?
        .ok_or(CoreError::NotFound { entity: "RFQ", id: rfq_id })?;

    let current = parse_status(&rfq)?;
    if !current.can_transition(new_status) {
        return Err(CoreError::InvalidTransition { from: current, to: new_status }.into());
    }

    RfqRepo::set_status(pool, user_id, rfq_id, new_status.as_str())
        .await?
        .ok_or(CoreError::NotFound { entity: "RFQ", id: rfq_id }.into())
}

fn parse_status(rfq: &Rfq) -> Result<RfqStatus, AppError> {
    RfqStatus::from_str(&rfq.status).ok_or_else(|| {
        CoreError::Internal(format!("RFQ {} has unknown status '{}'", rfq.id, rfq.status)).into()
    })
}

async fn compose_single(
    pool: &PgPool,
    user_id: DbId,
    rfq: &Rfq,
    reply_to: &str,
) -> AppResult<MailMessage> {
    let project_id = rfq.project_id.ok_or_else(|| {
        AppError::Core(CoreError::Validation("RFQ is not linked to a project".into()))
    })?;
    let project = ProjectRepo::find_by_id(pool, user_id, project_id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Project", id: project_id })?;

    let contact_id = rfq.contact_id.ok_or_else(|| {
        AppError::Core(CoreError::Validation("RFQ is not linked to a contact".into()))
    })?;
    let contact = estapp_db::repositories::ContactRepo::find_by_id(pool, user_id, contact_id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Contact", id: contact_id })?;
    let email = contact.email.as_deref().filter(|e| !e.is_empty()).ok_or_else(|| {
        AppError::Core(CoreError::Validation("Contact has no email address".into()))
    })?;

    Ok(mail::quote_request(
        &project.name,
        &contact.name,
        email,
        project.due_date,
        project.file_url.as_deref(),
        reply_to,
    ))
}
